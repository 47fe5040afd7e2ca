//! Holds the not-yet-expanded states in the order the active strategy
//! requires: ascending accumulated cost for uniform-cost search, insertion
//! order for breadth-first search.

use crate::search::SearchState;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// A cost-ordered heap entry. Ties on cost are broken by insertion sequence
/// (first in, first out), which fixes a deterministic total order among
/// equal-cost states.
#[derive(Debug)]
struct CostOrderedEntry {
    cost: OrderedFloat<f64>,
    seq: u64,
    state: SearchState,
}

impl PartialEq for CostOrderedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for CostOrderedEntry {}

impl PartialOrd for CostOrderedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostOrderedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// The frontier may hold several entries for equivalent states at different
/// costs; deduplication is the visited registry's job at pop time.
#[derive(Debug)]
pub enum Frontier {
    CostOrdered {
        heap: BinaryHeap<Reverse<CostOrderedEntry>>,
        next_seq: u64,
    },
    Fifo {
        queue: VecDeque<SearchState>,
    },
}

impl Frontier {
    pub fn cost_ordered() -> Self {
        Frontier::CostOrdered {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn fifo() -> Self {
        Frontier::Fifo {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, state: SearchState) {
        match self {
            Frontier::CostOrdered { heap, next_seq } => {
                heap.push(Reverse(CostOrderedEntry {
                    cost: OrderedFloat(state.cost),
                    seq: *next_seq,
                    state,
                }));
                *next_seq += 1;
            }
            Frontier::Fifo { queue } => queue.push_back(state),
        }
    }

    pub fn pop(&mut self) -> Option<SearchState> {
        match self {
            Frontier::CostOrdered { heap, .. } => heap.pop().map(|Reverse(entry)| entry.state),
            Frontier::Fifo { queue } => queue.pop_front(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Frontier::CostOrdered { heap, .. } => heap.is_empty(),
            Frontier::Fifo { queue } => queue.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::CostOrdered { heap, .. } => heap.len(),
            Frontier::Fifo { queue } => queue.len(),
        }
    }
}
