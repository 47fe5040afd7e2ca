//! Tracks expanded states and their best known cost, so that equivalent
//! states reached again at equal or higher cost are pruned instead of
//! re-expanded.

use crate::search::{SearchState, StateKey};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct VisitedRegistry {
    expanded: HashMap<StateKey, f64>,
    reopenings: usize,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides whether `state` should be expanded. Consulted when a state is
    /// popped from the frontier, not when it is generated.
    ///
    /// An equivalent state already expanded at equal or lower cost dominates
    /// `state`: the registry is unchanged and `false` is returned. If the
    /// existing entry is more expensive, `state` supersedes it (the
    /// cost-improvement reopening a decrease-key would perform) and is
    /// expanded. Unseen states are recorded and expanded.
    pub fn admit(&mut self, state: &SearchState) -> bool {
        match self.expanded.entry(state.key()) {
            Entry::Occupied(mut entry) => {
                if *entry.get() <= state.cost {
                    false
                } else {
                    entry.insert(state.cost);
                    self.reopenings += 1;
                    true
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(state.cost);
                true
            }
        }
    }

    /// Number of distinct expanded states.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// How many admissions superseded a costlier expansion of an equivalent
    /// state.
    pub fn reopenings(&self) -> usize {
        self.reopenings
    }
}
