//! The city graph a vehicle operates on: cities connected by roads with
//! known lengths. Besides plain adjacency, the topology answers
//! shortest-path distance queries between arbitrary cities (precomputed once
//! at construction) and can produce an explicit shortest route.

use crate::model::ProblemError;
use petgraph::algo::{astar, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Deserialize;
use std::collections::HashMap;

/// Identity of a city, valid for the topology that produced it.
pub type CityId = NodeIndex;

/// A road between two named cities, as it appears in an instance file.
#[derive(Debug, Clone, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

#[derive(Debug)]
pub struct Topology {
    graph: UnGraph<String, f64>,
    name_table: HashMap<String, CityId>,
    /// All-pairs shortest-path distances, indexed by node indices.
    /// Unreachable pairs hold infinity.
    distances: Vec<Vec<f64>>,
}

impl Topology {
    pub fn new(cities: &[String], roads: &[Road]) -> Result<Self, ProblemError> {
        let mut graph = UnGraph::new_undirected();
        let mut name_table = HashMap::new();

        for name in cities {
            if name_table.contains_key(name) {
                return Err(ProblemError::DuplicateCity(name.clone()));
            }
            let id = graph.add_node(name.clone());
            name_table.insert(name.clone(), id);
        }

        for road in roads {
            let from = *name_table
                .get(&road.from)
                .ok_or_else(|| ProblemError::UnknownCity(road.from.clone()))?;
            let to = *name_table
                .get(&road.to)
                .ok_or_else(|| ProblemError::UnknownCity(road.to.clone()))?;
            if !road.distance.is_finite() || road.distance < 0.0 {
                return Err(ProblemError::InvalidRoad(
                    road.from.clone(),
                    road.to.clone(),
                    road.distance,
                ));
            }
            graph.add_edge(from, to, road.distance);
        }

        let num_cities = graph.node_count();
        let mut distances = vec![vec![f64::INFINITY; num_cities]; num_cities];
        for source in graph.node_indices() {
            let reachable = dijkstra(&graph, source, None, |edge| *edge.weight());
            for (target, distance) in reachable {
                distances[source.index()][target.index()] = distance;
            }
        }

        Ok(Self {
            graph,
            name_table,
            distances,
        })
    }

    pub fn num_cities(&self) -> usize {
        self.graph.node_count()
    }

    /// Looks up a city by name.
    pub fn city(&self, name: &str) -> Option<CityId> {
        self.name_table.get(name).copied()
    }

    pub fn name(&self, city: CityId) -> &str {
        &self.graph[city]
    }

    /// Cities directly connected to `city` by a road. The iteration order is
    /// fixed by the order roads were declared in, so repeated planning calls
    /// on the same topology expand neighbors identically.
    pub fn neighbors(&self, city: CityId) -> impl Iterator<Item = CityId> + '_ {
        self.graph.neighbors(city)
    }

    pub fn are_neighbors(&self, a: CityId, b: CityId) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Shortest-path distance between two cities, infinity if disconnected.
    pub fn distance(&self, from: CityId, to: CityId) -> f64 {
        self.distances[from.index()][to.index()]
    }

    /// An explicit shortest route from `from` to `to`, both endpoints
    /// included. `None` if the cities are disconnected.
    pub fn path(&self, from: CityId, to: CityId) -> Option<Vec<CityId>> {
        astar(
            &self.graph,
            from,
            |city| city == to,
            |edge| *edge.weight(),
            |_| 0.0,
        )
        .map(|(_, path)| path)
    }
}
