use std::fmt;

use serde::Serialize;

use crate::graph::types::{Cost, Vertex};
use crate::routing::distance::DistanceTable;
use crate::routing::tree::ShortestPathTree;

pub const DEFAULT_UNREACHABLE: &str = "unreachable";

/// First hop from the tree's source toward `destination`.
///
/// The source routes to itself. `None` means `destination` is unreachable.
pub fn first_hop(tree: &ShortestPathTree, destination: Vertex) -> Option<Vertex> {
    tree.root()
        .child_toward(destination)
        .map(|child| tree.node(child).vertex())
}

/// One destination row of a routing table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub destination: Vertex,
    /// `None` (serialized as `null`) when the destination is unreachable
    pub first_hop: Option<Vertex>,
    pub distance: Option<Cost>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Vertex>,
}

impl RouteEntry {
    pub fn is_reachable(&self) -> bool {
        self.first_hop.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingTable {
    pub source: Vertex,
    pub routes: Vec<RouteEntry>,
}

impl RoutingTable {
    pub fn get(&self, destination: Vertex) -> Option<&RouteEntry> {
        self.routes.get(destination)
    }

    pub fn reachable_count(&self) -> usize {
        self.routes.iter().filter(|r| r.is_reachable()).count()
    }

    /// Human-readable first-hop table plus distances, with `unreachable`
    /// in the first-hop column of unreachable rows
    pub fn display<'a>(&'a self, unreachable: &'a str) -> TableDisplay<'a> {
        TableDisplay {
            table: self,
            unreachable,
        }
    }
}

impl fmt::Display for RoutingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(DEFAULT_UNREACHABLE), f)
    }
}

pub struct TableDisplay<'a> {
    table: &'a RoutingTable,
    unreachable: &'a str,
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "First hop router list:")?;
        writeln!(f, "Destination Node  First Hop Node  Distance")?;
        for route in &self.table.routes {
            let hop = route
                .first_hop
                .map(|v| v.to_string())
                .unwrap_or_else(|| self.unreachable.to_string());
            let distance = route
                .distance
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:>16}  {:>14}  {:>8}",
                route.destination, hop, distance
            )?;
        }
        Ok(())
    }
}

/// Route every vertex in `0..vertex_count`
pub fn build_full_table(
    tree: &ShortestPathTree,
    distances: &DistanceTable,
    vertex_count: usize,
) -> RoutingTable {
    let routes = (0..vertex_count)
        .map(|destination| RouteEntry {
            destination,
            first_hop: first_hop(tree, destination),
            distance: distances.get(destination),
            path: tree.path_to(destination).unwrap_or_default(),
        })
        .collect();

    RoutingTable {
        source: tree.root().vertex(),
        routes,
    }
}
