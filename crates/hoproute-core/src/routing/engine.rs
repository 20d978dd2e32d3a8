use std::time::Instant;

use serde::Serialize;

use crate::error::{Result, RouteError};
use crate::graph::store::GraphProvider;
use crate::graph::types::Vertex;
use crate::routing::distance::DistanceTable;
use crate::routing::frontier::{Frontier, FrontierEntry};
use crate::routing::table::{build_full_table, RoutingTable};
use crate::routing::tree::ShortestPathTree;
use crate::trace_time;

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComputationStats {
    /// Frontier extractions, the seed included
    pub iterations: usize,
    pub frontier_insertions: usize,
    pub purged_entries: usize,
    pub peak_frontier: usize,
    pub finalized: usize,
}

/// Finished shortest-path tree for one source
#[derive(Debug, Clone)]
pub struct RouteComputation {
    pub source: Vertex,
    pub tree: ShortestPathTree,
    pub distances: DistanceTable,
    pub stats: ComputationStats,
}

impl RouteComputation {
    pub fn routing_table(&self) -> RoutingTable {
        build_full_table(&self.tree, &self.distances, self.distances.len())
    }
}

/// Build the shortest-path tree rooted at `source`.
///
/// The frontier starts with a zero-weight self edge at `source`. Each round
/// extracts the cheapest candidate, drops the other candidates for the same
/// vertex, finalizes it into the tree, expands its outgoing edges toward
/// unfinalized vertices, and drops candidates whose target is finalized.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn compute_routes(graph: &dyn GraphProvider, source: Vertex) -> Result<RouteComputation> {
    let start = Instant::now();
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(RouteError::invalid_source(source, vertex_count));
    }

    let mut distances = DistanceTable::new(vertex_count);
    let mut tree = ShortestPathTree::create_root(source, &mut distances)?;
    let mut frontier = Frontier::new();
    let mut stats = ComputationStats::default();

    frontier.insert(FrontierEntry::seed(source));
    stats.frontier_insertions += 1;

    while let Some(entry) = frontier.extract_minimum(&distances)? {
        stats.iterations += 1;
        stats.purged_entries += frontier.purge_by_destination(entry.to);

        if !entry.is_seed() {
            tree.finalize(&entry, &mut distances)?;
        }

        for edge in graph.outbound_edges(entry.to) {
            if !distances.is_finalized(edge.to) {
                frontier.insert(FrontierEntry::from(*edge));
                stats.frontier_insertions += 1;
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        tracing::trace!(vertex = entry.to, frontier = frontier.len(), "expanded");

        stats.purged_entries += frontier.purge_finalized(&distances);
    }

    stats.finalized = distances.finalized_count();
    tracing::debug!(
        source,
        finalized = stats.finalized,
        unreachable = vertex_count - stats.finalized,
        iterations = stats.iterations,
        "routes computed"
    );
    trace_time!(start, "compute_routes", finalized = stats.finalized);

    Ok(RouteComputation {
        source,
        tree,
        distances,
        stats,
    })
}
