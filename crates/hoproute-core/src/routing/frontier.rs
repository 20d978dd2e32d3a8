use crate::error::{InvariantViolation, Result};
use crate::graph::types::{Cost, Edge, Vertex};
use crate::routing::distance::DistanceTable;

/// Candidate edge from a finalized vertex toward a vertex that is not
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierEntry {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Cost,
}

impl FrontierEntry {
    pub fn new(from: Vertex, to: Vertex, weight: Cost) -> Self {
        FrontierEntry { from, to, weight }
    }

    /// Zero-weight self edge that starts a run at `source`
    pub fn seed(source: Vertex) -> Self {
        FrontierEntry::new(source, source, Cost::ZERO)
    }

    /// A self edge can only be the seed: any other vertex on both ends is
    /// already finalized and never enters the frontier.
    pub fn is_seed(&self) -> bool {
        self.from == self.to
    }
}

impl From<Edge> for FrontierEntry {
    fn from(edge: Edge) -> Self {
        FrontierEntry::new(edge.from, edge.to, edge.weight)
    }
}

/// Working set of candidate edges, kept in insertion order.
///
/// Minimum extraction is a linear scan; ties go to the entry found first.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.entries.iter()
    }

    pub fn insert(&mut self, entry: FrontierEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the entry minimizing `weight + distance[from]`.
    ///
    /// Returns `Ok(None)` on an empty frontier. An entry whose `from` has no
    /// finalized distance is an engine fault.
    pub fn extract_minimum(&mut self, distances: &DistanceTable) -> Result<Option<FrontierEntry>> {
        let mut best: Option<(usize, Cost)> = None;

        for (position, entry) in self.entries.iter().enumerate() {
            let base = distances
                .get(entry.from)
                .ok_or(InvariantViolation::UnfinalizedSource {
                    from: entry.from,
                    to: entry.to,
                })?;
            let cost = entry.weight + base;
            tracing::trace!(from = entry.from, to = entry.to, cost = %cost, "checking candidate");

            // strict: an equal cost later in the scan never displaces the first
            if best.is_none_or(|(_, min)| cost < min) {
                best = Some((position, cost));
            }
        }

        Ok(best.map(|(position, cost)| {
            let entry = self.entries.remove(position);
            tracing::trace!(vertex = entry.to, cost = %cost, "closest vertex");
            entry
        }))
    }

    /// Drop every entry targeting `vertex`; returns how many were removed
    pub fn purge_by_destination(&mut self, vertex: Vertex) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.to != vertex);
        let purged = before - self.entries.len();
        if purged > 0 {
            tracing::trace!(vertex, purged, "purged entries for finalized vertex");
        }
        purged
    }

    /// Drop every entry whose destination already has a final distance
    pub fn purge_finalized(&mut self, distances: &DistanceTable) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !distances.is_finalized(entry.to));
        before - self.entries.len()
    }
}
