use crate::error::{InvariantViolation, Result};
use crate::graph::types::{Cost, Vertex};

/// Finalized shortest distances from the source, indexed by vertex.
///
/// Each slot is written at most once; `None` means not yet finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    distances: Vec<Option<Cost>>,
}

impl DistanceTable {
    pub fn new(vertex_count: usize) -> Self {
        DistanceTable {
            distances: vec![None; vertex_count],
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn get(&self, vertex: Vertex) -> Option<Cost> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_finalized(&self, vertex: Vertex) -> bool {
        self.get(vertex).is_some()
    }

    /// Record the final distance for `vertex`
    pub fn record(&mut self, vertex: Vertex, distance: Cost) -> Result<()> {
        match self.distances.get_mut(vertex) {
            Some(slot @ None) => {
                *slot = Some(distance);
                Ok(())
            }
            Some(Some(_)) => Err(InvariantViolation::AlreadyFinalized { vertex }.into()),
            None => Err(InvariantViolation::UnknownVertex { vertex }.into()),
        }
    }

    pub fn finalized_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Distances in vertex order
    pub fn as_slice(&self) -> &[Option<Cost>] {
        &self.distances
    }
}
