use crate::bail_input;
use crate::error::{Result, RouteError};
use crate::graph::types::{Cost, Edge, Vertex};

/// Largest vertex count a graph may declare
pub const MAX_VERTICES: usize = 1 << 24;

/// Read access to a graph's outgoing edges
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;

    /// Edges leaving `vertex`, in input order. Empty for unknown vertices.
    fn outbound_edges(&self, vertex: Vertex) -> &[Edge];
}

/// Immutable adjacency representation of a weighted directed graph.
///
/// Built once from a validated edge list. Parallel edges are kept, in input
/// order, for expansion; only the display matrix collapses them.
#[derive(Debug, Clone)]
pub struct GraphStore {
    vertex_count: usize,
    edges: Vec<Edge>,
    outbound: Vec<Vec<Edge>>,
}

impl GraphStore {
    /// Build a graph of `vertex_count` vertices from `edges`.
    ///
    /// Fails on vertex counts above [`MAX_VERTICES`], on endpoint ids outside
    /// `[0, vertex_count)` and on weights that are negative or not finite.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        if vertex_count > MAX_VERTICES {
            bail_input!(
                "vertex count {} exceeds the supported maximum of {}",
                vertex_count,
                MAX_VERTICES
            );
        }
        let mut outbound: Vec<Vec<Edge>> = Vec::new();
        outbound.try_reserve_exact(vertex_count).map_err(|_| {
            RouteError::malformed(format!(
                "cannot allocate adjacency for {} vertices",
                vertex_count
            ))
        })?;
        outbound.resize_with(vertex_count, Vec::new);

        for edge in &edges {
            if edge.from >= vertex_count || edge.to >= vertex_count {
                return Err(RouteError::VertexOutOfRange {
                    from: edge.from,
                    to: edge.to,
                    vertex_count,
                });
            }
            if edge.weight.value().is_nan() || edge.weight.value().is_infinite() {
                return Err(RouteError::InvalidWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight.value(),
                });
            }
            if !edge.weight.is_valid_weight() {
                return Err(RouteError::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight.value(),
                });
            }
            outbound[edge.from].push(*edge);
        }

        tracing::debug!(
            vertices = vertex_count,
            edges = edges.len(),
            "graph_store_built"
        );

        Ok(GraphStore {
            vertex_count,
            edges,
            outbound,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list in input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// `(to, weight)` for every edge leaving `vertex`, in input order
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Cost)> + '_ {
        self.outbound_edges(vertex)
            .iter()
            .map(|edge| (edge.to, edge.weight))
    }

    /// Dense display view. Later parallel edges overwrite earlier ones.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<Cost>>> {
        let mut matrix = vec![vec![None; self.vertex_count]; self.vertex_count];
        for edge in &self.edges {
            matrix[edge.from][edge.to] = Some(edge.weight);
        }
        matrix
    }
}

impl GraphProvider for GraphStore {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn outbound_edges(&self, vertex: Vertex) -> &[Edge] {
        self.outbound.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
