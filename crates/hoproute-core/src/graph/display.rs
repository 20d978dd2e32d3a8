//! Text dumps of a loaded graph

use std::fmt;

use crate::graph::store::{GraphProvider, GraphStore};

/// Largest graph whose dense adjacency matrix is printed
pub const MATRIX_DUMP_LIMIT: usize = 256;

/// Dense adjacency matrix view with `missing` in empty cells
pub struct AdjacencyMatrix<'a> {
    graph: &'a GraphStore,
    missing: &'a str,
}

impl<'a> AdjacencyMatrix<'a> {
    pub fn new(graph: &'a GraphStore, missing: &'a str) -> Self {
        AdjacencyMatrix { graph, missing }
    }
}

impl fmt::Display for AdjacencyMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertex_count = self.graph.vertex_count();
        if vertex_count > MATRIX_DUMP_LIMIT {
            return writeln!(
                f,
                "Adjacency Matrix: skipped ({} vertices, limit {})",
                vertex_count, MATRIX_DUMP_LIMIT
            );
        }

        f.write_str("Adjacency Matrix:\n  ")?;
        for column in 0..vertex_count {
            write!(f, "   v{}", column)?;
        }
        writeln!(f)?;

        for (row, cells) in self.graph.adjacency_matrix().iter().enumerate() {
            write!(f, "v{}", row)?;
            for cell in cells {
                match cell {
                    Some(weight) => write!(f, "    {}", weight)?,
                    None => write!(f, "    {}", self.missing)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-vertex outbound edge lists in input order
pub struct EdgeTable<'a> {
    graph: &'a GraphStore,
}

impl<'a> EdgeTable<'a> {
    pub fn new(graph: &'a GraphStore) -> Self {
        EdgeTable { graph }
    }
}

impl fmt::Display for EdgeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edge Table:")?;
        for vertex in 0..self.graph.vertex_count() {
            write!(f, "{}:  ", vertex)?;
            for edge in self.graph.outbound_edges(vertex) {
                write!(f, "{}->{}   ", edge.from, edge.to)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the dense adjacency matrix with `missing` in empty cells.
///
/// Graphs above [`MATRIX_DUMP_LIMIT`] vertices get a one-line notice instead.
pub fn render_adjacency_matrix(graph: &GraphStore, missing: &str) -> String {
    if graph.vertex_count() > MATRIX_DUMP_LIMIT {
        tracing::warn!(
            vertices = graph.vertex_count(),
            limit = MATRIX_DUMP_LIMIT,
            "adjacency matrix too large to print"
        );
    }
    AdjacencyMatrix::new(graph, missing).to_string()
}

/// Render the per-vertex outbound edge lists in input order
pub fn render_edge_table(graph: &GraphStore) -> String {
    EdgeTable::new(graph).to_string()
}
