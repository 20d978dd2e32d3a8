//! Graph representation and loading
//!
//! - `types`: vertex ids, costs and edges
//! - `store`: the immutable adjacency store and the provider trait the engine reads through
//! - `input`: edge-list file parsing
//! - `display`: adjacency matrix and edge table dumps

pub mod display;
pub mod input;
pub mod store;
pub mod types;

pub use display::{render_adjacency_matrix, render_edge_table};
pub use input::{load_graph, parse_edge_list, parse_source_vertex, ParsedGraph};
pub use store::{GraphProvider, GraphStore};
pub use types::{Cost, Edge, Vertex};
