//! Shortest-path routing
//!
//! - `distance`: write-once distance table
//! - `frontier`: linear-scan candidate set with insertion-order tie-breaks
//! - `tree`: shortest-path tree with next-hop annotations on every ancestor
//! - `table`: first-hop lookups and the full routing table
//! - `engine`: the extract / finalize / expand loop tying them together

pub mod distance;
pub mod engine;
pub mod frontier;
pub mod table;
pub mod tree;

pub use distance::DistanceTable;
pub use engine::{compute_routes, ComputationStats, RouteComputation};
pub use frontier::{Frontier, FrontierEntry};
pub use table::{build_full_table, first_hop, RouteEntry, RoutingTable, DEFAULT_UNREACHABLE};
pub use tree::{NodeId, ShortestPathTree, TreeNode};
