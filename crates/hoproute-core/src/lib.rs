//! Hoproute Core Library
//!
//! Shortest-path trees and first-hop routing tables over weighted directed
//! graphs, plus the edge-list loading, configuration and logging used by the
//! `hoproute` binary.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod routing;
