//! CLI commands for hoproute

pub mod dispatch;
pub mod output;
pub mod prompt;
