//! Error types and exit codes for hoproute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage error (no data file, bad flags/args)
//! - 2: Input error (unreadable or malformed data file, bad source vertex)
//! - 3: Internal invariant violation inside the routing engine

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::types::Vertex;

/// Exit codes reported by the hoproute binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Usage error - missing data file, bad flags/args (1)
    Usage = 1,
    /// Input error - malformed edge list, out-of-range ids (2)
    Input = 2,
    /// Internal engine fault (3)
    Internal = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Broken engine invariants.
///
/// None of these can be caused by input data that passed validation; each
/// one means the engine itself is wrong and the run must not produce a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("frontier entry {from}->{to} has an unfinalized source vertex")]
    UnfinalizedSource { from: Vertex, to: Vertex },

    #[error("no tree node recorded for finalized vertex {vertex}")]
    MissingTreeNode { vertex: Vertex },

    #[error("vertex {vertex} was finalized twice")]
    AlreadyFinalized { vertex: Vertex },

    #[error("vertex {vertex} is outside the graph")]
    UnknownVertex { vertex: Vertex },
}

/// Errors that can occur during hoproute operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 1)
    #[error("{0}")]
    UsageError(String),

    // Input errors (exit code 2)
    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed edge list: {reason}")]
    MalformedInput { reason: String },

    #[error("edge {from}->{to} references a vertex outside [0, {vertex_count})")]
    VertexOutOfRange {
        from: Vertex,
        to: Vertex,
        vertex_count: usize,
    },

    #[error("edge {from}->{to} has negative weight {weight}")]
    NegativeWeight { from: Vertex, to: Vertex, weight: f64 },

    #[error("edge {from}->{to} has non-finite weight {weight}")]
    InvalidWeight { from: Vertex, to: Vertex, weight: f64 },

    #[error("invalid source vertex {value:?} (expected an integer in [0, {vertex_count}))")]
    InvalidSource { value: String, vertex_count: usize },

    #[error("invalid config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Engine faults (exit code 3)
    #[error("internal error: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl RouteError {
    /// Create an error for an edge list that does not match its header
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        RouteError::MalformedInput {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a source vertex reply that cannot be used
    pub fn invalid_source(value: impl std::fmt::Display, vertex_count: usize) -> Self {
        RouteError::InvalidSource {
            value: value.to_string(),
            vertex_count,
        }
    }

    /// Create an error for a failed read of `path`
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RouteError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from a broken engine invariant rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, RouteError::Invariant(_))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UsageError(_) | RouteError::Config { .. } | RouteError::Toml(_) => {
                ExitCode::Usage
            }

            RouteError::ReadFile { .. }
            | RouteError::Io(_)
            | RouteError::MalformedInput { .. }
            | RouteError::VertexOutOfRange { .. }
            | RouteError::NegativeWeight { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::InvalidSource { .. }
            | RouteError::Json(_) => ExitCode::Input,

            RouteError::Invariant(_) => ExitCode::Internal,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UsageError(_) => "usage_error",
            RouteError::ReadFile { .. } => "read_error",
            RouteError::Io(_) => "io_error",
            RouteError::MalformedInput { .. } => "malformed_input",
            RouteError::VertexOutOfRange { .. } => "vertex_out_of_range",
            RouteError::NegativeWeight { .. } => "negative_weight",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::InvalidSource { .. } => "invalid_source",
            RouteError::Config { .. } => "config_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Invariant(_) => "internal_invariant",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hoproute operations
pub type Result<T> = std::result::Result<T, RouteError>;
