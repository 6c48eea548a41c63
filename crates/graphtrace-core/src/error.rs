//! Error types and exit codes for graphtrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, algorithm contract violations)
//! - 3: Data error (malformed graph input, unknown node ids)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphtrace operations
#[derive(Error, Debug)]
pub enum TraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, dijkstra, a-star, bellman-ford, floyd-warshall)")]
    UnknownAlgorithm(String),

    #[error("{algorithm} requires an end node")]
    MissingEndNode { algorithm: String },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("invalid adjacency matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl TraceError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id that does not exist in the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        TraceError::NodeNotFound { id: id.into() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        TraceError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraceError::UnknownFormat(_)
            | TraceError::UnknownAlgorithm(_)
            | TraceError::MissingEndNode { .. }
            | TraceError::UsageError(_)
            | TraceError::InvalidValue { .. } => ExitCode::Usage,

            TraceError::NodeNotFound { .. }
            | TraceError::InvalidMatrix { .. }
            | TraceError::InvalidGraph { .. } => ExitCode::Data,

            TraceError::Io(_)
            | TraceError::Json(_)
            | TraceError::Toml(_)
            | TraceError::FailedOperation { .. }
            | TraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TraceError::UnknownFormat(_) => "unknown_format",
            TraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            TraceError::MissingEndNode { .. } => "missing_end_node",
            TraceError::UsageError(_) => "usage_error",
            TraceError::InvalidValue { .. } => "invalid_value",
            TraceError::NodeNotFound { .. } => "node_not_found",
            TraceError::InvalidMatrix { .. } => "invalid_matrix",
            TraceError::InvalidGraph { .. } => "invalid_graph",
            TraceError::Io(_) => "io_error",
            TraceError::Json(_) => "json_error",
            TraceError::Toml(_) => "toml_error",
            TraceError::FailedOperation { .. } => "failed_operation",
            TraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for graphtrace operations
pub type Result<T> = std::result::Result<T, TraceError>;
