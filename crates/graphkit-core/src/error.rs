//! Error types and exit codes for graphkit
//!
//! Two classes of failure live here:
//! - misuse of a data structure (duplicate insert, absent item, empty queue),
//!   which callers must never trigger on well-formed input
//! - configuration and I/O failures surfaced by the CLI
//!
//! An unreachable target or a disconnected graph is not an error: solvers
//! report those through `ShortestPath::Failure` and
//! `MinimumSpanningTree::Failure`.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/config error (invalid config, disconnected maze)

mod macros;

use thiserror::Error;

/// Exit codes for the graphkit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/config error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphkit operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Misuse of a data structure (exit code 1)
    #[error("{context}: item already present: {item}")]
    AlreadyPresent { context: String, item: String },

    #[error("{context}: item not found: {item}")]
    NotFound { context: String, item: String },

    #[error("{context} is empty")]
    Empty { context: String },

    #[error("priority must be a number, got NaN")]
    InvalidPriority,

    #[error("edge weight must be finite and nonnegative, got {weight}")]
    InvalidWeight { weight: f64 },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/config errors (exit code 3)
    #[error("maze graph is not connected, no minimum spanning tree exists")]
    MazeNotConnected,

    #[error("invalid config in {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for inserting an item that is already tracked
    pub fn already_present(context: &str, item: impl std::fmt::Debug) -> Self {
        GraphError::AlreadyPresent {
            context: context.to_string(),
            item: format!("{:?}", item),
        }
    }

    /// Create an error for operating on an item that is not tracked
    pub fn not_found(context: &str, item: impl std::fmt::Debug) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            item: format!("{:?}", item),
        }
    }

    /// Create an error for reading from an empty structure
    pub fn empty(context: &str) -> Self {
        GraphError::Empty {
            context: context.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a config file that failed to load
    pub fn invalid_config(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidConfig {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::MazeNotConnected | GraphError::InvalidConfig { .. } => ExitCode::Data,

            GraphError::AlreadyPresent { .. }
            | GraphError::NotFound { .. }
            | GraphError::Empty { .. }
            | GraphError::InvalidPriority
            | GraphError::InvalidWeight { .. }
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::AlreadyPresent { .. } => "already_present",
            GraphError::NotFound { .. } => "not_found",
            GraphError::Empty { .. } => "empty",
            GraphError::InvalidPriority => "invalid_priority",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::MazeNotConnected => "maze_not_connected",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
