use std::path::PathBuf;

use thiserror::Error;

/// Failure raised by the counting and ranking core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GramError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// User-facing configuration errors, reported before any counting starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("at least one n-gram order > 0 must be given")]
    NoValidOrders,

    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(i64),
}
