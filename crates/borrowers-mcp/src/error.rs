//! Error types for the borrowers MCP server
//!
//! Wraps data provider errors and adds protocol-level variants.

use borrowers::error::DataError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    DataUnavailable(#[from] DataError),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Stdio error: {0}")]
    Stdio(#[from] std::io::Error),
}

/// Result type alias for the MCP server
pub type Result<T> = std::result::Result<T, AppError>;
