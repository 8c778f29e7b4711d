//! Error types shared across the workspace

use thiserror::Error;

/// Workspace-wide error type
///
/// Subsystem crates define their own `thiserror` enums and bridge into
/// this type at crate boundaries.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Memory error: {0}")]
    Memory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Workspace-wide result type
pub type Result<T> = std::result::Result<T, Error>;
