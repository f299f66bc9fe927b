//! Error types for the solver crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced while configuring or running the solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A navigation plan named a cell or index the environment rejects.
    #[error("Navigation error: {0}")]
    Navigation(#[from] tessera_core::TesseraError),

    /// The configuration failed validation or could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;
