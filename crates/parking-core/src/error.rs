//! Error types for the parking lot interpreter
//!
//! All fallible operations return `Result<T, Error>`.
//! Domain outcomes such as a full lot or an empty spot are not errors; they
//! are variants of the transition and query results.

use thiserror::Error;

/// Parking interpreter error types
#[derive(Debug, Error)]
pub enum Error {
    /// Input matched no grammar rule, or a keyword had a malformed argument
    #[error("Invalid command: {0:?}")]
    InvalidCommand(String),

    /// An open spot was requested from a lot with no space left
    #[error("No open spot in a lot of capacity {capacity}")]
    LotFull { capacity: u32 },

    /// Configuration could not be loaded or decoded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Line source or line sink failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_command(input: impl Into<String>) -> Self {
        Self::InvalidCommand(input.into())
    }

    pub fn config<E: std::fmt::Display>(e: E) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result type alias for parking operations
pub type Result<T> = std::result::Result<T, Error>;
