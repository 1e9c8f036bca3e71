//! Roster sync error types.

use thiserror::Error;

/// Failures while reading the distributor
#[derive(Debug, Error)]
pub enum RosterError {
    /// Connection refused, DNS failure, broken body
    #[error("Distributor request failed: {0}")]
    Transport(String),

    /// No answer within the configured timeout
    #[error("Distributor did not answer within {0} seconds")]
    Timeout(u64),

    /// Answered with a non-success status
    #[error("Distributor returned HTTP {0}")]
    Status(u16),

    /// Body was not `{"players": [..]}`
    #[error("Malformed distributor payload: {0}")]
    Payload(String),

    /// Client could not be constructed
    #[error("Invalid distributor client configuration: {0}")]
    Config(String),
}

/// Result type for roster sync
pub type RosterResult<T> = Result<T, RosterError>;
