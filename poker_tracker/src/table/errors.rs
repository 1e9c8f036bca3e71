//! Table error types.

use thiserror::Error;

/// Errors raised by table operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Card is neither `??` nor a rank/suit pair
    #[error("Invalid card format: {0:?}")]
    InvalidCardFormat(String),

    /// No player with that name is seated
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// Every slot of a reserved role already holds a card
    #[error("No empty slot left for {0}")]
    RoleSlotFull(String),

    /// Dealer entry missing from the table
    #[error("Dealer not found")]
    DealerNotFound,

    /// Distributor could not be reached or answered garbage
    #[error("Distributor unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl TrackerError {
    /// Message returned to HTTP clients.
    ///
    /// Upstream details (addresses, transport errors) stay in the server log.
    pub fn client_message(&self) -> String {
        match self {
            TrackerError::InvalidCardFormat(_) => {
                "Invalid card format, expected rank [2-9TJQKA] and suit [CDHS]".to_string()
            }
            TrackerError::PlayerNotFound(_) => "Player not found".to_string(),
            TrackerError::UpstreamUnavailable(_) => "Failed to fetch players".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for table operations
pub type TrackerResult<T> = Result<T, TrackerError>;
