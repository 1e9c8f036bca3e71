//! Roster sync with the distributor.
//!
//! The distributor owns the list of seated player names. The tracker only
//! reads it, through the [`RosterSource`] trait, so tests and alternative
//! deployments can swap the HTTP client for something else.
//!
//! ## Example
//!
//! ```no_run
//! use poker_tracker::roster::{DistributorClient, DistributorConfig, RosterSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DistributorClient::new(DistributorConfig::default())?;
//!     let names = client.fetch_players().await?;
//!     println!("{} players seated", names.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod errors;

use async_trait::async_trait;

pub use client::{DistributorClient, DistributorConfig, RosterPayload};
pub use errors::{RosterError, RosterResult};

/// Read-only source of player names
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetch the current player names, in seat order
    async fn fetch_players(&self) -> RosterResult<Vec<String>>;
}

/// What to do when the distributor cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterPolicy {
    /// Keep the roster already known and log a warning
    #[default]
    Degrade,
    /// Report the failure to the caller
    Fail,
}

impl std::str::FromStr for RosterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrade" => Ok(RosterPolicy::Degrade),
            "fail" => Ok(RosterPolicy::Fail),
            other => Err(format!("unknown roster policy {other:?}, expected degrade or fail")),
        }
    }
}

impl std::fmt::Display for RosterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterPolicy::Degrade => write!(f, "degrade"),
            RosterPolicy::Fail => write!(f, "fail"),
        }
    }
}
