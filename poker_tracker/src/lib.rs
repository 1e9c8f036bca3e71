//! # Poker Tracker
//!
//! State behind a spectator-facing poker table tracker.
//!
//! The tracker mirrors one physical table: the dealer's two hole cards, the
//! five community cards and whatever cards each seated player has shown.
//! Player names come from an external distributor service; cards are entered
//! by an operator one at a time.
//!
//! ## Core Modules
//!
//! - [`table`]: card grammar, seats, reset log and the [`TableManager`]
//! - [`roster`]: distributor client and the [`RosterSource`] seam
//!
//! ## Example
//!
//! ```no_run
//! use poker_tracker::{
//!     roster::{DistributorClient, DistributorConfig, RosterPolicy},
//!     table::TableManager,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DistributorClient::new(DistributorConfig::default())?;
//!     let manager = TableManager::new(Arc::new(client), RosterPolicy::Degrade);
//!
//!     manager.sync_roster().await?;
//!     manager.assign_card("dealer", "AH").await?;
//!     let reset = manager.reset_game().await;
//!     println!("{} table(s) archived", reset.logs.len());
//!     Ok(())
//! }
//! ```

/// Distributor client and roster source trait.
pub mod roster;
pub use roster::{RosterPolicy, RosterSource};

/// Cards, seats, reset log and the lock-guarded manager.
pub mod table;
pub use table::{Card, Player, TableManager, TableSnapshot, TrackerError, TrackerResult};
