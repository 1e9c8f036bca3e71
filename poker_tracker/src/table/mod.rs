//! Table module: card grammar, seats and the reset log.
//!
//! This module implements:
//! - Card validation (`[2-9TJQKA][CDHS]` or the `??` sentinel)
//! - Dealer and community pseudo-players with fixed slot counts
//! - Case-insensitive roster merging that never drops a player
//! - An append-only log of archived tables
//! - [`TableManager`], the lock-guarded owner of all of the above
//!
//! ## Example
//!
//! ```
//! use poker_tracker::table::PokerTable;
//!
//! let mut table = PokerTable::new();
//! table.assign_card("dealer", "AH").unwrap();
//! table.assign_card("dealer", "KC").unwrap();
//! assert!(table.assign_card("dealer", "2S").is_err());
//! ```

pub mod card;
pub mod errors;
pub mod manager;
pub mod models;
pub mod state;

pub use card::{Card, CardCode, CardInput, Rank, SENTINEL, Suit, parse_card};
pub use errors::{TrackerError, TrackerResult};
pub use manager::{CardAssignment, GameReset, RosterSync, TableManager};
pub use models::{
    COMMUNITY_NAME, COMMUNITY_SLOTS, DEALER_NAME, DEALER_SLOTS, LogEntry, Player, Role,
    TableSnapshot, normalize_name,
};
pub use state::{PokerTable, TrackerState};
