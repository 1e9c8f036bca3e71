//! Table manager owning the shared table and reset log.

use super::{
    card::Card,
    errors::{TrackerError, TrackerResult},
    models::{COMMUNITY_NAME, LogEntry, Player, Role, TableSnapshot},
    state::TrackerState,
};
use crate::roster::{RosterPolicy, RosterSource};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Result of a successful card assignment
#[derive(Debug, Clone)]
pub struct CardAssignment {
    /// Name as seated, not as requested
    pub player: String,
    pub role: Role,
    pub card: Card,
    /// Table right after the assignment
    pub table: TableSnapshot,
}

/// Result of a roster pull
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSync {
    /// Merged roster, dealer and community first
    pub players: Vec<Player>,
    /// Distributor failed and the roster was served unchanged
    pub stale: bool,
}

/// Result of a game reset
#[derive(Debug, Clone)]
pub struct GameReset {
    /// Fresh table
    pub table: TableSnapshot,
    /// Every archived table, oldest first, including the one just archived
    pub logs: Vec<LogEntry>,
}

/// Owner of the tracker state.
///
/// Every mutation runs under a single write lock so read-modify-write
/// sequences never interleave. The distributor fetch runs before the lock
/// is taken.
pub struct TableManager {
    /// Table and reset log
    state: Arc<RwLock<TrackerState>>,

    /// Where player names come from
    roster: Arc<dyn RosterSource>,

    /// Behaviour on distributor failure
    policy: RosterPolicy,
}

impl TableManager {
    /// Create a manager with the canonical initial table and an empty log
    ///
    /// # Arguments
    ///
    /// * `roster` - Source of player names
    /// * `policy` - What `sync_roster` does when the source fails
    pub fn new(roster: Arc<dyn RosterSource>, policy: RosterPolicy) -> Self {
        Self {
            state: Arc::new(RwLock::new(TrackerState::default())),
            roster,
            policy,
        }
    }

    pub fn policy(&self) -> RosterPolicy {
        self.policy
    }

    /// Pull names from the distributor and merge them into the roster
    ///
    /// # Returns
    ///
    /// * `TrackerResult<RosterSync>` - Merged roster, dealer and community first
    ///
    /// # Errors
    ///
    /// `UpstreamUnavailable` if the fetch fails and the policy is
    /// [`RosterPolicy::Fail`]. Under [`RosterPolicy::Degrade`] the current
    /// roster is returned unchanged instead.
    pub async fn sync_roster(&self) -> TrackerResult<RosterSync> {
        let names = match self.roster.fetch_players().await {
            Ok(names) => names,
            Err(e) => {
                return match self.policy {
                    RosterPolicy::Degrade => {
                        log::warn!("Keeping current roster, distributor fetch failed: {}", e);
                        Ok(RosterSync {
                            players: self.active_players().await,
                            stale: true,
                        })
                    }
                    RosterPolicy::Fail => {
                        log::error!("Error fetching players from distributor: {}", e);
                        Err(TrackerError::UpstreamUnavailable(e.to_string()))
                    }
                };
            }
        };

        let mut state = self.state.write().await;
        let added = state.table.merge_roster(&names);
        if added > 0 {
            log::info!("Seated {} new player(s) from distributor", added);
        }
        Ok(RosterSync {
            players: state.table.players().to_vec(),
            stale: false,
        })
    }

    /// Current roster without contacting the distributor
    pub async fn active_players(&self) -> Vec<Player> {
        self.state.read().await.table.players().to_vec()
    }

    /// Deal a card to a player (case-insensitive name)
    ///
    /// # Errors
    ///
    /// `InvalidCardFormat`, `PlayerNotFound` or `RoleSlotFull`; the table is
    /// left untouched in every error case.
    pub async fn assign_card(
        &self,
        player_name: &str,
        raw_card: &str,
    ) -> TrackerResult<CardAssignment> {
        let mut state = self.state.write().await;
        let card = state.table.assign_card(player_name, raw_card)?;

        let player = state
            .table
            .player(player_name)
            .ok_or_else(|| TrackerError::PlayerNotFound(player_name.to_string()))?;
        let (player, role) = (player.name.clone(), player.role());
        log::info!("Assigned {} to {}", card.value, player);

        Ok(CardAssignment {
            player,
            role,
            card,
            table: state.table.snapshot(),
        })
    }

    /// Deal the next board card
    pub async fn assign_community_card(&self, raw_card: &str) -> TrackerResult<CardAssignment> {
        self.assign_card(COMMUNITY_NAME, raw_card).await
    }

    pub async fn community_cards(&self) -> Vec<Card> {
        self.state.read().await.table.community_cards().to_vec()
    }

    /// Clear the board without archiving the table
    pub async fn reset_community_cards(&self) -> Vec<Card> {
        let mut state = self.state.write().await;
        state.table.reset_community();
        log::info!("Community cards reset");
        state.table.community_cards().to_vec()
    }

    /// Show or hide the dealer's hand
    ///
    /// # Errors
    ///
    /// `DealerNotFound` if the dealer seat is missing.
    pub async fn reveal_dealer(&self, revealed: bool) -> TrackerResult<Player> {
        let mut state = self.state.write().await;
        let dealer = state.table.reveal_dealer(revealed)?.clone();
        log::info!("Dealer reveal status set to {}", revealed);
        Ok(dealer)
    }

    /// Archive the table to the reset log and start over
    pub async fn reset_game(&self) -> GameReset {
        let mut state = self.state.write().await;
        state.reset_game();
        log::info!("Game reset, {} table(s) archived", state.logs.len());

        GameReset {
            table: state.table.snapshot(),
            logs: state.logs.clone(),
        }
    }

    /// Current table with the board mirrored into `community_cards`
    pub async fn snapshot(&self) -> TableSnapshot {
        self.state.read().await.table.snapshot()
    }

    /// Every archived table, oldest first
    pub async fn logs(&self) -> Vec<LogEntry> {
        self.state.read().await.logs.clone()
    }

    /// Seated players, reserved seats included
    pub async fn player_count(&self) -> usize {
        self.state.read().await.table.players().len()
    }

    pub async fn reset_count(&self) -> usize {
        self.state.read().await.logs.len()
    }
}
