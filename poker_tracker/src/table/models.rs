//! Player and snapshot models.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Name of the dealer pseudo-player.
pub const DEALER_NAME: &str = "dealer";

/// Name of the pseudo-player holding the board.
pub const COMMUNITY_NAME: &str = "community";

/// Hole cards dealt to the dealer.
pub const DEALER_SLOTS: usize = 2;

/// Flop, turn and river.
pub const COMMUNITY_SLOTS: usize = 5;

/// Lookup key for a player name. Names are matched case-insensitively.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Seat role, derived from the player name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Dealer,
    Community,
    Player,
}

impl Role {
    pub fn of(name: &str) -> Self {
        match normalize_name(name).as_str() {
            DEALER_NAME => Role::Dealer,
            COMMUNITY_NAME => Role::Community,
            _ => Role::Player,
        }
    }

    /// Fixed slot count, `None` for regular players.
    pub fn capacity(self) -> Option<usize> {
        match self {
            Role::Dealer => Some(DEALER_SLOTS),
            Role::Community => Some(COMMUNITY_SLOTS),
            Role::Player => None,
        }
    }

    pub fn is_reserved(self) -> bool {
        self != Role::Player
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Dealer => write!(f, "dealer"),
            Role::Community => write!(f, "community"),
            Role::Player => write!(f, "player"),
        }
    }
}

/// A seat at the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub cards: Vec<Card>,
    pub revealed: bool,
}

impl Player {
    /// Regular player with no cards yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            revealed: false,
        }
    }

    /// Reserved player with every slot face down.
    pub fn reserved(name: &str, slots: usize) -> Self {
        Self {
            name: name.to_string(),
            cards: vec![Card::sentinel(); slots],
            revealed: false,
        }
    }

    pub fn dealer() -> Self {
        Self::reserved(DEALER_NAME, DEALER_SLOTS)
    }

    pub fn community() -> Self {
        Self::reserved(COMMUNITY_NAME, COMMUNITY_SLOTS)
    }

    pub fn role(&self) -> Role {
        Role::of(&self.name)
    }
}

/// Serialized table state; also the shape of every reset log entry.
///
/// `community_cards` repeats the community player's cards for clients that
/// read the board from a dedicated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub players: Vec<Player>,
    pub community_cards: Vec<Card>,
}

/// Entry appended to the reset log
pub type LogEntry = TableSnapshot;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_is_case_insensitive() {
        assert_eq!(Role::of("Dealer"), Role::Dealer);
        assert_eq!(Role::of(" COMMUNITY "), Role::Community);
        assert_eq!(Role::of("alice"), Role::Player);
    }

    #[test]
    fn test_reserved_players_start_face_down() {
        let dealer = Player::dealer();
        assert_eq!(dealer.cards.len(), DEALER_SLOTS);
        assert!(dealer.cards.iter().all(|c| c.is_sentinel() && c.hidden));
        assert!(!dealer.revealed);

        let community = Player::community();
        assert_eq!(community.cards.len(), COMMUNITY_SLOTS);
        assert_eq!(community.role().capacity(), Some(COMMUNITY_SLOTS));
    }

    #[test]
    fn test_regular_player_is_unbounded() {
        let player = Player::new("bob");
        assert!(player.cards.is_empty());
        assert_eq!(player.role().capacity(), None);
    }
}
