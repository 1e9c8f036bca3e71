//! In-memory table state.
//!
//! [`PokerTable`] is plain data with synchronous operations; locking lives in
//! [`TableManager`](super::TableManager).

use std::collections::HashMap;

use super::{
    card::{Card, CardInput, parse_card},
    errors::{TrackerError, TrackerResult},
    models::{
        COMMUNITY_NAME, DEALER_NAME, LogEntry, Player, Role, TableSnapshot, normalize_name,
    },
};

/// Seats in display order plus a name index.
///
/// Invariant: `players[0]` is the dealer, `players[1]` is the community
/// player, and `index` maps every normalized name to its position.
#[derive(Debug, Clone)]
pub struct PokerTable {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl Default for PokerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PokerTable {
    /// Canonical initial table: dealer and community, every slot face down.
    pub fn new() -> Self {
        let mut table = Self {
            players: Vec::new(),
            index: HashMap::new(),
        };
        table.seat(Player::dealer());
        table.seat(Player::community());
        table
    }

    fn seat(&mut self, player: Player) {
        self.index
            .insert(normalize_name(&player.name), self.players.len());
        self.players.push(player);
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (normalize_name(&p.name), i))
            .collect();
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.index
            .get(&normalize_name(name))
            .map(|&i| &self.players[i])
    }

    fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        let i = *self.index.get(&normalize_name(name))?;
        Some(&mut self.players[i])
    }

    pub fn dealer(&self) -> Option<&Player> {
        self.player(DEALER_NAME)
    }

    /// Board cards, taken from the community player.
    pub fn community_cards(&self) -> &[Card] {
        self.player(COMMUNITY_NAME)
            .map(|p| p.cards.as_slice())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            players: self.players.clone(),
            community_cards: self.community_cards().to_vec(),
        }
    }

    /// Merge a freshly pulled roster into the table.
    ///
    /// Known names keep their cards, unknown names are appended with an
    /// empty hand, and nobody is dropped. Blank names, repeats and reserved
    /// names are skipped. Returns how many players were added.
    pub fn merge_roster<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let mut added = 0;
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || Role::of(name).is_reserved() {
                continue;
            }
            if self.index.contains_key(&normalize_name(name)) {
                continue;
            }
            self.seat(Player::new(name));
            added += 1;
        }

        if added > 0 {
            self.enforce_order();
        }
        added
    }

    /// Dealer first, community second, everyone else in their current order.
    fn enforce_order(&mut self) {
        let (mut reserved, regular): (Vec<Player>, Vec<Player>) = std::mem::take(&mut self.players)
            .into_iter()
            .partition(|p| p.role().is_reserved());
        reserved.sort_by_key(|p| p.role() != Role::Dealer);
        self.players = reserved;
        self.players.extend(regular);
        self.rebuild_index();
    }

    /// Deal a card to a player.
    ///
    /// Dealer and community fill their first face-down sentinel slot; the
    /// dealer's card is hidden unless the hand is revealed, board cards are
    /// always visible. Regular players get a visible card appended.
    ///
    /// # Errors
    ///
    /// - `InvalidCardFormat` for anything but a rank/suit code
    /// - `PlayerNotFound` if nobody is seated under that name
    /// - `RoleSlotFull` if a reserved player has no sentinel slot left
    pub fn assign_card(&mut self, player_name: &str, raw_card: &str) -> TrackerResult<Card> {
        let code = match parse_card(raw_card)? {
            CardInput::Code(code) => code,
            CardInput::Sentinel => {
                return Err(TrackerError::InvalidCardFormat(raw_card.to_string()));
            }
        };

        let player = self
            .player_mut(player_name)
            .ok_or_else(|| TrackerError::PlayerNotFound(player_name.to_string()))?;

        let card = match player.role() {
            Role::Dealer => Card::dealt(code, !player.revealed),
            Role::Community => Card::dealt(code, false),
            Role::Player => {
                let card = Card::dealt(code, false);
                player.cards.push(card.clone());
                return Ok(card);
            }
        };

        let slot = player
            .cards
            .iter_mut()
            .find(|c| c.is_sentinel())
            .ok_or_else(|| TrackerError::RoleSlotFull(player.name.clone()))?;
        *slot = card.clone();
        Ok(card)
    }

    /// Show or hide the dealer's hand. Every dealer slot follows the flag.
    pub fn reveal_dealer(&mut self, revealed: bool) -> TrackerResult<&Player> {
        let dealer = self
            .player_mut(DEALER_NAME)
            .ok_or(TrackerError::DealerNotFound)?;
        dealer.revealed = revealed;
        for card in &mut dealer.cards {
            card.hidden = !revealed;
        }
        Ok(&*dealer)
    }

    /// Put the board back to five face-down sentinels.
    pub fn reset_community(&mut self) {
        match self.player_mut(COMMUNITY_NAME) {
            Some(community) => *community = Player::community(),
            None => {
                self.seat(Player::community());
                self.enforce_order();
            }
        }
    }
}

/// Table plus the reset log, guarded together by one lock.
#[derive(Debug, Default)]
pub struct TrackerState {
    pub table: PokerTable,
    pub logs: Vec<LogEntry>,
}

impl TrackerState {
    /// Archive the current table and start a fresh one.
    pub fn reset_game(&mut self) {
        let previous = std::mem::take(&mut self.table);
        self.logs.push(previous.snapshot());
    }
}
