//! Card codes and table slots.
//!
//! A card code is a rank followed by a suit, e.g. `AH` or `9C`. A slot that
//! has not been dealt yet holds the sentinel [`SENTINEL`].

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::TrackerError;

/// Placeholder value of an unassigned slot.
pub const SENTINEL: &str = "??";

/// Card rank, deuce through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    fn from_char(c: char) -> Option<Self> {
        let rank = match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn as_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// A validated two-character card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardCode {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardCode {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

impl FromStr for CardCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidCardFormat(s.to_string());

        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(rank).ok_or_else(invalid)?;
        let suit = Suit::from_char(suit).ok_or_else(invalid)?;
        Ok(CardCode { rank, suit })
    }
}

/// Raw card input after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    /// The `??` placeholder.
    Sentinel,
    Code(CardCode),
}

/// Validate raw card input.
///
/// Surrounding whitespace is trimmed first. The only accepted values are the
/// sentinel and an upper-case rank/suit pair; lower-case variants and the
/// empty string are rejected.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidCardFormat`] for anything else.
pub fn parse_card(raw: &str) -> Result<CardInput, TrackerError> {
    let trimmed = raw.trim();
    if trimmed == SENTINEL {
        return Ok(CardInput::Sentinel);
    }

    trimmed
        .parse::<CardCode>()
        .map(CardInput::Code)
        .map_err(|_| TrackerError::InvalidCardFormat(raw.to_string()))
}

/// A card slot as the tracker UI renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub value: String,
    pub hidden: bool,
}

impl Card {
    /// An undealt, face-down slot.
    pub fn sentinel() -> Self {
        Self {
            value: SENTINEL.to_string(),
            hidden: true,
        }
    }

    pub fn dealt(code: CardCode, hidden: bool) -> Self {
        Self {
            value: code.to_string(),
            hidden,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == SENTINEL
    }
}
