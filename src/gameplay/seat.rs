use crate::Chips;
use crate::Position;
use crate::cards::Hand;
use serde::Deserialize;
use serde::Serialize;

/// A player identity, as named by the hand history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Player(String);

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Player {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's participation in one finished hand.
///
/// # Fields
///
/// - `position`: seat index, matched against each Action's seat
/// - `player`  : who sat here
/// - `pip`     : total chips put in the pot this hand
/// - `won`     : total chips collected from the pot this hand
/// - `showdown`: whether the seat reached a showdown
/// - `cards`   : final hole cards, meaningful only at showdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    position: Position,
    player: Player,
    pip: Chips,
    won: Chips,
    showdown: bool,
    cards: Hand,
}

impl Seat {
    pub fn new(position: Position, player: Player, pip: Chips, won: Chips) -> Self {
        Self {
            position,
            player,
            pip,
            won,
            showdown: false,
            cards: Hand::empty(),
        }
    }
    /// Reveals final hole cards at showdown.
    pub fn show(mut self, cards: Hand) -> Self {
        self.showdown = true;
        self.cards = cards;
        self
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn pip(&self) -> Chips {
        self.pip
    }
    pub fn won(&self) -> Chips {
        self.won
    }
    pub fn showdown(&self) -> bool {
        self.showdown
    }
    pub fn cards(&self) -> Hand {
        self.cards
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:<12} {} {}",
            self.position,
            self.player,
            format!("{:+}", self.won - self.pip),
            self.cards
        )
    }
}
