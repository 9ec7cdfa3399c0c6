use crate::Arbitrary;
use crate::Chips;
use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::cards::Ranking;
use serde::Deserialize;
use serde::Serialize;

/// The poker variant being played.
///
/// Fixes how many betting streets a hand can have and how the
/// board and hole cards combine at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    Holdem,
    Omaha,
    Stud,
    FiveCardDraw,
    TripleDraw,
}

impl Variant {
    pub const fn all() -> [Self; 5] {
        [
            Self::Holdem,
            Self::Omaha,
            Self::Stud,
            Self::FiveCardDraw,
            Self::TripleDraw,
        ]
    }
    /// maximum number of betting rounds in one hand
    pub const fn streets(&self) -> usize {
        match self {
            Self::Holdem => 4,
            Self::Omaha => 4,
            Self::Stud => 5,
            Self::FiveCardDraw => 2,
            Self::TripleDraw => 4,
        }
    }
    /// hole cards dealt to each seat
    pub const fn n_hole(&self) -> usize {
        match self {
            Self::Holdem => 2,
            Self::Omaha => 4,
            Self::Stud => 7,
            Self::FiveCardDraw => 5,
            Self::TripleDraw => 5,
        }
    }
    /// community cards visible once each street has been dealt
    pub const fn n_board(&self, streets: usize) -> usize {
        match self {
            Self::Holdem | Self::Omaha => match streets {
                0 | 1 => 0,
                2 => 3,
                3 => 4,
                _ => 5,
            },
            Self::Stud | Self::FiveCardDraw | Self::TripleDraw => 0,
        }
    }
    /// best made hand for these hole cards against this board
    pub fn rank(&self, board: Hand, hole: Hand) -> Ranking {
        match self {
            Self::Omaha => Self::omaha(board, hole),
            _ => Evaluator::from(Hand::union(board, hole)).ranking(),
        }
    }
    /// exactly two hole cards and three board cards
    fn omaha(board: Hand, hole: Hand) -> Ranking {
        let hole = Vec::from(hole);
        let board = Vec::from(board);
        let pairs = (0..hole.len())
            .flat_map(|i| (i + 1..hole.len()).map(move |j| (i, j)))
            .collect::<Vec<_>>();
        let trips = (0..board.len())
            .flat_map(|i| (i + 1..board.len()).map(move |j| (i, j)))
            .flat_map(|(i, j)| (j + 1..board.len()).map(move |k| (i, j, k)))
            .collect::<Vec<_>>();
        pairs
            .iter()
            .flat_map(|&(a, b)| trips.iter().map(move |&(x, y, z)| (a, b, x, y, z)))
            .map(|(a, b, x, y, z)| Hand::from(vec![hole[a], hole[b], board[x], board[y], board[z]]))
            .map(|cards| Evaluator::from(cards).ranking())
            .max()
            .unwrap_or_else(|| {
                let cards = hole.iter().chain(board.iter()).copied();
                Evaluator::from(cards.collect::<Hand>()).ranking()
            })
    }
}

impl TryFrom<&str> for Variant {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "holdem" | "hold'em" | "he" => Ok(Self::Holdem),
            "omaha" | "plo" | "oh" => Ok(Self::Omaha),
            "stud" | "7cs" => Ok(Self::Stud),
            "draw" | "5cd" => Ok(Self::FiveCardDraw),
            "triple draw" | "27td" => Ok(Self::TripleDraw),
            _ => Err(anyhow::anyhow!("invalid variant: {}", s)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Holdem => write!(f, "Hold'em"),
            Self::Omaha => write!(f, "Omaha"),
            Self::Stud => write!(f, "Stud"),
            Self::FiveCardDraw => write!(f, "Draw"),
            Self::TripleDraw => write!(f, "Triple Draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Limit {
    NoLimit,
    PotLimit,
    FixedLimit,
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoLimit => write!(f, "NL"),
            Self::PotLimit => write!(f, "PL"),
            Self::FixedLimit => write!(f, "FL"),
        }
    }
}

/// A game type: variant, betting structure and stakes.
///
/// Statistics are kept separately per game, so two tables at
/// different stakes are different games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Game {
    variant: Variant,
    limit: Limit,
    small: Chips,
    big: Chips,
}

impl Game {
    pub fn new(variant: Variant, limit: Limit, small: Chips, big: Chips) -> Self {
        Self {
            variant,
            limit,
            small,
            big,
        }
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn small(&self) -> Chips {
        self.small
    }
    pub fn big(&self) -> Chips {
        self.big
    }
    pub fn streets(&self) -> usize {
        self.variant.streets()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Variant::Holdem, Limit::NoLimit, 1, 2)
    }
}

impl Arbitrary for Game {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let variants = Variant::all();
        let variant = variants[rng.random_range(0..variants.len())];
        let limit = match variant {
            Variant::Holdem => Limit::NoLimit,
            Variant::Omaha => Limit::PotLimit,
            _ => Limit::FixedLimit,
        };
        Self::new(variant, limit, 1, 2)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}/{}", self.limit, self.variant, self.small, self.big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn holdem_uses_any_five() {
        let board = Hand::try_from("Ah Kh Qh Jh 2c").unwrap();
        let hole = Hand::try_from("Th 3d").unwrap();
        assert_eq!(
            Variant::Holdem.rank(board, hole),
            Ranking::StraightFlush(Rank::Ace)
        );
    }

    #[test]
    fn omaha_needs_two_hole_cards() {
        let board = Hand::try_from("Ah Kh Qh 7c 2c").unwrap();
        let hole = Hand::try_from("Jh 3s 4s 5d").unwrap();
        assert_eq!(Variant::Holdem.rank(board, hole), Ranking::Straight(Rank::Five));
        assert_eq!(Variant::Omaha.rank(board, hole), Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn omaha_cannot_play_the_board() {
        let board = Hand::try_from("As Ks Qs Js Ts").unwrap();
        let hole = Hand::try_from("2c 2d 7h 8h").unwrap();
        assert_eq!(Variant::Omaha.rank(board, hole), Ranking::OnePair(Rank::Two));
    }

    #[test]
    fn street_counts() {
        assert_eq!(Game::default().streets(), 4);
        assert_eq!(Variant::Stud.streets(), 5);
        assert_eq!(Variant::FiveCardDraw.streets(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Game::default().to_string(), "NL Hold'em 1/2");
    }
}
