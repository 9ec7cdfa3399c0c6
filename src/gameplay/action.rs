use crate::Chips;
use crate::Position;
use colored::*;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// One entry in a street's action sequence, tagged with the seat that took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Post(Position, Chips),
    Fold(Position),
    Check(Position),
    Call(Position, Chips),
    Bet(Position, Chips),
    Raise(Position, Chips),
    Draw(Position, usize),
    StandPat(Position),
    Show(Position),
    Muck(Position),
}

impl Action {
    pub fn kind(&self) -> Kind {
        match self {
            Action::Post(..) => Kind::Post,
            Action::Fold(..) => Kind::Fold,
            Action::Check(..) => Kind::Check,
            Action::Call(..) => Kind::Call,
            Action::Bet(..) => Kind::Bet,
            Action::Raise(..) => Kind::Raise,
            Action::Draw(..) => Kind::Draw,
            Action::StandPat(..) => Kind::StandPat,
            Action::Show(..) => Kind::Show,
            Action::Muck(..) => Kind::Muck,
        }
    }
    pub fn seat(&self) -> Position {
        match *self {
            Action::Post(p, _)
            | Action::Fold(p)
            | Action::Check(p)
            | Action::Call(p, _)
            | Action::Bet(p, _)
            | Action::Raise(p, _)
            | Action::Draw(p, _)
            | Action::StandPat(p)
            | Action::Show(p)
            | Action::Muck(p) => p,
        }
    }
    /// chips this action moves into the pot
    pub fn amount(&self) -> Chips {
        match *self {
            Action::Post(_, n) | Action::Call(_, n) | Action::Bet(_, n) | Action::Raise(_, n) => n,
            _ => 0,
        }
    }
    /// bets and raises take the initiative on a street
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Bet(..) | Action::Raise(..))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Post(id, n) => write!(f, "{id} {}", format!("POST  {}", n).white()),
            Action::Fold(id) => write!(f, "{id} {}", "FOLD".red()),
            Action::Check(id) => write!(f, "{id} {}", "CHECK".cyan()),
            Action::Call(id, n) => write!(f, "{id} {}", format!("CALL  {}", n).yellow()),
            Action::Bet(id, n) => write!(f, "{id} {}", format!("BET   {}", n).green()),
            Action::Raise(id, n) => write!(f, "{id} {}", format!("RAISE {}", n).green()),
            Action::Draw(id, n) => write!(f, "{id} {}", format!("DRAW  {}", n).white()),
            Action::StandPat(id) => write!(f, "{id} {}", "STAND".white()),
            Action::Show(id) => write!(f, "{id} {}", "SHOW".magenta()),
            Action::Muck(id) => write!(f, "{id} {}", "MUCK".magenta()),
        }
    }
}

/// The kind of an Action, stripped of seat and amount.
///
/// Per-kind tallies are dense arrays of `Kind::COUNT` indexed by `Kind::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    Post = 0,
    Fold = 1,
    Check = 2,
    Call = 3,
    Bet = 4,
    Raise = 5,
    Draw = 6,
    StandPat = 7,
    Show = 8,
    Muck = 9,
}

impl Kind {
    pub const COUNT: usize = 10;
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Post,
            Self::Fold,
            Self::Check,
            Self::Call,
            Self::Bet,
            Self::Raise,
            Self::Draw,
            Self::StandPat,
            Self::Show,
            Self::Muck,
        ]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Bet => "bet",
            Self::Raise => "raise",
            Self::Draw => "draw",
            Self::StandPat => "stand pat",
            Self::Show => "show",
            Self::Muck => "muck",
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("invalid action kind: {}", s))
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_dense() {
        Kind::all()
            .iter()
            .enumerate()
            .for_each(|(i, k)| assert_eq!(k.index(), i));
    }

    #[test]
    fn amounts_only_for_wagers() {
        assert_eq!(Action::Post(0, 2).amount(), 2);
        assert_eq!(Action::Raise(1, 6).amount(), 6);
        assert_eq!(Action::Draw(1, 3).amount(), 0);
        assert_eq!(Action::Check(1).amount(), 0);
    }

    #[test]
    fn kind_names_round_trip() {
        Kind::all()
            .into_iter()
            .for_each(|k| assert_eq!(Kind::try_from(k.name()).unwrap(), k));
        assert!(Kind::try_from("limp").is_err());
    }
}
