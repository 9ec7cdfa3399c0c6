use crate::Chips;
use crate::Count;
use crate::cards::Category;
use crate::gameplay::Game;
use crate::gameplay::Kind;
use crate::gameplay::Player;
use serde::Serialize;

/// Running statistics for one player in one game.
///
/// Every field is a raw counter. Nothing but [`Profile::ingest`] mutates
/// them, and every derived percentage or ratio is recomputed from them
/// on demand. The per-street tables are sized once from the game's
/// street count and never resized.
///
/// # Fields
///
/// - `hands`, `handswon`: hands observed, hands where anything was won
/// - `won`, `pip`, `rake`: chips collected, chips put in, rake share paid
/// - `rankwon`, `ranklost`, `rankam`: showdown outcomes by rank category
/// - `streetinits`, `streetsseen`: per-street initiative and visibility
/// - `actions`: every action taken, by kind
/// - `vpip`, `pfr`: hands with voluntary money in, hands with a preflop raise
/// - `showdownsseen`, `handswonshow`: showdowns reached and won
/// - `checkfold`, `checkcall`, `checkraise`: what followed a check on the same street
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub(super) player: Player,
    pub(super) game: Game,

    pub(super) hands: Count,
    pub(super) handswon: Count,
    pub(super) won: Chips,
    pub(super) pip: Chips,
    pub(super) rake: Chips,

    pub(super) rankwon: [Count; Category::COUNT],
    pub(super) ranklost: [Count; Category::COUNT],
    pub(super) rankam: [Chips; Category::COUNT],

    pub(super) streetinits: Vec<Count>,
    pub(super) streetsseen: Vec<Count>,

    pub(super) actions: [Count; Kind::COUNT],

    pub(super) vpip: Count,
    pub(super) pfr: Count,
    pub(super) showdownsseen: Count,
    pub(super) handswonshow: Count,
    pub(super) checkfold: Count,
    pub(super) checkcall: Count,
    pub(super) checkraise: Count,
}

impl Profile {
    pub fn new(player: Player, game: Game) -> Self {
        let streets = game.streets();
        Self {
            player,
            game,
            hands: 0,
            handswon: 0,
            won: 0,
            pip: 0,
            rake: 0,
            rankwon: [0; Category::COUNT],
            ranklost: [0; Category::COUNT],
            rankam: [0; Category::COUNT],
            streetinits: vec![0; streets],
            streetsseen: vec![0; streets],
            actions: [0; Kind::COUNT],
            vpip: 0,
            pfr: 0,
            showdownsseen: 0,
            handswonshow: 0,
            checkfold: 0,
            checkcall: 0,
            checkraise: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn hands(&self) -> Count {
        self.hands
    }
    pub fn handswon(&self) -> Count {
        self.handswon
    }
    /// total chips collected, before subtracting anything put in
    pub fn won(&self) -> Chips {
        self.won
    }
    /// total chips put in the pot
    pub fn pip(&self) -> Chips {
        self.pip
    }
    /// this player's share of rake from pots they won
    pub fn rake(&self) -> Chips {
        self.rake
    }
    pub fn rankwon(&self, category: Category) -> Count {
        self.rankwon[category.index()]
    }
    pub fn ranklost(&self, category: Category) -> Count {
        self.ranklost[category.index()]
    }
    /// net chips won at showdown holding this category
    pub fn rankam(&self, category: Category) -> Chips {
        self.rankam[category.index()]
    }
    pub fn streetinits(&self) -> &[Count] {
        &self.streetinits
    }
    pub fn streetsseen(&self) -> &[Count] {
        &self.streetsseen
    }
    pub fn actions(&self, kind: Kind) -> Count {
        self.actions[kind.index()]
    }
    pub fn vpips(&self) -> Count {
        self.vpip
    }
    pub fn pfrs(&self) -> Count {
        self.pfr
    }
    pub fn showdownsseen(&self) -> Count {
        self.showdownsseen
    }
    pub fn handswonshow(&self) -> Count {
        self.handswonshow
    }
    pub fn checkfold(&self) -> Count {
        self.checkfold
    }
    pub fn checkcall(&self) -> Count {
        self.checkcall
    }
    pub fn checkraise(&self) -> Count {
        self.checkraise
    }

    /// Pretty JSON snapshot of every raw counter.
    pub fn json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
