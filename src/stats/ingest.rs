use super::Profile;
use crate::Position;
use crate::cards;
use crate::gameplay::Action;
use crate::gameplay::Hand;
use crate::gameplay::Kind;
use crate::gameplay::Seat;
use std::ops::ControlFlow;

/// Per-hand marks that become at most one increment each once the
/// whole hand has been replayed.
#[derive(Debug, Default)]
struct Marks {
    vpip: bool,
    pfr: bool,
}

impl Profile {
    /// Fold one finished hand into these statistics, from the point of
    /// view of the seat at `position`.
    ///
    /// # Panics
    ///
    /// If `position` is not seated in `hand`, if `hand` has more
    /// streets than this game tracks, or if the seat reached showdown
    /// with neither hole cards nor a board to rank. All are caller bugs.
    pub fn ingest(&mut self, hand: &Hand, position: Position) {
        let seat = hand
            .seat(position)
            .unwrap_or_else(|| panic!("seat {} not dealt into hand", position));
        assert!(
            hand.streets().len() <= self.streetsseen.len(),
            "{} streets in a {} hand tracking {}",
            hand.streets().len(),
            self.game,
            self.streetsseen.len(),
        );
        assert!(
            !(seat.showdown() && cards::Hand::union(hand.board(), seat.cards()).size() == 0),
            "seat {} reached showdown without cards to rank",
            position,
        );
        self.hands += 1;
        self.pip += seat.pip();
        self.settle(hand, seat);
        let ref mut marks = Marks::default();
        self.replay(hand, position, marks);
        if marks.vpip {
            self.vpip += 1;
        }
        if marks.pfr {
            self.pfr += 1;
        }
    }

    /// pot results: winnings, rake share, showdown outcome by rank
    fn settle(&mut self, hand: &Hand, seat: &Seat) {
        if seat.showdown() {
            self.showdownsseen += 1;
            if seat.won() > 0 {
                self.handswonshow += 1;
            }
        }
        if seat.won() > 0 {
            self.handswon += 1;
            self.won += seat.won();
            if hand.rake() > 0 {
                match hand.winners() {
                    0 => log::warn!("rake {} collected with no winners", hand.rake()),
                    n => self.rake += hand.rake() / n as crate::Chips,
                }
            }
        }
        if seat.showdown() {
            let ranking = self.game.variant().rank(hand.board(), seat.cards());
            let r = ranking.category().index();
            match seat.won() > 0 {
                true => self.rankwon[r] += 1,
                false => self.ranklost[r] += 1,
            }
            self.rankam[r] += seat.won() - seat.pip();
            log::trace!("{} showed {} for {:+}", self.player, ranking, seat.won() - seat.pip());
        }
    }

    /// walk the streets in order until this seat folds
    fn replay(&mut self, hand: &Hand, position: Position, marks: &mut Marks) {
        for (street, actions) in hand.streets().iter().enumerate() {
            if self.street(street, actions, position, marks).is_break() {
                return;
            }
        }
    }

    /// one street's actions; breaks right after this seat's fold
    fn street(
        &mut self,
        street: usize,
        actions: &[Action],
        position: Position,
        marks: &mut Marks,
    ) -> ControlFlow<()> {
        self.streetsseen[street] += 1;
        let mut checked = false;
        let mut initiative = None;
        for action in actions.iter() {
            if action.seat() == position {
                let kind = action.kind();
                self.actions[kind.index()] += 1;
                if checked {
                    match kind {
                        Kind::Fold => self.checkfold += 1,
                        Kind::Call => self.checkcall += 1,
                        Kind::Raise => self.checkraise += 1,
                        _ => {}
                    }
                }
                if street == 0 && kind == Kind::Raise {
                    marks.pfr = true;
                }
                if kind == Kind::Check {
                    checked = true;
                }
                if kind != Kind::Post && action.amount() > 0 {
                    marks.vpip = true;
                }
                if kind == Kind::Fold {
                    return ControlFlow::Break(());
                }
            }
            if action.is_aggressive() {
                initiative = Some(action.seat());
            }
        }
        if initiative == Some(position) {
            self.streetinits[street] += 1;
        }
        ControlFlow::Continue(())
    }
}
