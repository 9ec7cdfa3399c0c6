use super::*;
use crate::Arbitrary;
use crate::Chips;
use crate::Position;
use crate::cards;
use crate::cards::Card;

/// A finished, already-parsed hand.
///
/// Holds everything the statistics need: the game it was played in,
/// the rake, the final board, every seat's result, and the action
/// sequence of each street that was played, in order.
#[derive(Debug, Clone)]
pub struct Hand {
    game: Game,
    rake: Chips,
    board: cards::Hand,
    seats: Vec<Seat>,
    streets: Vec<Vec<Action>>,
}

impl Hand {
    pub fn new(
        game: Game,
        rake: Chips,
        board: cards::Hand,
        seats: Vec<Seat>,
        streets: Vec<Vec<Action>>,
    ) -> Self {
        Self {
            game,
            rake,
            board,
            seats,
            streets,
        }
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn rake(&self) -> Chips {
        self.rake
    }
    pub fn board(&self) -> cards::Hand {
        self.board
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn streets(&self) -> &[Vec<Action>] {
        &self.streets
    }
    pub fn seat(&self, position: Position) -> Option<&Seat> {
        self.seats.iter().find(|s| s.position() == position)
    }
    /// seats that collected a positive amount
    pub fn winners(&self) -> usize {
        self.seats.iter().filter(|s| s.won() > 0).count()
    }
    pub fn pot(&self) -> Chips {
        self.seats.iter().map(|s| s.pip()).sum()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} pot {} rake {} board {}", self.game, self.pot(), self.rake, self.board)?;
        for seat in self.seats.iter() {
            writeln!(f, "  {}", seat)?;
        }
        for (street, actions) in self.streets.iter().enumerate() {
            writeln!(f, "  street {}", street)?;
            for action in actions.iter() {
                writeln!(f, "    {}", action)?;
            }
        }
        Ok(())
    }
}

const NAMES: [&str; 9] = [
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi", "ivan",
];
/// betting passes per street before remaining seats may only call or fold
const ORBITS: usize = 3;

/// A random, internally consistent hand: blinds posted, betting
/// that closes every street, and a pot paid to the best showdown
/// ranking (or to the last seat standing).
impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let game = Game::random();
        let variant = game.variant();
        let n = rng.random_range(2..=6usize);
        let mut names = NAMES.to_vec();
        names.shuffle(rng);
        let mut deck = (0..52u8).map(Card::from).collect::<Vec<Card>>();
        deck.shuffle(rng);
        let mut deck = deck.into_iter();
        let holes = (0..n)
            .map(|_| deck.by_ref().take(variant.n_hole()).collect::<cards::Hand>())
            .collect::<Vec<_>>();
        let runout = deck
            .take(variant.n_board(variant.streets()))
            .collect::<Vec<Card>>();

        let mut pips = vec![0 as Chips; n];
        let mut alive = vec![true; n];
        let mut streets = Vec::new();
        for street in 0..variant.streets() {
            if alive.iter().filter(|a| **a).count() < 2 {
                break;
            }
            let mut stake = vec![0 as Chips; n];
            let mut high = 0 as Chips;
            let mut actions = Vec::new();
            if street == 0 {
                for (i, blind) in [(0, game.small()), (1, game.big())] {
                    stake[i] = blind;
                    pips[i] += blind;
                    actions.push(Action::Post(i, blind));
                }
                high = game.big();
            }
            for orbit in 0..ORBITS {
                let last = orbit + 1 == ORBITS;
                for i in 0..n {
                    if !alive[i] {
                        continue;
                    }
                    if alive.iter().filter(|a| **a).count() < 2 {
                        break;
                    }
                    let owe = high - stake[i];
                    if orbit > 0 && owe == 0 {
                        continue;
                    }
                    let action = match (owe > 0, rng.random_range(0..10)) {
                        (true, 0..=2) => Action::Fold(i),
                        (true, 3..=7) => Action::Call(i, owe),
                        (true, _) if last => Action::Call(i, owe),
                        (true, _) => Action::Raise(i, owe + game.big() * 2),
                        (false, 0..=5) => Action::Check(i),
                        (false, _) => Action::Bet(i, game.big() * 2),
                    };
                    match action {
                        Action::Fold(_) => alive[i] = false,
                        _ => {
                            stake[i] += action.amount();
                            pips[i] += action.amount();
                            high = high.max(stake[i]);
                        }
                    }
                    actions.push(action);
                }
                if (0..n).filter(|i| alive[*i]).all(|i| stake[i] == high) {
                    break;
                }
            }
            streets.push(actions);
        }

        let board = runout
            .into_iter()
            .take(variant.n_board(streets.len()))
            .collect::<cards::Hand>();
        let standing = (0..n).filter(|i| alive[*i]).collect::<Vec<Position>>();
        let showdown = standing.len() > 1;
        let winners = match showdown {
            false => standing.clone(),
            true => {
                let rankings = standing
                    .iter()
                    .map(|i| (*i, variant.rank(board, holes[*i])))
                    .collect::<Vec<_>>();
                let best = rankings.iter().map(|(_, r)| *r).max();
                rankings
                    .into_iter()
                    .filter(|(_, r)| Some(*r) == best)
                    .map(|(i, _)| i)
                    .collect()
            }
        };
        let pot = pips.iter().sum::<Chips>();
        let rake = if rng.random_bool(0.5) { pot / 20 } else { 0 };
        let share = (pot - rake) / winners.len() as Chips;
        let extra = (pot - rake) % winners.len() as Chips;
        let mut won = vec![0 as Chips; n];
        for (k, i) in winners.iter().enumerate() {
            won[*i] = share + if k == 0 { extra } else { 0 };
        }
        let seats = (0..n)
            .map(|i| Seat::new(i, Player::from(names[i]), pips[i], won[i]))
            .zip(holes)
            .enumerate()
            .map(|(i, (seat, hole))| match showdown && alive[i] {
                true => seat.show(hole),
                false => seat,
            })
            .collect();
        Self::new(game, rake, board, seats, streets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hands_are_balanced() {
        for _ in 0..256 {
            let hand = Hand::random();
            let paid = hand.seats().iter().map(|s| s.won()).sum::<Chips>();
            assert_eq!(paid + hand.rake(), hand.pot());
            assert!(hand.winners() >= 1);
            assert!(hand.streets().len() <= hand.game().streets());
        }
    }

    #[test]
    fn random_hands_stop_after_folds() {
        for _ in 0..256 {
            let hand = Hand::random();
            for seat in hand.seats() {
                let folds = hand
                    .streets()
                    .iter()
                    .flatten()
                    .filter(|a| a.seat() == seat.position())
                    .filter(|a| a.kind() == Kind::Fold)
                    .count();
                assert!(folds <= 1);
                assert!(!(folds == 1 && seat.showdown()));
            }
        }
    }

    #[test]
    fn display_lists_every_street() {
        let hand = Hand::new(
            Game::default(),
            0,
            cards::Hand::empty(),
            vec![
                Seat::new(0, Player::from("a"), 1, 3),
                Seat::new(1, Player::from("b"), 2, 0),
            ],
            vec![
                vec![Action::Post(0, 1), Action::Post(1, 2), Action::Call(0, 1)],
                vec![Action::Bet(0, 2), Action::Fold(1)],
            ],
        );
        let text = hand.to_string();
        assert!(text.starts_with("NL Hold'em 1/2 pot 3 rake 0"));
        assert!(text.contains("street 0"));
        assert!(text.contains("street 1"));
        assert!(text.contains("POST  2"));
        assert!(text.contains("CALL  1"));
        assert!(text.contains("BET   2"));
        assert!(text.contains("FOLD"));
        assert!(!text.contains("street 2"));
    }

    #[test]
    fn seat_lookup() {
        let hand = Hand::new(
            Game::default(),
            0,
            cards::Hand::empty(),
            vec![Seat::new(3, Player::from("a"), 2, 0)],
            vec![vec![Action::Post(3, 2)]],
        );
        assert!(hand.seat(3).is_some());
        assert!(hand.seat(0).is_none());
        assert_eq!(hand.pot(), 2);
    }
}
