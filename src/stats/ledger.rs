use super::Profile;
use crate::Position;
use crate::gameplay::Game;
use crate::gameplay::Hand;
use crate::gameplay::Player;
use std::collections::HashMap;

type Key = (Player, Game);

/// Every Profile observed so far, one per (player, game).
///
/// Profiles never share state, so a batch of hands can be split by
/// profile and each profile's queue replayed independently, in hand
/// order, on its own worker.
#[derive(Debug, Default)]
pub struct Ledger {
    profiles: HashMap<Key, Profile>,
}

impl Ledger {
    /// Ingest one hand for every seat in it.
    pub fn add(&mut self, hand: &Hand) {
        log::trace!("{}", hand);
        for seat in hand.seats() {
            self.entry(seat.player().clone(), *hand.game())
                .ingest(hand, seat.position());
        }
    }

    /// Ingest a batch of hands, sharded by profile.
    pub fn absorb(&mut self, hands: &[Hand]) {
        let mut queues = HashMap::<Key, Vec<(&Hand, Position)>>::new();
        for hand in hands {
            log::trace!("{}", hand);
            for seat in hand.seats() {
                queues
                    .entry((seat.player().clone(), *hand.game()))
                    .or_default()
                    .push((hand, seat.position()));
            }
        }
        for (player, game) in queues.keys() {
            self.entry(player.clone(), *game);
        }
        log::debug!(
            "absorbing {} hands into {} of {} profiles",
            hands.len(),
            queues.len(),
            self.profiles.len()
        );
        #[cfg(feature = "server")]
        {
            use rayon::prelude::*;
            self.profiles
                .par_iter_mut()
                .filter_map(|(key, profile)| queues.get(key).map(|queue| (profile, queue)))
                .for_each(|(profile, queue)| Self::replay(profile, queue));
        }
        #[cfg(not(feature = "server"))]
        {
            self.profiles
                .iter_mut()
                .filter_map(|(key, profile)| queues.get(key).map(|queue| (profile, queue)))
                .for_each(|(profile, queue)| Self::replay(profile, queue));
        }
    }

    pub fn get(&self, player: &Player, game: &Game) -> Option<&Profile> {
        self.profiles.get(&(player.clone(), *game))
    }
    /// all profiles, ordered by player then game
    pub fn profiles(&self) -> Vec<&Profile> {
        let mut profiles = self.profiles.values().collect::<Vec<_>>();
        profiles.sort_by(|a, b| (a.player(), a.game()).cmp(&(b.player(), b.game())));
        profiles
    }
    /// one player's profiles across every game they played
    pub fn games<'a>(&'a self, player: &'a Player) -> impl Iterator<Item = &'a Profile> + 'a {
        self.profiles
            .iter()
            .filter(move |((p, _), _)| p == player)
            .map(|(_, profile)| profile)
    }
    pub fn len(&self) -> usize {
        self.profiles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn entry(&mut self, player: Player, game: Game) -> &mut Profile {
        self.profiles
            .entry((player.clone(), game))
            .or_insert_with(|| Profile::new(player, game))
    }
    fn replay(profile: &mut Profile, queue: &[(&Hand, Position)]) {
        for (hand, position) in queue {
            profile.ingest(hand, *position);
        }
    }
}
