use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for the best Ranking in a set of cards.
///
/// Using the 52-bit Hand representation, we search from the strongest
/// category down with bitwise operations and stop at the first hit.
/// Any number of cards works; fewer than five simply cannot make
/// straights or flushes.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| Rank::hi(self.0.of(suit).ranks()))
            .map(Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| Self::find_rank_of_straight(self.0.of(suit)))
            .map(Ranking::StraightFlush)
    }

    /// five consecutive rank bits survive four shifted ANDs at their top rank
    fn find_rank_of_straight(hand: Hand) -> Option<Rank> {
        let ranks = hand.ranks();
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        Rank::hi(bits).or_else(|| match WHEEL & ranks {
            WHEEL => Some(Rank::Five),
            _ => None,
        })
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(*suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.copies(*rank) >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(cards: &str) -> Ranking {
        Evaluator::from(Hand::try_from(cards).unwrap()).ranking()
    }

    #[test]
    fn high_card() {
        assert_eq!(rank("As Kh Qd Jc 9s"), Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn one_pair() {
        assert_eq!(rank("As Ah Kd Qc Js"), Ranking::OnePair(Rank::Ace));
    }

    #[test]
    fn two_pair() {
        assert_eq!(rank("As Ah Kd Kc Qs"), Ranking::TwoPair(Rank::Ace, Rank::King));
    }

    #[test]
    fn three_oak() {
        assert_eq!(rank("As Ah Ad Kc Qs"), Ranking::ThreeOAK(Rank::Ace));
    }

    #[test]
    fn straight() {
        assert_eq!(rank("Ts Jh Qd Kc As"), Ranking::Straight(Rank::Ace));
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(rank("As 2h 3d 4c 5s"), Ranking::Straight(Rank::Five));
    }

    #[test]
    fn low_straight() {
        assert_eq!(rank("As 2s 3h 4d 5c 6s"), Ranking::Straight(Rank::Six));
    }

    #[test]
    fn flush() {
        assert_eq!(rank("As Ks Qs Js 9s"), Ranking::Flush(Rank::Ace));
    }

    #[test]
    fn flush_over_straight() {
        assert_eq!(rank("4h 6h 7h 8h 9h Ts"), Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house() {
        assert_eq!(rank("2s 2h 2d 3c 3s"), Ranking::FullHouse(Rank::Two, Rank::Three));
    }

    #[test]
    fn two_three_oak() {
        assert_eq!(rank("As Ah Ad Kc Ks Kh Qd"), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak() {
        assert_eq!(rank("As Ah Ad Ac Ks"), Ranking::FourOAK(Rank::Ace));
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank("Ts Js Qs Ks As"), Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(rank("As 2s 3s 4s 5s"), Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn three_pair() {
        assert_eq!(rank("As Ah Kd Kc Qs Qh Jd"), Ranking::TwoPair(Rank::Ace, Rank::King));
    }

    #[test]
    fn fewer_than_five_cards() {
        assert_eq!(rank("Kd Kc"), Ranking::OnePair(Rank::King));
        assert_eq!(rank("7d"), Ranking::HighCard(Rank::Seven));
    }
}
