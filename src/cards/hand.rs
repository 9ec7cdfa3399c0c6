use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards, packed into the 52 LSBs of a u64.
/// Each bit is one card of a sorted deck. Boards, hole cards and the union of
/// the two are all Hands, which keeps evaluation allocation-free.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn union(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// cards of the given suit, still as a 52-bit set
    pub fn of(&self, suit: Suit) -> Self {
        Self(self.0 & u64::from(suit))
    }
    /// how many cards of the given rank are present
    pub fn copies(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
    /// 13-bit mask of ranks present, suits collapsed
    pub fn ranks(&self) -> u16 {
        Rank::all()
            .into_iter()
            .filter(|r| self.copies(*r) > 0)
            .map(u16::from)
            .fold(0, |a, b| a | b)
    }
    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// cards come out low to high
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            n => {
                let card = Card::from(n.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism, up to ordering
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0, |a, b| a | b))
    }
}

/// str isomorphism
/// accepts "As Kh" as well as "AsKh"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(anyhow::anyhow!("odd number of characters in hand: {}", s));
        }
        chars
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|card| Card::try_from(card.as_str()))
            .collect::<Result<Vec<Card>, _>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(hand.of(Suit::Club).ranks(), 0b_1000100010001);
        assert_eq!(hand.of(Suit::Diamond).ranks(), 0b_0001000100010);
        assert_eq!(hand.of(Suit::Heart).ranks(), 0b_0010001000100);
        assert_eq!(hand.of(Suit::Spade).ranks(), 0b_0100010001000);
    }

    #[test]
    fn spaced_and_packed() {
        assert_eq!(
            Hand::try_from("AsKh").unwrap(),
            Hand::try_from("As Kh").unwrap()
        );
        assert!(Hand::try_from("AsK").is_err());
    }

    #[test]
    fn rank_multiplicity() {
        let hand = Hand::try_from("As Ah Ad Kc").unwrap();
        assert_eq!(hand.copies(Rank::Ace), 3);
        assert_eq!(hand.copies(Rank::King), 1);
        assert_eq!(hand.copies(Rank::Two), 0);
    }
}
