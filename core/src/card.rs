use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub const fn name(self) -> &'static str {
        use Suit::*;
        match self {
            Spades => "spades",
            Hearts => "hearts",
            Clubs => "clubs",
            Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Card rank, aces low.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
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
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Numeric value, 1 for ace up to 13 for king.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        use Rank::*;
        match self {
            Ace => "ace",
            Two => "two",
            Three => "three",
            Four => "four",
            Five => "five",
            Six => "six",
            Seven => "seven",
            Eight => "eight",
            Nine => "nine",
            Ten => "ten",
            Jack => "jack",
            Queen => "queen",
            King => "king",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub fn is_face_card(self) -> bool {
        self.rank > Rank::Ten
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses `"<rank>,<suit>"`, e.g. `"Eight,Spades"`.
impl FromStr for Card {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.split_once(',').ok_or(())?;
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_above_ten() {
        assert!(!Card::new(Rank::Ten, Suit::Clubs).is_face_card());
        assert!(Card::new(Rank::Jack, Suit::Clubs).is_face_card());
        assert!(Card::new(Rank::King, Suit::Hearts).is_face_card());
        assert!(!Card::new(Rank::Ace, Suit::Hearts).is_face_card());
    }

    #[test]
    fn parses_names_ignoring_case() {
        assert_eq!(
            "Eight,Spades".parse::<Card>(),
            Ok(Card::new(Rank::Eight, Suit::Spades))
        );
        assert_eq!(
            "queen, DIAMONDS".parse::<Card>(),
            Ok(Card::new(Rank::Queen, Suit::Diamonds))
        );
        assert!("Eight".parse::<Card>().is_err());
        assert!("Eleven,Spades".parse::<Card>().is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "ace of hearts");
    }

    #[test]
    fn ranks_are_ordered_one_to_thirteen() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert!(Rank::Queen > Rank::Jack);
    }
}
