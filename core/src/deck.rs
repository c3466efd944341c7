use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

pub const STANDARD_DECK_SIZE: usize = 52;

/// Ordered pile of cards built from one or more standard 52-card decks.
///
/// The front of the deck is the top: `draw` takes from the front, `add_cards`
/// puts cards at the bottom.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Unshuffled deck made of `num_decks` standard decks.
    pub fn new(num_decks: usize) -> Self {
        let mut cards = VecDeque::with_capacity(STANDARD_DECK_SIZE * num_decks);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                for _ in 0..num_decks {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(num_decks: usize, rng: &mut R) -> Self {
        let mut deck = Self::new(num_decks);
        deck.shuffle(rng);
        deck
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.make_contiguous().shuffle(rng);
        self
    }

    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) -> &mut Self {
        self.cards.extend(cards);
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}
