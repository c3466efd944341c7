use serde::{Deserialize, Serialize};

use crate::*;

/// A card game participant: a hand of cards and a running score.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    hand: Vec<Card>,
    score: i32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            hand: cards.into_iter().collect(),
            score: 0,
        }
    }

    pub fn add_to_hand(&mut self, card: Card) -> &mut Self {
        self.hand.push(card);
        self
    }

    /// Removes one copy of `card`, returning whether it was held.
    pub fn remove_from_hand(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&held| held == card) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_of_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.hand.iter().copied().filter(move |card| card.rank() == rank)
    }

    pub fn cards_of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.hand.iter().copied().filter(move |card| card.suit() == suit)
    }

    pub fn clear_hand(&mut self) -> &mut Self {
        self.hand.clear();
        self
    }

    /// One card per line.
    pub fn show_hand(&self) -> String {
        let mut sorted = self.hand.clone();
        sorted.sort_by_key(|card| (card.suit(), card.rank()));
        sorted.iter().map(|card| format!("{card}\n")).collect()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn increase_score(&mut self, points: i32) -> i32 {
        self.score += points;
        self.score
    }

    pub fn decrease_score(&mut self, points: i32) -> i32 {
        self.score -= points;
        self.score
    }
}
