//! The deck of undrawn cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DrawError};

/// The remaining undrawn cards of a session.
///
/// A deck never holds the same card twice and only shrinks as cards are
/// drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card deck, ordered by suit then rank.
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from the given cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if any card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Draws a card uniformly at random and removes it from the deck.
    ///
    /// The relative order of the remaining cards is kept.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is empty. The deck is not
    /// modified in that case.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = rng.random_range(0..self.cards.len());
        let card = self.cards.remove(index);
        log::trace!("drew {card} at index {index}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the cards still in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

