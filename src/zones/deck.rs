//! Session deck - the four piles of one engagement.
//!
//! Every copy sits in exactly one of:
//!
//! | Pile     | Holds                                                 |
//! |----------|-------------------------------------------------------|
//! | `Deck`   | shuffled draw pile                                    |
//! | `Hand`   | cards the player can choose from                      |
//! | `Played` | cards played this cycle (locked combo pieces in Physical) |
//! | `Gated`  | cards withheld until the win resource crosses their threshold |
//!
//! Copies move between piles by value, which is what keeps that invariant.
//! Every operation is total: drawing from an exhausted deck draws nothing,
//! and playing a card that is not in hand does nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::pile::Pile;
use crate::cards::CardInstance;
use crate::core::{GameRng, InstanceId};

/// Card IDs moved by one deck operation.
pub type MovedCards = SmallVec<[InstanceId; 8]>;

/// Which of the four piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Deck,
    Hand,
    Played,
    Gated,
}

/// Pile sizes at a moment in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileCounts {
    pub deck: usize,
    pub hand: usize,
    pub played: usize,
    pub gated: usize,
}

impl PileCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck + self.hand + self.played + self.gated
    }
}

/// The four piles of one engagement.
///
/// ## Usage
///
/// ```
/// use engagement_engine::cards::{CardId, CardInstance};
/// use engagement_engine::core::InstanceId;
/// use engagement_engine::zones::SessionDeck;
///
/// let deck_cards: Vec<_> = (0..5).map(|i| CardInstance::tactical(InstanceId(i), CardId(i))).collect();
/// let opener = vec![CardInstance::tactical(InstanceId(10), CardId(10))];
///
/// let mut deck = SessionDeck::create_from_instances(deck_cards, opener, 42);
/// assert_eq!(deck.hand().len(), 1);
///
/// let drawn = deck.draw_to_hand(2);
/// assert_eq!(drawn.len(), 2);
/// assert!(deck.play_card(InstanceId(10)));
/// assert!(!deck.play_card(InstanceId(10)));
/// ```
#[derive(Clone, Debug)]
pub struct SessionDeck {
    deck: Pile,
    hand: Pile,
    played: Pile,
    gated: Pile,
}

impl SessionDeck {
    /// Create four empty piles, each with its own RNG stream forked from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut root = GameRng::new(seed);
        Self {
            deck: Pile::new(root.fork()),
            hand: Pile::new(root.fork()),
            played: Pile::new(root.fork()),
            gated: Pile::new(root.fork()),
        }
    }

    /// Build a deck from its draw cards and an authored starting hand.
    ///
    /// The draw pile is shuffled. The starting hand keeps its authored order.
    #[must_use]
    pub fn create_from_instances(
        deck_cards: Vec<CardInstance>,
        starting_hand: Vec<CardInstance>,
        seed: u64,
    ) -> Self {
        let mut deck = Self::new(seed);
        deck.deck.add_range(deck_cards);
        deck.deck.shuffle();
        deck.hand.add_range(starting_hand);
        deck
    }

    /// Insert a copy into the gated pile. Gated cards keep insertion order.
    pub fn add_gated(&mut self, mut card: CardInstance) {
        card.playable = false;
        self.gated.add(card);
    }

    /// Move up to `count` cards from the top of the deck into hand.
    pub fn draw_to_hand(&mut self, count: usize) -> MovedCards {
        let drawn = self.deck.draw_multiple(count);
        let ids = drawn.iter().map(|c| c.id).collect();
        self.hand.add_range(drawn);
        ids
    }

    /// Move up to `count` cards satisfying `accept` into hand, scanning from the top.
    ///
    /// Rejected cards stay in the deck in their current order.
    pub fn draw_to_hand_where<F>(&mut self, count: usize, mut accept: F) -> MovedCards
    where
        F: FnMut(&CardInstance) -> bool,
    {
        let mut remaining = count;
        let drawn = self.deck.take_where(|card| {
            if remaining > 0 && accept(card) {
                remaining -= 1;
                true
            } else {
                false
            }
        });
        let ids = drawn.iter().map(|c| c.id).collect();
        self.hand.add_range(drawn);
        ids
    }

    /// Move a card from hand to the played pile.
    ///
    /// Returns `false` and changes nothing if the card is not in hand.
    pub fn play_card(&mut self, id: InstanceId) -> bool {
        match self.hand.remove(id) {
            Some(card) => {
                self.played.add(card);
                true
            }
            None => false,
        }
    }

    /// Release every gated card whose threshold is at most `progress`.
    ///
    /// Released cards go to hand, marked playable, in gated order.
    pub fn check_gated_thresholds(&mut self, progress: u32) -> MovedCards {
        let released = self
            .gated
            .take_where(|card| card.threshold().map_or(false, |t| t <= progress));

        let mut ids = MovedCards::new();
        for mut card in released {
            card.playable = true;
            debug!(card = %card.id, progress, "released gated card");
            ids.push(card.id);
            self.hand.add(card);
        }
        ids
    }

    /// Shuffle hand and played cards back into the deck.
    ///
    /// Played goal cards stay in the played pile; a goal is completed once.
    pub fn reshuffle_into_deck(&mut self) {
        let played = self.played.take_where(|card| !card.is_goal());
        let hand = self.hand.draw_all();
        self.deck.add_range(played);
        self.deck.add_range(hand);
        self.deck.shuffle();
    }

    /// Return hand cards beyond `max` to the bottom of the deck, newest first.
    pub fn discard_down(&mut self, max: usize) -> MovedCards {
        let mut returned = MovedCards::new();
        while self.hand.len() > max {
            let Some(last) = self.hand.iter().last().map(|c| c.id) else {
                break;
            };
            if let Some(card) = self.hand.remove(last) {
                returned.push(card.id);
                self.deck.add(card);
            }
        }
        returned
    }

    /// Which pile holds a card.
    #[must_use]
    pub fn locate(&self, id: InstanceId) -> Option<PileId> {
        [PileId::Deck, PileId::Hand, PileId::Played, PileId::Gated]
            .into_iter()
            .find(|&pile| self.pile(pile).contains(id))
    }

    /// Borrow a pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Deck => &self.deck,
            PileId::Hand => &self.hand,
            PileId::Played => &self.played,
            PileId::Gated => &self.gated,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Pile {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Pile {
        &mut self.hand
    }

    #[must_use]
    pub fn played(&self) -> &Pile {
        &self.played
    }

    pub fn played_mut(&mut self) -> &mut Pile {
        &mut self.played
    }

    #[must_use]
    pub fn gated(&self) -> &Pile {
        &self.gated
    }

    #[must_use]
    pub fn counts(&self) -> PileCounts {
        PileCounts {
            deck: self.deck.len(),
            hand: self.hand.len(),
            played: self.played.len(),
            gated: self.gated.len(),
        }
    }

    /// Empty all four piles.
    pub fn clear(&mut self) {
        self.deck.clear();
        self.hand.clear();
        self.played.clear();
        self.gated.clear();
    }
}
