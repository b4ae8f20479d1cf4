//! Pile - an ordered run of card copies.
//!
//! The front of the pile is the top: `draw_top` takes from the front and
//! `add` appends to the back. Each pile owns its own [`GameRng`], which it
//! uses for shuffles and for pre-rolling copies the first time they are
//! added anywhere.
//!
//! Piles do not police duplicates; the owning [`SessionDeck`](super::SessionDeck)
//! guarantees a copy sits in exactly one pile by moving instances by value.

use std::collections::VecDeque;

use tracing::trace;

use crate::cards::CardInstance;
use crate::core::{GameRng, InstanceId};

/// Inclusive bounds of a pre-rolled resolution value.
pub const PRE_ROLL_MIN: u8 = 1;
pub const PRE_ROLL_MAX: u8 = 100;

/// Ordered collection of card copies.
///
/// ## Usage
///
/// ```
/// use engagement_engine::cards::{CardId, CardInstance};
/// use engagement_engine::core::InstanceId;
/// use engagement_engine::zones::Pile;
///
/// let mut pile = Pile::with_seed(7);
/// pile.add(CardInstance::tactical(InstanceId(0), CardId(1)));
/// pile.add(CardInstance::tactical(InstanceId(1), CardId(2)));
///
/// let top = pile.draw_top().unwrap();
/// assert_eq!(top.id, InstanceId(0));
/// assert!(top.pre_roll().is_some());
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Pile {
    cards: VecDeque<CardInstance>,
    rng: GameRng,
}

impl Pile {
    /// Create an empty pile drawing randomness from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            cards: VecDeque::new(),
            rng,
        }
    }

    /// Create an empty pile with a fresh seeded RNG.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Append a copy to the bottom, pre-rolling it if it has never been rolled.
    pub fn add(&mut self, mut card: CardInstance) {
        if card.pre_roll().is_none() {
            let roll = self.rng.gen_range(i32::from(PRE_ROLL_MIN)..i32::from(PRE_ROLL_MAX) + 1);
            // gen_range stays inside 1..=100
            card.assign_pre_roll(roll as u8);
        }
        self.cards.push_back(card);
    }

    /// Append several copies, preserving their order.
    pub fn add_range<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = CardInstance>,
    {
        for card in cards {
            self.add(card);
        }
    }

    /// Remove and return the top copy, or `None` when empty.
    pub fn draw_top(&mut self) -> Option<CardInstance> {
        let card = self.cards.pop_front();
        if let Some(card) = &card {
            trace!(card = %card.id, remaining = self.cards.len(), "drew from pile");
        }
        card
    }

    /// Draw up to `count` copies from the top, stopping early if the pile empties.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<CardInstance> {
        let take = count.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Remove and return every copy, top first.
    pub fn draw_all(&mut self) -> Vec<CardInstance> {
        self.cards.drain(..).collect()
    }

    /// Uniformly shuffle the pile in place.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove a specific copy.
    pub fn remove(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        self.cards.remove(index)
    }

    /// Remove every copy matching `predicate`, keeping pile order for both halves.
    pub fn take_where<F>(&mut self, mut predicate: F) -> Vec<CardInstance>
    where
        F: FnMut(&CardInstance) -> bool,
    {
        let mut taken = Vec::new();
        let mut kept = VecDeque::with_capacity(self.cards.len());
        for card in self.cards.drain(..) {
            if predicate(&card) {
                taken.push(card);
            } else {
                kept.push_back(card);
            }
        }
        self.cards = kept;
        taken
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Top copy without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&CardInstance> {
        self.cards.front()
    }

    /// Drop every copy.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardInstance> {
        self.cards.iter_mut()
    }

    /// Instance IDs, top to bottom.
    #[must_use]
    pub fn ids(&self) -> Vec<InstanceId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
