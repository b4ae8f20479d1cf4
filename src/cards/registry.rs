//! Card registry - the definition arena.
//!
//! The `CardRegistry` is the sole owner of every card definition for one
//! system. Decks, piles and sessions hold `CardId` handles into it, and
//! content resolves its string keys to handles exactly once, at deck build.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::EngineError;
use crate::effects::catalog::{self, EffectDrift};
use crate::rules::System;

/// Registry of card definitions for one system.
///
/// ## Example
///
/// ```
/// use engagement_engine::cards::{CardRegistry, CardDefinition};
/// use engagement_engine::systems::{Social, SocialCategory, Delivery};
///
/// let mut registry: CardRegistry<Social> = CardRegistry::new();
///
/// let id = registry
///     .register_with(|id| {
///         CardDefinition::new(id, "small_talk", "Small Talk", 1, SocialCategory::Expressive, Delivery::Measured)
///     })
///     .unwrap();
///
/// assert_eq!(registry.id_of("small_talk"), Some(id));
/// assert_eq!(registry.get(id).unwrap().name, "Small Talk");
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry<S: System> {
    cards: FxHashMap<CardId, CardDefinition<S>>,
    by_key: FxHashMap<String, CardId>,
    next_id: u32,
}

impl<S: System> Default for CardRegistry<S> {
    fn default() -> Self {
        Self {
            cards: FxHashMap::default(),
            by_key: FxHashMap::default(),
            next_id: 0,
        }
    }
}

impl<S: System> CardRegistry<S> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails if the ID or the content key is already taken.
    pub fn register(&mut self, card: CardDefinition<S>) -> Result<CardId, EngineError> {
        if self.cards.contains_key(&card.id) || self.by_key.contains_key(&card.key) {
            return Err(EngineError::DuplicateCard(card.key));
        }
        let id = card.id;
        self.next_id = self.next_id.max(id.raw() + 1);
        self.by_key.insert(card.key.clone(), id);
        self.cards.insert(id, card);
        Ok(id)
    }

    /// Register a card built around the next free ID.
    pub fn register_with<F>(&mut self, build: F) -> Result<CardId, EngineError>
    where
        F: FnOnce(CardId) -> CardDefinition<S>,
    {
        let card = build(CardId::new(self.next_id));
        self.register(card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition<S>> {
        self.cards.get(&id)
    }

    /// Get a card definition by content key.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&CardDefinition<S>> {
        self.by_key.get(key).and_then(|id| self.cards.get(id))
    }

    /// Resolve a content key to its handle.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<CardId> {
        self.by_key.get(key).copied()
    }

    /// Resolve a content key, failing on unknown keys.
    pub fn resolve(&self, key: &str) -> Result<CardId, EngineError> {
        self.id_of(key).ok_or_else(|| EngineError::UnknownCard(key.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition<S>> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition<S>>
    where
        F: Fn(&CardDefinition<S>) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// Cards whose effects drift from their derivation, sorted by ID.
    #[must_use]
    pub fn verify_all(&self) -> Vec<(CardId, Vec<EffectDrift>)> {
        let mut drifted: Vec<_> = self
            .cards
            .values()
            .map(|card| (card.id, catalog::verify(card)))
            .filter(|(_, drift)| !drift.is_empty())
            .collect();
        drifted.sort_by_key(|(id, _)| *id);
        drifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardEffects;
    use crate::systems::{Mental, MentalCategory, Method};

    fn card(id: u32, key: &str, depth: u8) -> CardDefinition<Mental> {
        CardDefinition::new(CardId::new(id), key, key, depth, MentalCategory::Analytical, Method::Standard)
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "deduce", 1)).unwrap();

        let found = registry.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().key, "deduce");

        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_register_with_assigns_ids() {
        let mut registry: CardRegistry<Mental> = CardRegistry::new();

        let id1 = registry.register_with(|id| card(id.raw(), "a", 1)).unwrap();
        let id2 = registry.register_with(|id| card(id.raw(), "b", 1)).unwrap();

        assert_eq!(id1, CardId::new(0));
        assert_eq!(id2, CardId::new(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_with_skips_explicit_ids() {
        let mut registry: CardRegistry<Mental> = CardRegistry::new();
        registry.register(card(10, "explicit", 1)).unwrap();

        let id = registry.register_with(|id| card(id.raw(), "auto", 1)).unwrap();
        assert_eq!(id, CardId::new(11));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "a", 1)).unwrap();

        let err = registry.register(card(1, "b", 1)).unwrap_err();
        assert_eq!(err, EngineError::DuplicateCard("b".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "a", 1)).unwrap();

        assert!(registry.register(card(2, "a", 1)).is_err());
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry: CardRegistry<Mental> = CardRegistry::new();
        assert_eq!(registry.resolve("ghost"), Err(EngineError::UnknownCard("ghost".into())));
    }

    #[test]
    fn test_find_with_predicate() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "shallow", 1)).unwrap();
        registry.register(card(2, "deep", 7)).unwrap();

        let cheap: Vec<_> = registry.find(|c| c.effects.cost <= 1).collect();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].key, "shallow");
    }

    #[test]
    fn test_verify_all() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "derived", 3)).unwrap();
        registry
            .register(card(2, "tuned", 3).with_effects(CardEffects { cost: 9, ..CardEffects::default() }))
            .unwrap();

        let drift = registry.verify_all();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].0, CardId::new(2));
    }
}
