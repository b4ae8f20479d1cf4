//! Card instances - per-copy runtime state.
//!
//! `CardInstance` is one physical copy of a card inside a session deck.
//! Piles move instances by value, so every copy lives in exactly one pile.
//!
//! ## Pre-rolls
//!
//! The first pile an instance enters assigns it a resolution value in
//! `1..=100`. The value is never reassigned afterwards: moving the copy
//! between piles keeps the roll it was dealt.
//!
//! ## Goal Cards
//!
//! Goal cards are not authored tactical cards. They sit in the gated pile
//! until the win resource reaches their threshold, then surface in hand.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::InstanceId;

/// What a copy is a copy of.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// A tactical card backed by a registry definition.
    Tactical(CardId),
    /// A goal card that completes the engagement when played.
    Goal { key: String, name: String },
}

/// System-specific runtime parameters carried by a copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContext {
    /// Win resource needed to release this copy from the gated pile.
    pub threshold: Option<u32>,

    /// Extra integer parameters keyed by name.
    #[serde(default)]
    pub params: FxHashMap<String, i64>,
}

/// A card copy in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this copy.
    pub id: InstanceId,

    pub kind: CardKind,

    /// Resolution value, assigned on first pile insertion.
    pre_roll: Option<u8>,

    /// Whether the copy can be played right now.
    pub playable: bool,

    #[serde(default)]
    pub context: CardContext,
}

impl CardInstance {
    /// Create a copy of a tactical card.
    #[must_use]
    pub fn tactical(id: InstanceId, card: CardId) -> Self {
        Self {
            id,
            kind: CardKind::Tactical(card),
            pre_roll: None,
            playable: true,
            context: CardContext::default(),
        }
    }

    /// Create a goal card gated behind `threshold`.
    #[must_use]
    pub fn goal(id: InstanceId, key: impl Into<String>, name: impl Into<String>, threshold: u32) -> Self {
        Self {
            id,
            kind: CardKind::Goal {
                key: key.into(),
                name: name.into(),
            },
            pre_roll: None,
            playable: false,
            context: CardContext {
                threshold: Some(threshold),
                params: FxHashMap::default(),
            },
        }
    }

    /// Gate this copy behind a win-resource threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.context.threshold = Some(threshold);
        self
    }

    /// Definition handle, or `None` for goal cards.
    #[must_use]
    pub fn card_id(&self) -> Option<CardId> {
        match self.kind {
            CardKind::Tactical(id) => Some(id),
            CardKind::Goal { .. } => None,
        }
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        matches!(self.kind, CardKind::Goal { .. })
    }

    #[must_use]
    pub fn threshold(&self) -> Option<u32> {
        self.context.threshold
    }

    /// The pre-rolled resolution value, if this copy has entered a pile.
    #[must_use]
    pub fn pre_roll(&self) -> Option<u8> {
        self.pre_roll
    }

    /// Assign the pre-roll if none is set. Returns whether it was assigned.
    pub(crate) fn assign_pre_roll(&mut self, value: u8) -> bool {
        if self.pre_roll.is_some() {
            return false;
        }
        self.pre_roll = Some(value);
        true
    }

    /// Get a context parameter with a default.
    #[must_use]
    pub fn get_param(&self, key: &str, default: i64) -> i64 {
        self.context.params.get(key).copied().unwrap_or(default)
    }

    /// Set a context parameter.
    pub fn set_param(&mut self, key: impl Into<String>, value: i64) {
        self.context.params.insert(key.into(), value);
    }

    /// Remove a context parameter, returning it or zero.
    pub fn take_param(&mut self, key: &str) -> i64 {
        self.context.params.remove(key).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tactical_instance() {
        let card = CardInstance::tactical(InstanceId(1), CardId(4));
        assert_eq!(card.card_id(), Some(CardId(4)));
        assert!(!card.is_goal());
        assert!(card.playable);
        assert!(card.pre_roll().is_none());
        assert!(card.threshold().is_none());
    }

    #[test]
    fn test_goal_instance() {
        let card = CardInstance::goal(InstanceId(2), "secure_passage", "Secure Passage", 12);
        assert!(card.is_goal());
        assert!(card.card_id().is_none());
        assert!(!card.playable);
        assert_eq!(card.threshold(), Some(12));
    }

    #[test]
    fn test_pre_roll_assigned_once() {
        let mut card = CardInstance::tactical(InstanceId(1), CardId(1));
        assert!(card.assign_pre_roll(40));
        assert!(!card.assign_pre_roll(90));
        assert_eq!(card.pre_roll(), Some(40));
    }

    #[test]
    fn test_params() {
        let mut card = CardInstance::tactical(InstanceId(1), CardId(1)).with_threshold(5);
        assert_eq!(card.get_param("bonus", 0), 0);

        card.set_param("bonus", 3);
        assert_eq!(card.get_param("bonus", 0), 3);
        assert_eq!(card.threshold(), Some(5));

        assert_eq!(card.take_param("bonus"), 3);
        assert_eq!(card.take_param("bonus"), 0);
    }

    #[test]
    fn test_serialization_keeps_pre_roll() {
        let mut card = CardInstance::tactical(InstanceId(9), CardId(2));
        card.assign_pre_roll(77);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.pre_roll(), Some(77));
        assert_eq!(card, deserialized);
    }
}
