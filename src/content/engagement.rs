//! Engagement type and deck definitions.
//!
//! Authored once at content load and immutable afterwards. An
//! `EngagementType` names a deck and the thresholds a session plays
//! against; an `EngagementDeck` lists card keys. Both are resolved into a
//! `SessionDeck` and `EngagementSession` pair when an engagement starts.

use serde::{Deserialize, Serialize};

use super::player::PlayerProfile;
use crate::cards::{CardInstance, CardRegistry};
use crate::core::{EngineError, InstanceAllocator};
use crate::properties::EquipmentRequirement;
use crate::rules::System;

/// Authored engagement parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementType {
    pub id: String,

    /// Deck this engagement draws from.
    pub deck_id: String,

    /// Win resource needed for victory.
    pub victory_threshold: u32,

    /// Loss resource that ends the engagement in defeat.
    pub danger_threshold: u32,

    /// Cards drawn before the first turn, on top of any starting hand.
    pub initial_hand_size: u32,

    /// Hand size enforced after each recovery.
    pub max_hand_size: u32,
}

impl EngagementType {
    /// Create and validate an engagement type.
    pub fn new(
        id: impl Into<String>,
        deck_id: impl Into<String>,
        victory_threshold: u32,
        danger_threshold: u32,
        initial_hand_size: u32,
        max_hand_size: u32,
    ) -> Result<Self, EngineError> {
        let engagement = Self {
            id: id.into(),
            deck_id: deck_id.into(),
            victory_threshold,
            danger_threshold,
            initial_hand_size,
            max_hand_size,
        };
        engagement.validate()?;
        Ok(engagement)
    }

    /// Check thresholds and hand sizes.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |reason: &str| EngineError::InvalidEngagement {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.victory_threshold == 0 {
            return Err(invalid("victory threshold must be positive"));
        }
        if self.danger_threshold == 0 {
            return Err(invalid("danger threshold must be positive"));
        }
        if self.max_hand_size == 0 {
            return Err(invalid("max hand size must be positive"));
        }
        if self.initial_hand_size > self.max_hand_size {
            return Err(invalid("initial hand size exceeds max hand size"));
        }
        Ok(())
    }
}

/// Authored list of cards an engagement plays with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementDeck {
    pub id: String,

    /// Card keys shuffled into the draw pile. Repeats make extra copies.
    pub cards: Vec<String>,

    /// Card keys dealt to hand in this order.
    #[serde(default)]
    pub starting_hand: Vec<String>,
}

/// Instances built from a deck definition.
#[derive(Clone, Debug, Default)]
pub struct BuiltDeck {
    pub draw: Vec<CardInstance>,
    pub starting_hand: Vec<CardInstance>,
    /// Keys dropped because the player lacks the gear.
    pub filtered: Vec<String>,
}

impl EngagementDeck {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cards<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.cards.extend(keys.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_starting_hand<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.starting_hand.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Resolve keys into fresh card copies.
    ///
    /// Unknown keys are content errors. Cards needing gear the player does
    /// not carry are left out and reported in `filtered`.
    pub fn build_instances<S: System>(
        &self,
        registry: &CardRegistry<S>,
        player: &PlayerProfile,
        ids: &mut InstanceAllocator,
    ) -> Result<BuiltDeck, EngineError> {
        let mut built = BuiltDeck::default();

        for (keys, target) in [(&self.cards, false), (&self.starting_hand, true)] {
            for key in keys {
                let card_id = registry.resolve(key)?;
                let Some(card) = registry.get(card_id) else {
                    return Err(EngineError::UnknownCard(key.clone()));
                };
                if card.requires_equipment() {
                    let requirement = EquipmentRequirement::for_card(card)?;
                    if !requirement.is_met_by(&player.equipment) {
                        built.filtered.push(key.clone());
                        continue;
                    }
                }
                let instance = CardInstance::tactical(ids.next_id(), card_id);
                if target {
                    built.starting_hand.push(instance);
                } else {
                    built.draw.push(instance);
                }
            }
        }

        Ok(built)
    }
}

/// Goal card withheld in the gated pile until its threshold is reached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCard {
    pub key: String,
    pub name: String,
    /// Win resource needed before the goal surfaces in hand.
    pub threshold: u32,
}

impl GoalCard {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, threshold: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            threshold,
        }
    }

    /// Create the gated copy.
    #[must_use]
    pub fn instantiate(&self, ids: &mut InstanceAllocator) -> CardInstance {
        CardInstance::goal(ids.next_id(), self.key.clone(), self.name.clone(), self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::properties::EquipmentCategory;
    use crate::systems::{Physical, PhysicalApproach, PhysicalCategory};

    fn registry() -> CardRegistry<Physical> {
        let mut registry = CardRegistry::new();
        registry
            .register(CardDefinition::new(
                CardId::new(0),
                "brace",
                "Brace",
                1,
                PhysicalCategory::Endurance,
                PhysicalApproach::Methodical,
            ))
            .unwrap();
        registry
            .register(
                CardDefinition::new(
                    CardId::new(1),
                    "rope_swing",
                    "Rope Swing",
                    3,
                    PhysicalCategory::Leverage,
                    PhysicalApproach::Aggressive,
                )
                .with_equipment(EquipmentCategory::Climbing),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_engagement_type_validation() {
        assert!(EngagementType::new("climb", "deck", 20, 10, 4, 7).is_ok());

        let err = EngagementType::new("climb", "deck", 0, 10, 4, 7).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEngagement { .. }));

        assert!(EngagementType::new("climb", "deck", 20, 0, 4, 7).is_err());
        assert!(EngagementType::new("climb", "deck", 20, 10, 8, 7).is_err());
    }

    #[test]
    fn test_build_instances() {
        let deck = EngagementDeck::new("deck")
            .with_cards(["brace", "brace", "rope_swing"])
            .with_starting_hand(["brace"]);
        let player = PlayerProfile::new().with_equipment(EquipmentCategory::Climbing);
        let mut ids = InstanceAllocator::new();

        let built = deck.build_instances(&registry(), &player, &mut ids).unwrap();
        assert_eq!(built.draw.len(), 3);
        assert_eq!(built.starting_hand.len(), 1);
        assert!(built.filtered.is_empty());
        assert_eq!(ids.allocated(), 4);
    }

    #[test]
    fn test_build_filters_missing_equipment() {
        let deck = EngagementDeck::new("deck").with_cards(["brace", "rope_swing"]);
        let mut ids = InstanceAllocator::new();

        let built = deck.build_instances(&registry(), &PlayerProfile::new(), &mut ids).unwrap();
        assert_eq!(built.draw.len(), 1);
        assert_eq!(built.filtered, vec!["rope_swing".to_string()]);
    }

    #[test]
    fn test_build_unknown_key() {
        let deck = EngagementDeck::new("deck").with_cards(["brace", "ghost"]);
        let mut ids = InstanceAllocator::new();

        let err = deck.build_instances(&registry(), &PlayerProfile::new(), &mut ids).unwrap_err();
        assert_eq!(err, EngineError::UnknownCard("ghost".into()));
    }

    #[test]
    fn test_goal_instantiate() {
        let goal = GoalCard::new("summit", "Reach the Summit", 15);
        let mut ids = InstanceAllocator::new();
        let card = goal.instantiate(&mut ids);

        assert!(card.is_goal());
        assert_eq!(card.threshold(), Some(15));
    }
}
