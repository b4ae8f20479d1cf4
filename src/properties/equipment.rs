//! Equipment categories and card equipment requirements.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardId};
use crate::core::EngineError;
use crate::rules::System;

/// Kind of gear a card can require.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    #[default]
    None,
    Climbing,
    Navigation,
    Weather,
    Light,
    Water,
    Special,
}

/// Equipment a specific card needs before it can enter a deck.
///
/// Only exists for cards that actually require something. Building one
/// from a card with `EquipmentCategory::None` is a caller error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRequirement {
    /// Card the requirement belongs to.
    pub card: CardId,
    /// Content key of that card.
    pub card_key: String,
    /// Required category.
    pub category: EquipmentCategory,
}

impl EquipmentRequirement {
    /// Build the requirement for a card.
    pub fn for_card<S: System>(card: &CardDefinition<S>) -> Result<Self, EngineError> {
        if card.equipment == EquipmentCategory::None {
            return Err(EngineError::NoEquipmentRequirement(card.key.clone()));
        }
        Ok(Self {
            card: card.id,
            card_key: card.key.clone(),
            category: card.equipment,
        })
    }

    /// Whether the owned gear covers this requirement.
    #[must_use]
    pub fn is_met_by(&self, owned: &FxHashSet<EquipmentCategory>) -> bool {
        owned.contains(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PlayerStat;
    use crate::systems::{Physical, PhysicalApproach, PhysicalCategory};

    fn rope_climb() -> CardDefinition<Physical> {
        CardDefinition::new(
            CardId::new(7),
            "rope_climb",
            "Rope Climb",
            3,
            PhysicalCategory::Endurance,
            PhysicalApproach::Methodical,
        )
        .with_stat(PlayerStat::Cunning)
        .with_equipment(EquipmentCategory::Climbing)
    }

    #[test]
    fn test_requirement_from_card() {
        let req = EquipmentRequirement::for_card(&rope_climb()).unwrap();
        assert_eq!(req.category, EquipmentCategory::Climbing);
        assert_eq!(req.card, CardId::new(7));
    }

    #[test]
    fn test_no_requirement_is_error() {
        let card = rope_climb().with_equipment(EquipmentCategory::None);
        let err = EquipmentRequirement::for_card(&card).unwrap_err();
        assert_eq!(err, EngineError::NoEquipmentRequirement("rope_climb".into()));
    }

    #[test]
    fn test_is_met_by() {
        let req = EquipmentRequirement::for_card(&rope_climb()).unwrap();
        let mut gear = FxHashSet::default();
        assert!(!req.is_met_by(&gear));

        gear.insert(EquipmentCategory::Light);
        assert!(!req.is_met_by(&gear));

        gear.insert(EquipmentCategory::Climbing);
        assert!(req.is_met_by(&gear));
    }
}
