//! Card definitions - immutable authored card data.
//!
//! A `CardDefinition` describes one authored card through categorical tags
//! (depth, category, approach, risk, visibility, exertion, equipment).
//! The numbers the session actually spends and gains live in
//! [`CardEffects`], which is either derived from those tags through the
//! effect catalog or installed directly as an authored override. The
//! session layer reads `effects` and never needs to know which path filled it.
//!
//! Per-copy runtime state (pre-roll, playability, gating threshold) lives on
//! [`CardInstance`](super::CardInstance).

use serde::{Deserialize, Serialize};

use crate::effects::catalog;
use crate::properties::{
    DepthBand, EquipmentCategory, ExertionLevel, MethodType, PlayerStat, RiskLevel, Tier, Visibility,
};
use crate::rules::System;

/// Arena handle for a card definition.
///
/// Identifies the authored card ("Pointed Question"), not a copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Concrete numbers a card spends and produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEffects {
    /// Builder spent to play.
    pub cost: i32,
    /// Builder gained on play.
    pub generation: i32,
    /// Win resource gained.
    pub progress: i32,
    /// Loss resource gained.
    pub loss: i32,
    /// Understanding gained.
    pub understanding: i32,
    /// Stamina spent outside the engagement.
    pub stamina_cost: i32,
    /// Health lost outside the engagement.
    pub health_cost: i32,
    /// Coins spent outside the engagement.
    pub coin_cost: i32,
}

/// Static card definition for one system.
///
/// ## Example
///
/// ```
/// use engagement_engine::cards::{CardDefinition, CardId};
/// use engagement_engine::properties::Visibility;
/// use engagement_engine::systems::{Mental, MentalCategory, Method};
///
/// let card: CardDefinition<Mental> = CardDefinition::new(
///     CardId::new(1),
///     "trace_footprints",
///     "Trace Footprints",
///     3,
///     MentalCategory::Observational,
///     Method::Bold,
/// )
/// .with_visibility(Visibility::Obvious);
///
/// // Standard band: cost 1, progress 4 x 1.2, loss 1 + 1 (bold) + 1 (obvious)
/// assert_eq!(card.effects.cost, 1);
/// assert_eq!(card.effects.progress, 4);
/// assert_eq!(card.effects.loss, 3);
/// assert!(card.is_derived());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CardDefinition<S: System> {
    /// Arena handle.
    pub id: CardId,

    /// Stable content key used by deck definitions.
    pub key: String,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Fine-grained progression level.
    pub depth: u8,

    pub category: S::Category,

    pub approach: S::Approach,

    /// Stat whose depth bonus can extend access to this card.
    #[serde(default)]
    pub bound_stat: Option<PlayerStat>,

    #[serde(default)]
    pub risk: RiskLevel,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub exertion: ExertionLevel,

    #[serde(default)]
    pub equipment: EquipmentCategory,

    /// Numbers the session applies.
    pub effects: CardEffects,

    /// True once `with_effects` installed hand-tuned numbers.
    #[serde(default)]
    authored: bool,
}

impl<S: System> CardDefinition<S> {
    /// Create a definition with effects derived from its tags.
    #[must_use]
    pub fn new(
        id: CardId,
        key: impl Into<String>,
        name: impl Into<String>,
        depth: u8,
        category: S::Category,
        approach: S::Approach,
    ) -> Self {
        let mut card = Self {
            id,
            key: key.into(),
            name: name.into(),
            description: String::new(),
            depth,
            category,
            approach,
            bound_stat: None,
            risk: RiskLevel::default(),
            visibility: Visibility::default(),
            exertion: ExertionLevel::default(),
            equipment: EquipmentCategory::default(),
            effects: CardEffects::default(),
            authored: false,
        };
        card.rederive();
        card
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_stat(mut self, stat: PlayerStat) -> Self {
        self.bound_stat = Some(stat);
        self
    }

    #[must_use]
    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self.rederive();
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self.rederive();
        self
    }

    #[must_use]
    pub fn with_exertion(mut self, exertion: ExertionLevel) -> Self {
        self.exertion = exertion;
        self.rederive();
        self
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: EquipmentCategory) -> Self {
        self.equipment = equipment;
        self
    }

    /// Set the coin cost. Coins are never derived.
    #[must_use]
    pub fn with_coin_cost(mut self, coins: i32) -> Self {
        self.effects.coin_cost = coins;
        self
    }

    /// Install authored effects, replacing the derivation.
    #[must_use]
    pub fn with_effects(mut self, effects: CardEffects) -> Self {
        self.effects = effects;
        self.authored = true;
        self
    }

    /// Whether `effects` came from the catalog rather than an override.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        !self.authored
    }

    #[must_use]
    pub fn band(&self) -> DepthBand {
        DepthBand::from_depth(self.depth)
    }

    /// Tier that must be unlocked to play this card.
    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::for_depth(self.depth)
    }

    #[must_use]
    pub fn method_type(&self) -> MethodType {
        S::method_type(self.approach)
    }

    /// Whether the card needs gear at all.
    #[must_use]
    pub fn requires_equipment(&self) -> bool {
        self.equipment != EquipmentCategory::None
    }

    fn rederive(&mut self) {
        if self.authored {
            return;
        }
        let coins = self.effects.coin_cost;
        self.effects = catalog::derive(self);
        self.effects.coin_cost = coins;
    }
}
