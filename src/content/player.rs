//! Player-side inputs to an engagement.
//!
//! The engine never computes player state. Callers hand it a
//! `PlayerProfile` with plain numbers: cost and risk modifiers, per-stat
//! depth bonuses, owned equipment and accumulated understanding.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::properties::{EquipmentCategory, PlayerStat};

/// How worn down the player is, from a resource's remaining share.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExertionState {
    Fresh,
    #[default]
    Normal,
    Fatigued,
    Exhausted,
    Desperate,
}

impl ExertionState {
    /// Classify `current` out of `max`.
    ///
    /// Above 80% is Fresh, above 50% Normal, above 30% Fatigued,
    /// above 10% Exhausted, anything else Desperate.
    #[must_use]
    pub fn from_resource(current: u32, max: u32) -> Self {
        if max == 0 {
            return ExertionState::Desperate;
        }
        let percent = u64::from(current.min(max)) * 100 / u64::from(max);
        match percent {
            81.. => ExertionState::Fresh,
            51..=80 => ExertionState::Normal,
            31..=50 => ExertionState::Fatigued,
            11..=30 => ExertionState::Exhausted,
            _ => ExertionState::Desperate,
        }
    }

    /// Change to every card's builder cost.
    #[must_use]
    pub const fn cost_modifier(self) -> i32 {
        match self {
            ExertionState::Fresh => -1,
            ExertionState::Normal => 0,
            ExertionState::Fatigued => 1,
            ExertionState::Exhausted => 2,
            ExertionState::Desperate => 3,
        }
    }

    /// Change to every card's loss.
    #[must_use]
    pub const fn risk_modifier(self) -> i32 {
        match self {
            ExertionState::Fresh | ExertionState::Normal | ExertionState::Fatigued => 0,
            ExertionState::Exhausted => 1,
            ExertionState::Desperate => 2,
        }
    }
}

/// Numeric adjustments applied to every card the player plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerModifiers {
    /// Added to builder cost, floored so a card never pays out.
    pub cost_modifier: i32,
    /// Added to loss, floored at zero.
    pub risk_modifier: i32,
}

impl PlayerModifiers {
    #[must_use]
    pub fn new(cost_modifier: i32, risk_modifier: i32) -> Self {
        Self {
            cost_modifier,
            risk_modifier,
        }
    }

    /// Modifiers implied by an exertion state.
    #[must_use]
    pub fn from_exertion(state: ExertionState) -> Self {
        Self::new(state.cost_modifier(), state.risk_modifier())
    }
}

/// Everything the engine needs to know about the player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub modifiers: PlayerModifiers,

    /// Extra accessible depth for cards bound to a stat.
    #[serde(default)]
    pub depth_bonus: FxHashMap<PlayerStat, i32>,

    /// Gear the player carries.
    #[serde(default)]
    pub equipment: FxHashSet<EquipmentCategory>,

    /// Understanding carried into the engagement.
    #[serde(default)]
    pub understanding: u32,
}

impl PlayerProfile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: PlayerModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_depth_bonus(mut self, stat: PlayerStat, bonus: i32) -> Self {
        self.depth_bonus.insert(stat, bonus);
        self
    }

    #[must_use]
    pub fn with_equipment(mut self, category: EquipmentCategory) -> Self {
        self.equipment.insert(category);
        self
    }

    #[must_use]
    pub fn with_understanding(mut self, understanding: u32) -> Self {
        self.understanding = understanding;
        self
    }

    /// Depth bonus for a stat, zero when none is recorded.
    #[must_use]
    pub fn depth_bonus_for(&self, stat: Option<PlayerStat>) -> i32 {
        stat.and_then(|s| self.depth_bonus.get(&s).copied()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exertion_boundaries() {
        assert_eq!(ExertionState::from_resource(100, 100), ExertionState::Fresh);
        assert_eq!(ExertionState::from_resource(81, 100), ExertionState::Fresh);
        assert_eq!(ExertionState::from_resource(80, 100), ExertionState::Normal);
        assert_eq!(ExertionState::from_resource(51, 100), ExertionState::Normal);
        assert_eq!(ExertionState::from_resource(50, 100), ExertionState::Fatigued);
        assert_eq!(ExertionState::from_resource(31, 100), ExertionState::Fatigued);
        assert_eq!(ExertionState::from_resource(30, 100), ExertionState::Exhausted);
        assert_eq!(ExertionState::from_resource(11, 100), ExertionState::Exhausted);
        assert_eq!(ExertionState::from_resource(10, 100), ExertionState::Desperate);
        assert_eq!(ExertionState::from_resource(0, 100), ExertionState::Desperate);
    }

    #[test]
    fn test_exertion_zero_max() {
        assert_eq!(ExertionState::from_resource(0, 0), ExertionState::Desperate);
    }

    #[test]
    fn test_modifiers_from_exertion() {
        let mods = PlayerModifiers::from_exertion(ExertionState::Exhausted);
        assert_eq!(mods, PlayerModifiers::new(2, 1));
        assert_eq!(PlayerModifiers::from_exertion(ExertionState::Normal), PlayerModifiers::default());
    }

    #[test]
    fn test_depth_bonus_lookup() {
        let player = PlayerProfile::new().with_depth_bonus(PlayerStat::Insight, 2);
        assert_eq!(player.depth_bonus_for(Some(PlayerStat::Insight)), 2);
        assert_eq!(player.depth_bonus_for(Some(PlayerStat::Cunning)), 0);
        assert_eq!(player.depth_bonus_for(None), 0);
    }

    #[test]
    fn test_profile_serialization() {
        let player = PlayerProfile::new()
            .with_equipment(EquipmentCategory::Light)
            .with_understanding(7);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: PlayerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
