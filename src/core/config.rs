//! Engine tuning configuration.
//!
//! Content decides *what* an engagement contains; `EngineConfig` decides
//! how hard the numbers push. Every field has a default matching shipped
//! game balance, so most callers use `EngineConfig::default()` and override
//! one or two knobs with the `with_*` builders.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Balance band of the session's rhythm counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceBand {
    /// At or below the overcautious cut point.
    Overcautious,
    /// Strictly between the cut points.
    Neutral,
    /// At or above the reckless cut point.
    Reckless,
}

/// Engine tuning parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cards drawn per recovery turn. `None` uses the system's base draw.
    pub draw_count_override: Option<u32>,

    /// Balance at or above this value is Reckless.
    pub reckless_threshold: i32,

    /// Balance at or below this value is Overcautious.
    pub overcautious_threshold: i32,

    /// Extra loss added to a play whose projected balance is Reckless.
    pub reckless_loss_surcharge: i32,

    /// Understanding needed to unlock tiers 1 through 4.
    pub tier_thresholds: [u32; 4],

    /// Plays of one category before the specialization bonus applies.
    pub specialization_threshold: u32,

    /// Extra progress granted once a category is specialized.
    pub specialization_bonus: i32,

    /// Balance shift for playing a card, before the approach shift.
    pub play_balance: i32,

    /// Balance shift for a recovery turn.
    pub recover_balance: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            draw_count_override: None,
            reckless_threshold: 5,
            overcautious_threshold: -5,
            reckless_loss_surcharge: 1,
            tier_thresholds: [0, 6, 12, 18],
            specialization_threshold: 3,
            specialization_bonus: 1,
            play_balance: 1,
            recover_balance: -2,
        }
    }
}

impl EngineConfig {
    /// Override the per-turn draw count.
    #[must_use]
    pub fn with_draw_count(mut self, count: u32) -> Self {
        self.draw_count_override = Some(count);
        self
    }

    /// Set the balance cut points.
    #[must_use]
    pub fn with_balance_bands(mut self, overcautious: i32, reckless: i32) -> Self {
        self.overcautious_threshold = overcautious;
        self.reckless_threshold = reckless;
        self
    }

    /// Set the reckless loss surcharge.
    #[must_use]
    pub fn with_reckless_surcharge(mut self, surcharge: i32) -> Self {
        self.reckless_loss_surcharge = surcharge;
        self
    }

    /// Set the Understanding thresholds for tiers 1 through 4.
    #[must_use]
    pub fn with_tier_thresholds(mut self, thresholds: [u32; 4]) -> Self {
        self.tier_thresholds = thresholds;
        self
    }

    /// Set the specialization threshold and bonus.
    #[must_use]
    pub fn with_specialization(mut self, threshold: u32, bonus: i32) -> Self {
        self.specialization_threshold = threshold;
        self.specialization_bonus = bonus;
        self
    }

    /// Classify a balance value.
    ///
    /// Cut points are inclusive, so a balance exactly on a threshold
    /// belongs to the outer band.
    #[must_use]
    pub fn classify_balance(&self, balance: i32) -> BalanceBand {
        if balance >= self.reckless_threshold {
            BalanceBand::Reckless
        } else if balance <= self.overcautious_threshold {
            BalanceBand::Overcautious
        } else {
            BalanceBand::Neutral
        }
    }

    /// Check the configuration for contradictions.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.overcautious_threshold >= self.reckless_threshold {
            return Err(EngineError::InvalidConfig(format!(
                "overcautious threshold {} must be below reckless threshold {}",
                self.overcautious_threshold, self.reckless_threshold
            )));
        }
        if self.tier_thresholds[0] != 0 {
            return Err(EngineError::InvalidConfig(
                "tier 1 must unlock at zero understanding".into(),
            ));
        }
        if self.tier_thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(EngineError::InvalidConfig(format!(
                "tier thresholds must be non-decreasing: {:?}",
                self.tier_thresholds
            )));
        }
        if self.draw_count_override == Some(0) {
            return Err(EngineError::InvalidConfig("draw count override must be positive".into()));
        }
        if self.reckless_loss_surcharge < 0 || self.specialization_bonus < 0 {
            return Err(EngineError::InvalidConfig("bonuses and surcharges cannot be negative".into()));
        }
        Ok(())
    }
}
