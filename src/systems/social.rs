//! Social engagements (conversations).
//!
//! Momentum builds toward victory, Doubt toward defeat. Initiative pays for
//! cards and Cadence tracks how hard the player is pushing. Listening clears
//! Doubt at the cost of Momentum.

use serde::{Deserialize, Serialize};

use crate::properties::MethodType;
use crate::rules::{BandTable, RecoveryRule, Resolution, System, SystemKind};

/// Social system marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Social;

/// Conversational category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SocialCategory {
    Expressive,
    Probing,
    Assertive,
    Conciliatory,
    Scheming,
}

/// How a line is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Delivery {
    Yielding,
    Measured,
    Standard,
    Commanding,
}

impl System for Social {
    type Category = SocialCategory;
    type Approach = Delivery;

    const KIND: SystemKind = SystemKind::Social;

    const WIN_RESOURCE: &'static str = "momentum";
    const LOSS_RESOURCE: &'static str = "doubt";
    const BALANCE_RESOURCE: &'static str = "cadence";
    const BUILDER_RESOURCE: &'static str = "initiative";

    const PLAY_ACTION: &'static str = "speak";
    const RECOVER_ACTION: &'static str = "listen";

    const COST: BandTable = BandTable([0, 2, 4, 6]);
    const GENERATION: BandTable = BandTable([1, 0, 0, 0]);
    const PROGRESS_BASE: BandTable = BandTable([2, 4, 6, 10]);
    const RISK_BASE: BandTable = BandTable([0, 1, 1, 2]);

    const BASE_DRAW_COUNT: u32 = 4;

    const BUILDER_START: i32 = 3;
    const BUILDER_MAX: i32 = 10;

    const RESOLUTION: Resolution = Resolution::Immediate;
    const RECOVERY: RecoveryRule = RecoveryRule::ClearLoss;

    fn category_multiplier_pct(category: SocialCategory) -> i32 {
        match category {
            SocialCategory::Expressive => 100,
            SocialCategory::Probing => 80,
            SocialCategory::Assertive => 150,
            SocialCategory::Conciliatory => 60,
            SocialCategory::Scheming => 120,
        }
    }

    fn method_type(approach: Delivery) -> MethodType {
        // A "standard" delivery is already a push in conversation.
        match approach {
            Delivery::Yielding => MethodType::Careful,
            Delivery::Measured => MethodType::Standard,
            Delivery::Standard => MethodType::Bold,
            Delivery::Commanding => MethodType::Reckless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_ranks() {
        assert_eq!(Social::method_type(Delivery::Yielding), MethodType::Careful);
        assert_eq!(Social::method_type(Delivery::Standard), MethodType::Bold);
        assert_eq!(Social::approach_risk_modifier(Delivery::Commanding), 2);
        assert_eq!(Social::approach_risk_modifier(Delivery::Measured), 0);
    }

    #[test]
    fn test_assertive_is_strongest() {
        assert_eq!(Social::category_multiplier_pct(SocialCategory::Assertive), 150);
        assert_eq!(Social::category_multiplier_pct(SocialCategory::Conciliatory), 60);
    }
}
