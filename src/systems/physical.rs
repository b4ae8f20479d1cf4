//! Physical engagements (challenges).
//!
//! Breakthrough builds toward victory, Danger toward defeat. Executed cards
//! lock into a combo that only lands when the player assesses.

use serde::{Deserialize, Serialize};

use crate::properties::MethodType;
use crate::rules::{BandTable, RecoveryRule, Resolution, System, SystemKind};

/// Physical system marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Physical;

/// Physical category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhysicalCategory {
    Force,
    Precision,
    Evasion,
    Endurance,
    Leverage,
}

/// Physical approach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhysicalApproach {
    Methodical,
    Standard,
    Aggressive,
    Reckless,
}

impl System for Physical {
    type Category = PhysicalCategory;
    type Approach = PhysicalApproach;

    const KIND: SystemKind = SystemKind::Physical;

    const WIN_RESOURCE: &'static str = "breakthrough";
    const LOSS_RESOURCE: &'static str = "danger";
    const BALANCE_RESOURCE: &'static str = "commitment";
    const BUILDER_RESOURCE: &'static str = "exertion";

    const PLAY_ACTION: &'static str = "execute";
    const RECOVER_ACTION: &'static str = "assess";

    const COST: BandTable = BandTable([0, 2, 3, 5]);
    const GENERATION: BandTable = BandTable([2, 0, 0, 0]);
    const PROGRESS_BASE: BandTable = BandTable([2, 4, 7, 10]);
    const RISK_BASE: BandTable = BandTable([1, 2, 3, 4]);

    const BASE_DRAW_COUNT: u32 = 3;

    const BUILDER_START: i32 = 0;
    const BUILDER_MAX: i32 = 10;

    const RESOLUTION: Resolution = Resolution::Deferred;
    const RECOVERY: RecoveryRule = RecoveryRule::ResolveCombo;

    fn category_multiplier_pct(category: PhysicalCategory) -> i32 {
        match category {
            PhysicalCategory::Force => 120,
            PhysicalCategory::Precision => 100,
            PhysicalCategory::Evasion => 60,
            PhysicalCategory::Endurance => 80,
            PhysicalCategory::Leverage => 150,
        }
    }

    fn method_type(approach: PhysicalApproach) -> MethodType {
        match approach {
            PhysicalApproach::Methodical => MethodType::Careful,
            PhysicalApproach::Standard => MethodType::Standard,
            PhysicalApproach::Aggressive => MethodType::Bold,
            PhysicalApproach::Reckless => MethodType::Reckless,
        }
    }

    fn approach_risk_modifier(approach: PhysicalApproach) -> i32 {
        match approach {
            PhysicalApproach::Reckless => 3,
            other => Self::method_type(other).risk_modifier(),
        }
    }
}
