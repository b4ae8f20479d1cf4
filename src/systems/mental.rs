//! Mental engagements (investigations).
//!
//! Progress builds toward victory, Exposure toward defeat. Acting spends
//! Attention and gathers leads; observing turns those leads into extra draws.

use serde::{Deserialize, Serialize};

use crate::properties::MethodType;
use crate::rules::{BandTable, RecoveryRule, Resolution, System, SystemKind};

/// Mental system marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mental;

/// Investigative category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MentalCategory {
    Analytical,
    Physical,
    Observational,
    Social,
    Synthesis,
}

/// Investigative method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Method {
    Careful,
    Standard,
    Bold,
    Reckless,
}

impl System for Mental {
    type Category = MentalCategory;
    type Approach = Method;

    const KIND: SystemKind = SystemKind::Mental;

    const WIN_RESOURCE: &'static str = "progress";
    const LOSS_RESOURCE: &'static str = "exposure";
    const BALANCE_RESOURCE: &'static str = "balance";
    const BUILDER_RESOURCE: &'static str = "attention";

    const PLAY_ACTION: &'static str = "act";
    const RECOVER_ACTION: &'static str = "observe";

    const COST: BandTable = BandTable([0, 1, 3, 5]);
    const GENERATION: BandTable = BandTable([2, 0, 0, 0]);
    const PROGRESS_BASE: BandTable = BandTable([2, 4, 6, 8]);
    const RISK_BASE: BandTable = BandTable([0, 1, 2, 3]);
    // Master insights close the trail rather than open new ones.
    const LEADS: BandTable = BandTable([1, 2, 3, 0]);

    const BASE_DRAW_COUNT: u32 = 2;

    const BUILDER_START: i32 = 10;
    const BUILDER_MAX: i32 = 10;

    const RESOLUTION: Resolution = Resolution::Immediate;
    const RECOVERY: RecoveryRule = RecoveryRule::SpendLeads;

    fn category_multiplier_pct(category: MentalCategory) -> i32 {
        match category {
            MentalCategory::Analytical => 100,
            MentalCategory::Physical => 80,
            MentalCategory::Observational => 120,
            MentalCategory::Social => 60,
            MentalCategory::Synthesis => 150,
        }
    }

    fn method_type(approach: Method) -> MethodType {
        match approach {
            Method::Careful => MethodType::Careful,
            Method::Standard => MethodType::Standard,
            Method::Bold => MethodType::Bold,
            Method::Reckless => MethodType::Reckless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::DepthBand;

    #[test]
    fn test_method_modifiers() {
        assert_eq!(Mental::approach_risk_modifier(Method::Careful), -1);
        assert_eq!(Mental::approach_risk_modifier(Method::Reckless), 2);
    }

    #[test]
    fn test_leads_by_band() {
        assert_eq!(Mental::LEADS.get(DepthBand::Foundation), 1);
        assert_eq!(Mental::LEADS.get(DepthBand::Advanced), 3);
        assert_eq!(Mental::LEADS.get(DepthBand::Master), 0);
    }
}
