//! The `System` trait.
//!
//! Social, mental and physical engagements share one engine. Everything
//! that differs between them (categories, approaches, resource names,
//! the numeric tables behind derived effects, and how a turn resolves)
//! lives on a zero-sized marker type implementing `System`.
//!
//! ## Tables
//!
//! All numeric tables are indexed by [`DepthBand`]:
//! Foundation, Standard, Advanced, Master.
//!
//! ## Implementation Notes
//!
//! - Tables must be non-decreasing across bands, except `GENERATION`
//!   which only pays out on Foundation cards.
//! - `category_multiplier_pct` is a percentage (100 = x1.0) so progress
//!   derivation stays in integer arithmetic.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::properties::{DepthBand, MethodType};

/// Which of the three engagement systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemKind {
    Social,
    Mental,
    Physical,
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SystemKind::Social => "social",
            SystemKind::Mental => "mental",
            SystemKind::Physical => "physical",
        };
        f.write_str(name)
    }
}

/// When a played card's progress and loss land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Every resource applies as the card is played.
    Immediate,
    /// Builder and balance apply on play; progress and loss wait for the
    /// recovery turn that resolves the locked combo.
    Deferred,
}

/// What the recovery action does besides drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryRule {
    /// Clear the loss resource, paying for it with progress.
    ClearLoss,
    /// Draw extra cards for each lead gathered since the last recovery.
    SpendLeads,
    /// Resolve every locked card, then shuffle hand and played back in.
    ResolveCombo,
}

/// Four-entry numeric table keyed by depth band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTable(pub [i32; 4]);

impl BandTable {
    /// Value for a band.
    #[must_use]
    pub const fn get(&self, band: DepthBand) -> i32 {
        self.0[band.index()]
    }

    /// Whether values never decrease from Foundation to Master.
    #[must_use]
    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Per-system constants and modifier tables.
pub trait System:
    Copy + Clone + Debug + PartialEq + Eq + Default + Send + Sync + 'static
{
    /// Thematic category of a card.
    type Category: Copy + Eq + Ord + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Approach or delivery style of a card.
    type Approach: Copy + Eq + Ord + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    const KIND: SystemKind;

    /// Resource accumulated toward victory.
    const WIN_RESOURCE: &'static str;
    /// Resource accumulated toward defeat.
    const LOSS_RESOURCE: &'static str;
    /// Signed rhythm counter.
    const BALANCE_RESOURCE: &'static str;
    /// Spendable resource paying card costs.
    const BUILDER_RESOURCE: &'static str;

    /// Name of the play action.
    const PLAY_ACTION: &'static str;
    /// Name of the recovery action.
    const RECOVER_ACTION: &'static str;

    /// Builder cost by band.
    const COST: BandTable;
    /// Builder generated by band.
    const GENERATION: BandTable;
    /// Progress before the category multiplier.
    const PROGRESS_BASE: BandTable;
    /// Loss before the approach modifier.
    const RISK_BASE: BandTable;
    /// Understanding gained per play.
    const UNDERSTANDING: BandTable = BandTable([1, 1, 2, 3]);
    /// Leads gathered per play.
    const LEADS: BandTable = BandTable([0, 0, 0, 0]);

    /// Cards drawn per recovery turn.
    const BASE_DRAW_COUNT: u32;

    /// Builder at session start.
    const BUILDER_START: i32;
    /// Builder cap.
    const BUILDER_MAX: i32;

    const RESOLUTION: Resolution;
    const RECOVERY: RecoveryRule;

    /// Progress multiplier of a category, as a percentage.
    fn category_multiplier_pct(category: Self::Category) -> i32;

    /// System-neutral rank of an approach.
    fn method_type(approach: Self::Approach) -> MethodType;

    /// Risk added or removed by an approach.
    fn approach_risk_modifier(approach: Self::Approach) -> i32 {
        Self::method_type(approach).risk_modifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_table_get() {
        let table = BandTable([0, 2, 4, 6]);
        assert_eq!(table.get(DepthBand::Foundation), 0);
        assert_eq!(table.get(DepthBand::Master), 6);
    }

    #[test]
    fn test_band_table_monotonic() {
        assert!(BandTable([0, 2, 4, 6]).is_non_decreasing());
        assert!(BandTable([1, 1, 2, 3]).is_non_decreasing());
        assert!(!BandTable([1, 0, 0, 0]).is_non_decreasing());
    }

    #[test]
    fn test_system_kind_display() {
        assert_eq!(SystemKind::Physical.to_string(), "physical");
    }
}
