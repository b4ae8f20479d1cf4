//! Effect catalog tests.
//!
//! These tests verify the derivation tables across all three systems:
//! - Deeper cards never cost less or produce less
//! - Riskier approaches never produce less loss
//! - Authored overrides are reported as drift

use engagement_engine::cards::{CardDefinition, CardEffects, CardId, CardRegistry};
use engagement_engine::effects::catalog;
use engagement_engine::properties::Visibility;
use engagement_engine::rules::System;
use engagement_engine::systems::{
    Delivery, Mental, MentalCategory, Method, Physical, PhysicalApproach, PhysicalCategory, Social, SocialCategory,
};
use proptest::prelude::*;

const SOCIAL_CATEGORIES: [SocialCategory; 5] = [
    SocialCategory::Expressive,
    SocialCategory::Probing,
    SocialCategory::Assertive,
    SocialCategory::Conciliatory,
    SocialCategory::Scheming,
];

const MENTAL_CATEGORIES: [MentalCategory; 5] = [
    MentalCategory::Analytical,
    MentalCategory::Physical,
    MentalCategory::Observational,
    MentalCategory::Social,
    MentalCategory::Synthesis,
];

const PHYSICAL_CATEGORIES: [PhysicalCategory; 5] = [
    PhysicalCategory::Force,
    PhysicalCategory::Precision,
    PhysicalCategory::Evasion,
    PhysicalCategory::Endurance,
    PhysicalCategory::Leverage,
];

fn assert_tables_ordered<S: System>() {
    assert!(S::COST.is_non_decreasing(), "{} cost", S::KIND);
    assert!(S::PROGRESS_BASE.is_non_decreasing(), "{} progress", S::KIND);
    assert!(S::RISK_BASE.is_non_decreasing(), "{} risk", S::KIND);
    assert!(S::UNDERSTANDING.is_non_decreasing(), "{} understanding", S::KIND);
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_tables_are_ordered() {
    assert_tables_ordered::<Social>();
    assert_tables_ordered::<Mental>();
    assert_tables_ordered::<Physical>();
}

/// Only foundation cards generate builder.
#[test]
fn test_generation_is_foundation_only() {
    assert!(catalog::generation_from_depth::<Social>(1) > 0);
    assert!(catalog::generation_from_depth::<Mental>(2) > 0);
    assert_eq!(catalog::generation_from_depth::<Physical>(3), 0);
    assert_eq!(catalog::generation_from_depth::<Physical>(10), 0);
}

/// Master-band Mental cards give no leads.
#[test]
fn test_master_gives_no_leads() {
    assert_eq!(catalog::leads_from_depth::<Mental>(1), 1);
    assert_eq!(catalog::leads_from_depth::<Mental>(8), 0);
    assert_eq!(catalog::leads_from_depth::<Social>(5), 0);
}

// =============================================================================
// Monotonicity
// =============================================================================

proptest! {
    /// Cost and progress never drop as depth grows.
    #[test]
    fn prop_social_depth_monotonic(a in 1u8..=10, b in 1u8..=10, c in 0usize..5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let category = SOCIAL_CATEGORIES[c];
        prop_assert!(catalog::cost_from_depth::<Social>(lo) <= catalog::cost_from_depth::<Social>(hi));
        prop_assert!(
            catalog::progress_from_properties::<Social>(lo, category)
                <= catalog::progress_from_properties::<Social>(hi, category)
        );
    }

    #[test]
    fn prop_mental_depth_monotonic(a in 1u8..=10, b in 1u8..=10, c in 0usize..5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let category = MENTAL_CATEGORIES[c];
        prop_assert!(catalog::cost_from_depth::<Mental>(lo) <= catalog::cost_from_depth::<Mental>(hi));
        prop_assert!(
            catalog::progress_from_properties::<Mental>(lo, category)
                <= catalog::progress_from_properties::<Mental>(hi, category)
        );
    }

    #[test]
    fn prop_physical_depth_monotonic(a in 1u8..=10, b in 1u8..=10, c in 0usize..5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let category = PHYSICAL_CATEGORIES[c];
        prop_assert!(catalog::cost_from_depth::<Physical>(lo) <= catalog::cost_from_depth::<Physical>(hi));
        prop_assert!(
            catalog::progress_from_properties::<Physical>(lo, category)
                <= catalog::progress_from_properties::<Physical>(hi, category)
        );
    }

    /// Riskier approaches never lower loss, at any depth.
    #[test]
    fn prop_approach_ordering(depth in 1u8..=10) {
        let social = [Delivery::Yielding, Delivery::Measured, Delivery::Standard, Delivery::Commanding]
            .map(|a| catalog::risk_from_properties::<Social>(depth, a));
        let mental = [Method::Careful, Method::Standard, Method::Bold, Method::Reckless]
            .map(|a| catalog::risk_from_properties::<Mental>(depth, a));
        let physical = [
            PhysicalApproach::Methodical,
            PhysicalApproach::Standard,
            PhysicalApproach::Aggressive,
            PhysicalApproach::Reckless,
        ]
        .map(|a| catalog::risk_from_properties::<Physical>(depth, a));

        for risks in [social, mental, physical] {
            prop_assert!(risks.windows(2).all(|w| w[0] <= w[1]), "{:?}", risks);
            prop_assert!(risks.iter().all(|&r| r >= 0));
        }
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// A derived card reproduces its tables exactly.
#[test]
fn test_derive_matches_tables() {
    let card: CardDefinition<Physical> = CardDefinition::new(
        CardId(0),
        "vault",
        "Vault the Wall",
        7,
        PhysicalCategory::Leverage,
        PhysicalApproach::Reckless,
    )
    .with_visibility(Visibility::Blatant);

    // Master band: progress 10 x 1.5, risk 4 + 3 plus blatant surcharge
    let effects = catalog::derive(&card);
    assert_eq!(effects.cost, 5);
    assert_eq!(effects.progress, 15);
    assert_eq!(effects.loss, 7 + Visibility::Blatant.loss_surcharge());
    assert_eq!(effects.understanding, 3);
    assert!(catalog::verify(&card).is_empty());
}

/// Hand-tuned numbers are kept but reported.
#[test]
fn test_registry_reports_drift() {
    let mut registry: CardRegistry<Social> = CardRegistry::new();
    let tuned = registry
        .register_with(|id| {
            let card = CardDefinition::new(id, "flatter", "Flatter", 2, SocialCategory::Expressive, Delivery::Measured);
            let effects = CardEffects { progress: 9, ..card.effects };
            card.with_effects(effects)
        })
        .unwrap();
    registry
        .register_with(|id| CardDefinition::new(id, "ask", "Ask", 1, SocialCategory::Probing, Delivery::Yielding))
        .unwrap();

    let drift = registry.verify_all();
    assert_eq!(drift.len(), 1);
    assert_eq!(drift[0].0, tuned);
    assert_eq!(drift[0].1[0].field, "progress");
    assert_eq!(drift[0].1[0].authored, 9);
    assert_eq!(drift[0].1[0].derived, 2);
}
