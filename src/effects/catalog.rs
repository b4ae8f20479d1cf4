//! Effect catalog - numbers derived from categorical card tags.
//!
//! Every function here is pure: identical tags always give identical
//! numbers. That lets authored overrides be checked by recomputing the
//! derivation and diffing ([`verify`]).
//!
//! ## Derivations
//!
//! | Effect        | Formula                                                    |
//! |---------------|------------------------------------------------------------|
//! | cost          | `COST[band]`                                               |
//! | generation    | `GENERATION[band]`                                         |
//! | progress      | `PROGRESS_BASE[band] x multiplier(category)`, floored      |
//! | loss          | `max(0, RISK_BASE[band] + approach)` + visibility surcharge |
//! | understanding | `UNDERSTANDING[band]`                                      |
//! | stamina       | from exertion level                                        |
//! | health        | from risk level                                            |

use serde::Serialize;

use crate::cards::{CardDefinition, CardEffects};
use crate::properties::DepthBand;
use crate::rules::System;

/// Builder cost of a card at `depth`.
#[must_use]
pub fn cost_from_depth<S: System>(depth: u8) -> i32 {
    S::COST.get(DepthBand::from_depth(depth))
}

/// Builder generated by a card at `depth`.
#[must_use]
pub fn generation_from_depth<S: System>(depth: u8) -> i32 {
    S::GENERATION.get(DepthBand::from_depth(depth))
}

/// Win resource produced by a card.
#[must_use]
pub fn progress_from_properties<S: System>(depth: u8, category: S::Category) -> i32 {
    let base = S::PROGRESS_BASE.get(DepthBand::from_depth(depth));
    // Non-negative operands, so integer division floors.
    base * S::category_multiplier_pct(category) / 100
}

/// Loss resource produced by a card, before any visibility surcharge.
#[must_use]
pub fn risk_from_properties<S: System>(depth: u8, approach: S::Approach) -> i32 {
    let base = S::RISK_BASE.get(DepthBand::from_depth(depth));
    (base + S::approach_risk_modifier(approach)).max(0)
}

/// Understanding gained by playing a card at `depth`.
#[must_use]
pub fn understanding_from_depth<S: System>(depth: u8) -> i32 {
    S::UNDERSTANDING.get(DepthBand::from_depth(depth))
}

/// Leads gathered by playing a card at `depth`.
#[must_use]
pub fn leads_from_depth<S: System>(depth: u8) -> u32 {
    S::LEADS.get(DepthBand::from_depth(depth)).max(0) as u32
}

/// Derive the full effect set from a card's tags.
///
/// Coin cost is never derived and comes back as zero.
#[must_use]
pub fn derive<S: System>(card: &CardDefinition<S>) -> CardEffects {
    CardEffects {
        cost: cost_from_depth::<S>(card.depth),
        generation: generation_from_depth::<S>(card.depth),
        progress: progress_from_properties::<S>(card.depth, card.category),
        loss: risk_from_properties::<S>(card.depth, card.approach) + card.visibility.loss_surcharge(),
        understanding: understanding_from_depth::<S>(card.depth),
        stamina_cost: card.exertion.stamina_cost(),
        health_cost: card.risk.health_cost(),
        coin_cost: 0,
    }
}

/// One field where a card's effects disagree with the derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EffectDrift {
    pub field: &'static str,
    pub authored: i32,
    pub derived: i32,
}

/// Compare a card's effects against a fresh derivation.
///
/// Returns an empty list when they agree. Coin cost is skipped.
#[must_use]
pub fn verify<S: System>(card: &CardDefinition<S>) -> Vec<EffectDrift> {
    let derived = derive(card);
    let actual = card.effects;

    let fields = [
        ("cost", actual.cost, derived.cost),
        ("generation", actual.generation, derived.generation),
        ("progress", actual.progress, derived.progress),
        ("loss", actual.loss, derived.loss),
        ("understanding", actual.understanding, derived.understanding),
        ("stamina_cost", actual.stamina_cost, derived.stamina_cost),
        ("health_cost", actual.health_cost, derived.health_cost),
    ];

    fields
        .into_iter()
        .filter(|(_, a, d)| a != d)
        .map(|(field, authored, derived)| EffectDrift { field, authored, derived })
        .collect()
}
