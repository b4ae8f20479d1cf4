//! Effect projection - what a play would do to a session.
//!
//! `project` combines a card's effects with the live session (category
//! counts, balance) and the player's modifiers. It never mutates anything,
//! so callers can preview a card before committing to it.
//!
//! ## Formulas
//!
//! - builder: `-max(0, cost + cost_modifier) + generation`
//! - balance: action shift + approach shift
//! - progress: card progress, plus the specialization bonus once the
//!   category has been played `specialization_threshold` times
//! - loss: `max(0, loss + risk_modifier)`, plus the reckless surcharge when
//!   the projected balance lands in the Reckless band
//!
//! Under deferred resolution a play never ends the session, since progress
//! and loss only land on the next recovery.

use serde::{Deserialize, Serialize};

use super::catalog;
use crate::cards::CardDefinition;
use crate::content::PlayerModifiers;
use crate::core::BalanceBand;
use crate::rules::{Resolution, System};
use crate::session::EngagementSession;

/// Which side of the turn rhythm an action sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Speak, Act or Execute.
    Play,
    /// Listen, Observe or Assess.
    Recover,
}

/// Projected resource changes of one play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectProjection {
    /// Builder actually paid, after modifiers.
    pub cost_paid: i32,
    pub builder_change: i32,
    pub balance_change: i32,
    pub progress_change: i32,
    pub loss_change: i32,
    pub understanding_change: i32,
    pub leads_gained: u32,
    pub stamina_cost: i32,
    pub health_cost: i32,
    pub coin_cost: i32,
    /// Specialization bonus included in `progress_change`.
    pub specialized: bool,
    /// Reckless surcharge included in `loss_change`.
    pub reckless: bool,
    /// Whether this play ends the session. Always false under deferred resolution.
    pub ends_session: bool,
}

/// Project the effect of playing `card` in the current session.
#[must_use]
pub fn project<S: System>(
    card: &CardDefinition<S>,
    session: &EngagementSession<S>,
    modifiers: &PlayerModifiers,
    action: ActionKind,
) -> EffectProjection {
    let config = session.config();
    let effects = card.effects;

    let cost_paid = (effects.cost + modifiers.cost_modifier).max(0);
    let builder_change = effects.generation - cost_paid;

    let action_balance = match action {
        ActionKind::Play => config.play_balance,
        ActionKind::Recover => config.recover_balance,
    };
    let balance_change = action_balance + card.method_type().balance_shift();

    let specialized = session.get_category_count(card.category) >= config.specialization_threshold;
    let progress_change = effects.progress + if specialized { config.specialization_bonus } else { 0 };

    let projected_balance = session.balance().saturating_add(balance_change);
    let reckless = config.classify_balance(projected_balance) == BalanceBand::Reckless;
    let loss_change =
        (effects.loss + modifiers.risk_modifier).max(0) + if reckless { config.reckless_loss_surcharge } else { 0 };

    let ends_session = S::RESOLUTION == Resolution::Immediate
        && (session.progress().saturating_add(progress_change) >= session.victory_threshold()
            || session.loss().saturating_add(loss_change) >= session.max_loss());

    EffectProjection {
        cost_paid,
        builder_change,
        balance_change,
        progress_change,
        loss_change,
        understanding_change: effects.understanding,
        leads_gained: catalog::leads_from_depth::<S>(card.depth),
        stamina_cost: effects.stamina_cost,
        health_cost: effects.health_cost,
        coin_cost: effects.coin_cost,
        specialized,
        reckless,
        ends_session,
    }
}
