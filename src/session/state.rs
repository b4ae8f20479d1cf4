//! Engagement session - the resource economy of one engagement.
//!
//! Tracks the builder (spent on cards), the win and loss resources, the
//! signed balance counter, understanding, leads, unlocked tiers and
//! per-category play counts.
//!
//! ## Invariants
//!
//! - Win and loss resources never drop below zero.
//! - Builder stays within `0..=S::BUILDER_MAX`.
//! - Balance is unbounded; only its band matters.
//! - The unlocked tier set only grows.
//!
//! ## Persistent Collections
//!
//! Tier set and category counts use `im` ordered collections, so cloning
//! a session for a what-if preview is O(1).

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{BalanceBand, EngineConfig};
use crate::rules::{EngagementOutcome, System};
use crate::properties::Tier;

/// Tiers unlocked by one check.
pub type UnlockedTiers = SmallVec<[Tier; 4]>;

/// Resource values at a moment in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub builder: i32,
    pub progress: i32,
    pub loss: i32,
    pub balance: i32,
    pub understanding: u32,
}

impl ResourceSnapshot {
    /// Field-wise difference `self - earlier`.
    #[must_use]
    pub fn delta_since(&self, earlier: &ResourceSnapshot) -> ResourceDelta {
        ResourceDelta {
            builder: self.builder - earlier.builder,
            progress: self.progress - earlier.progress,
            loss: self.loss - earlier.loss,
            balance: self.balance - earlier.balance,
            understanding: self.understanding as i64 - earlier.understanding as i64,
        }
    }
}

/// Change in each resource across a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDelta {
    pub builder: i32,
    pub progress: i32,
    pub loss: i32,
    pub balance: i32,
    pub understanding: i64,
}

/// Running state of one engagement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EngagementSession<S: System> {
    builder: i32,
    progress: i32,
    victory_threshold: i32,
    loss: i32,
    max_loss: i32,
    balance: i32,
    understanding: u32,
    leads: u32,
    turns: u32,
    unlocked_tiers: OrdSet<Tier>,
    category_counts: OrdMap<S::Category, u32>,
    config: EngineConfig,
}

fn clamp_threshold(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl<S: System> EngagementSession<S> {
    /// Start a session with tier 1 unlocked and the system's starting builder.
    #[must_use]
    pub fn new(victory_threshold: u32, max_loss: u32, config: EngineConfig) -> Self {
        let mut unlocked_tiers = OrdSet::new();
        unlocked_tiers.insert(Tier::FIRST);
        Self {
            builder: S::BUILDER_START,
            progress: 0,
            victory_threshold: clamp_threshold(victory_threshold),
            loss: 0,
            max_loss: clamp_threshold(max_loss),
            balance: 0,
            understanding: 0,
            leads: 0,
            turns: 0,
            unlocked_tiers,
            category_counts: OrdMap::new(),
            config,
        }
    }

    /// Carry understanding in from outside the session.
    #[must_use]
    pub fn with_understanding(mut self, understanding: u32) -> Self {
        self.understanding = understanding;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn builder(&self) -> i32 {
        self.builder
    }

    #[must_use]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    #[must_use]
    pub fn victory_threshold(&self) -> i32 {
        self.victory_threshold
    }

    #[must_use]
    pub fn loss(&self) -> i32 {
        self.loss
    }

    #[must_use]
    pub fn max_loss(&self) -> i32 {
        self.max_loss
    }

    #[must_use]
    pub fn balance(&self) -> i32 {
        self.balance
    }

    #[must_use]
    pub fn understanding(&self) -> u32 {
        self.understanding
    }

    #[must_use]
    pub fn leads(&self) -> u32 {
        self.leads
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Unlocked tiers, lowest first.
    pub fn unlocked_tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.unlocked_tiers.iter().copied()
    }

    #[must_use]
    pub fn is_tier_unlocked(&self, tier: Tier) -> bool {
        self.unlocked_tiers.contains(&tier)
    }

    /// Play counts per category.
    #[must_use]
    pub fn category_counts(&self) -> &OrdMap<S::Category, u32> {
        &self.category_counts
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            builder: self.builder,
            progress: self.progress,
            loss: self.loss,
            balance: self.balance,
            understanding: self.understanding,
        }
    }

    // === Queries ===

    /// True once progress reaches victory or loss reaches its maximum.
    #[must_use]
    pub fn should_end(&self) -> bool {
        self.progress >= self.victory_threshold || self.loss >= self.max_loss
    }

    /// How the session ended, if it has. Victory wins a tie.
    #[must_use]
    pub fn outcome(&self) -> Option<EngagementOutcome> {
        if self.progress >= self.victory_threshold {
            Some(EngagementOutcome::Victory)
        } else if self.loss >= self.max_loss {
            Some(EngagementOutcome::Defeat)
        } else {
            None
        }
    }

    /// Cards to draw on a recovery turn.
    #[must_use]
    pub fn get_draw_count(&self) -> u32 {
        self.config.draw_count_override.unwrap_or(S::BASE_DRAW_COUNT)
    }

    /// Deepest card depth the unlocked tiers give access to.
    #[must_use]
    pub fn get_unlocked_max_depth(&self) -> u8 {
        self.unlocked_tiers
            .get_max()
            .map_or(Tier::FIRST.max_depth(), |t| t.max_depth())
    }

    /// Times a category was played this session.
    #[must_use]
    pub fn get_category_count(&self, category: S::Category) -> u32 {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn balance_band(&self) -> BalanceBand {
        self.config.classify_balance(self.balance)
    }

    #[must_use]
    pub fn is_reckless_balance(&self) -> bool {
        self.balance_band() == BalanceBand::Reckless
    }

    #[must_use]
    pub fn is_overcautious_balance(&self) -> bool {
        self.balance_band() == BalanceBand::Overcautious
    }

    #[must_use]
    pub fn is_neutral_balance(&self) -> bool {
        self.balance_band() == BalanceBand::Neutral
    }

    /// Whether the builder covers `cost`.
    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        self.builder >= cost
    }

    // === Mutation ===

    pub fn apply_builder(&mut self, delta: i32) {
        self.builder = self.builder.saturating_add(delta).clamp(0, S::BUILDER_MAX);
    }

    pub fn apply_progress(&mut self, delta: i32) {
        self.progress = self.progress.saturating_add(delta).max(0);
    }

    pub fn apply_loss(&mut self, delta: i32) {
        self.loss = self.loss.saturating_add(delta).max(0);
    }

    pub fn shift_balance(&mut self, delta: i32) {
        self.balance = self.balance.saturating_add(delta);
    }

    pub fn gain_understanding(&mut self, delta: i32) {
        let next = i64::from(self.understanding) + i64::from(delta);
        self.understanding = next.clamp(0, i64::from(u32::MAX)) as u32;
    }

    pub fn add_leads(&mut self, leads: u32) {
        self.leads = self.leads.saturating_add(leads);
    }

    /// Spend every gathered lead.
    pub fn take_leads(&mut self) -> u32 {
        std::mem::take(&mut self.leads)
    }

    /// Reset loss to zero, returning the amount cleared.
    pub fn clear_loss(&mut self) -> i32 {
        std::mem::take(&mut self.loss)
    }

    pub fn record_category(&mut self, category: S::Category) {
        *self.category_counts.entry(category).or_insert(0) += 1;
    }

    pub(crate) fn next_turn(&mut self) {
        self.turns += 1;
    }

    /// Unlock every tier whose understanding threshold has been reached.
    ///
    /// Returns only tiers unlocked by this call.
    pub fn check_and_unlock_tiers(&mut self) -> UnlockedTiers {
        let mut unlocked = UnlockedTiers::new();
        for (tier, &threshold) in Tier::ALL.iter().zip(self.config.tier_thresholds.iter()) {
            if self.understanding >= threshold && self.unlocked_tiers.insert(*tier).is_none() {
                debug!(system = %S::KIND, %tier, understanding = self.understanding, "tier unlocked");
                unlocked.push(*tier);
            }
        }
        unlocked
    }
}
