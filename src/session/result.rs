//! Per-turn and end-of-engagement results.
//!
//! These are the engine's only outbound data. The caller turns them into
//! narrative and UI; the engine itself never produces player-facing text.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::{ResourceDelta, ResourceSnapshot, UnlockedTiers};
use crate::core::InstanceId;
use crate::effects::EffectProjection;
use crate::rules::{EngagementOutcome, System, SystemKind};
use crate::zones::{MovedCards, PileCounts};

/// Why a play was refused. Refused plays change nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayRejection {
    /// The card is not in hand.
    NotInHand,
    /// The session already reached a threshold.
    SessionEnded,
    /// The card is deeper than the player can currently reach.
    DepthLocked { depth: u8, max_depth: i32 },
    /// The builder cannot cover the card's cost.
    InsufficientResource { need: i32, have: i32 },
    /// The copy refers to a definition the registry does not hold.
    UnknownDefinition,
}

/// What the turn was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Play(InstanceId),
    Recover,
}

/// Costs paid outside the engagement, reported for the caller to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicCosts {
    pub stamina: i32,
    pub health: i32,
    pub coins: i32,
}

impl StrategicCosts {
    pub(crate) fn add(&mut self, projection: &EffectProjection) {
        self.stamina += projection.stamina_cost;
        self.health += projection.health_cost;
        self.coins += projection.coin_cost;
    }
}

/// Result of one play or recovery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub action: TurnAction,

    /// Set when the action was refused; everything else is then empty.
    pub rejection: Option<PlayRejection>,

    /// Projection of the played card, for plays.
    pub projection: Option<EffectProjection>,

    /// Resources after the turn.
    pub resources: ResourceSnapshot,

    /// Change in each resource across the turn.
    pub changes: ResourceDelta,

    pub strategic: StrategicCosts,

    /// Cards drawn into hand.
    pub drawn: MovedCards,

    /// Gated cards released into hand.
    pub released: MovedCards,

    /// Cards trimmed from hand back to the deck.
    pub returned: MovedCards,

    /// Locked cards resolved by this turn.
    pub resolved: MovedCards,

    pub unlocked_tiers: UnlockedTiers,

    /// A goal card was played.
    pub goal_completed: bool,

    /// Set once a threshold fires.
    pub outcome: Option<EngagementOutcome>,
}

impl TurnResult {
    pub(crate) fn new(action: TurnAction, resources: ResourceSnapshot) -> Self {
        Self {
            action,
            rejection: None,
            projection: None,
            resources,
            changes: ResourceDelta::default(),
            strategic: StrategicCosts::default(),
            drawn: SmallVec::new(),
            released: SmallVec::new(),
            returned: SmallVec::new(),
            resolved: SmallVec::new(),
            unlocked_tiers: SmallVec::new(),
            goal_completed: false,
            outcome: None,
        }
    }

    pub(crate) fn rejected(action: TurnAction, resources: ResourceSnapshot, reason: PlayRejection) -> Self {
        Self {
            rejection: Some(reason),
            ..Self::new(action, resources)
        }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    #[must_use]
    pub fn ended(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Aggregate counters of a finished engagement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EngagementSummary<S: System> {
    pub system: SystemKind,
    pub engagement_id: String,
    pub outcome: EngagementOutcome,
    pub final_resources: ResourceSnapshot,
    pub category_counts: OrdMap<S::Category, u32>,
    pub turns: u32,
    /// Key of the goal card played, if any.
    pub goal: Option<String>,
    /// Cards left out of the deck for missing equipment.
    pub filtered_cards: Vec<String>,
    pub final_piles: PileCounts,
}
