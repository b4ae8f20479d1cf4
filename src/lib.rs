//! # engagement-engine
//!
//! A tactical card engagement engine. Three systems share one mechanical
//! core: Social (conversations), Mental (investigations) and Physical
//! (obstacles).
//!
//! ## Design Principles
//!
//! 1. **One Engine, Three Systems**: Every system is a `System` impl
//!    supplying resource names, effect tables and turn rules. The pile
//!    machinery, effect derivation and session loop are written once.
//!
//! 2. **Categorical Authoring**: Cards are authored with depth, category and
//!    approach. Numbers come from the catalog, never from card data.
//!
//! 3. **Reproducible**: Every pile owns a forked `GameRng`, so a seed fixes
//!    the whole engagement.
//!
//! ## Architecture
//!
//! - **Piles, not zones**: Deck, hand, played and gated piles are owned by a
//!   `SessionDeck`. Cards move between them and are never duplicated.
//!
//! - **Persistent counters**: Unlocked tiers and category counts live in
//!   `im` collections, so session snapshots stay cheap.
//!
//! - **Construction-time errors only**: Building a registry, deck or
//!   engagement returns `Result`. Turns never fail; misuse is reported in
//!   the `TurnResult`.
//!
//! ## Modules
//!
//! - `core`: Instance IDs, RNG, configuration, errors
//! - `properties`: Card property vocabulary shared by all systems
//! - `rules`: The `System` trait and engagement outcomes
//! - `systems`: Social, Mental and Physical
//! - `cards`: Card definitions, instances and the registry
//! - `effects`: Effect catalog and per-play projection
//! - `zones`: Piles and the session deck
//! - `content`: Engagement types, decks, goals and the player profile
//! - `session`: Session state and the turn loop

pub mod cards;
pub mod content;
pub mod core;
pub mod effects;
pub mod properties;
pub mod rules;
pub mod session;
pub mod systems;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{BalanceBand, EngineConfig, EngineError, GameRng, InstanceAllocator, InstanceId};

pub use crate::properties::{
    DepthBand, EquipmentCategory, EquipmentRequirement, ExertionLevel, MethodType, PlayerStat, RiskLevel, Tier,
    Visibility,
};

pub use crate::rules::{BandTable, EngagementOutcome, RecoveryRule, Resolution, System, SystemKind};

pub use crate::systems::{
    Delivery, Mental, MentalCategory, Method, Physical, PhysicalApproach, PhysicalCategory, Social, SocialCategory,
};

pub use crate::cards::{CardContext, CardDefinition, CardEffects, CardId, CardInstance, CardKind, CardRegistry};

pub use crate::effects::{project, ActionKind, EffectDrift, EffectProjection};

pub use crate::zones::{MovedCards, Pile, PileCounts, PileId, SessionDeck};

pub use crate::content::{
    BuiltDeck, EngagementDeck, EngagementType, ExertionState, GoalCard, PlayerModifiers, PlayerProfile,
};

pub use crate::session::{
    Engagement, EngagementSession, EngagementSummary, PlayRejection, ResourceDelta, ResourceSnapshot, StrategicCosts,
    TurnAction, TurnResult,
};
