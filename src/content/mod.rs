//! Authored engagement content and player inputs.

pub mod engagement;
pub mod player;

pub use engagement::{BuiltDeck, EngagementDeck, EngagementType, GoalCard};
pub use player::{ExertionState, PlayerModifiers, PlayerProfile};
