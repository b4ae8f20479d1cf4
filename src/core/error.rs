//! Construction-boundary errors.
//!
//! Gameplay never fails: empty piles, misplayed cards and exhausted decks
//! are reported as data. `EngineError` only covers malformed input handed
//! to the engine while building registries, decks and sessions.

use thiserror::Error;

/// Errors raised while constructing engine state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("card already registered: {0}")]
    DuplicateCard(String),

    #[error("deck {deck} does not match engagement {engagement}")]
    DeckMismatch { engagement: String, deck: String },

    #[error("invalid engagement type {id}: {reason}")]
    InvalidEngagement { id: String, reason: String },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("card {0} has no equipment requirement")]
    NoEquipmentRequirement(String),
}
