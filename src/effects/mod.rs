//! Card effects: catalog derivations and per-play projection.
//!
//! - `catalog`: pure functions from categorical tags to numbers
//! - `projection`: a card's effect on a live session, with modifiers

pub mod catalog;
pub mod projection;

pub use catalog::EffectDrift;
pub use projection::{project, ActionKind, EffectProjection};
