//! Engagement sessions.
//!
//! ## Key Types
//!
//! - `EngagementSession`: Resource economy and termination predicate
//! - `Engagement`: Turn loop over a session deck and a session
//! - `TurnResult`: What one turn changed
//! - `EngagementSummary`: Aggregate counters of a finished engagement

pub mod engagement;
pub mod result;
pub mod state;

pub use engagement::Engagement;
pub use result::{EngagementSummary, PlayRejection, StrategicCosts, TurnAction, TurnResult};
pub use state::{EngagementSession, ResourceDelta, ResourceSnapshot, UnlockedTiers};
