//! Per-system rules and engagement outcomes.
//!
//! - `System`: constants and modifier tables of one engagement system
//! - `EngagementOutcome`: how a finished engagement ended

pub mod outcome;
pub mod system;

pub use outcome::EngagementOutcome;
pub use system::{BandTable, RecoveryRule, Resolution, System, SystemKind};
