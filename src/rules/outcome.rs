//! How an engagement finished.

use serde::{Deserialize, Serialize};

/// Result of a finished engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementOutcome {
    /// Win resource reached the victory threshold.
    Victory,
    /// Loss resource reached its maximum.
    Defeat,
    /// A goal card was played before either threshold fired.
    GoalCompleted,
    /// Ended by the caller with neither threshold reached.
    Abandoned,
}

impl EngagementOutcome {
    /// Whether the player came out ahead.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, EngagementOutcome::Victory | EngagementOutcome::GoalCompleted)
    }
}
