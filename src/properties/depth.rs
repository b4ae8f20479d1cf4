//! Depth bands and tiers.
//!
//! Every card carries a fine-grained depth (1, 2, 3, ...). Depth is grouped
//! into four bands that drive all derived numbers, and into four tiers that
//! gate access during a session. Tier *n* covers depths `2n - 1` and `2n`.

use serde::{Deserialize, Serialize};

/// Coarse grouping of card depth used by every effect table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepthBand {
    /// Depth 0 to 2.
    Foundation,
    /// Depth 3 to 4.
    Standard,
    /// Depth 5 to 6.
    Advanced,
    /// Depth 7 and above.
    Master,
}

impl DepthBand {
    /// All bands, lowest first.
    pub const ALL: [DepthBand; 4] = [
        DepthBand::Foundation,
        DepthBand::Standard,
        DepthBand::Advanced,
        DepthBand::Master,
    ];

    /// Band containing a depth.
    #[must_use]
    pub const fn from_depth(depth: u8) -> Self {
        match depth {
            0..=2 => DepthBand::Foundation,
            3..=4 => DepthBand::Standard,
            5..=6 => DepthBand::Advanced,
            _ => DepthBand::Master,
        }
    }

    /// Position of this band in a four-entry table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Coarse unlock band. Always in `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tier(u8);

impl Tier {
    /// Lowest tier, unlocked from the start of every session.
    pub const FIRST: Tier = Tier(1);

    /// Highest tier.
    pub const LAST: Tier = Tier(4);

    /// All tiers, lowest first.
    pub const ALL: [Tier; 4] = [Tier(1), Tier(2), Tier(3), Tier(4)];

    /// Create a tier, or `None` outside `1..=4`.
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        match n {
            1..=4 => Some(Tier(n)),
            _ => None,
        }
    }

    /// Tier a depth belongs to, clamped to the valid range.
    #[must_use]
    pub const fn for_depth(depth: u8) -> Self {
        let n = depth.saturating_add(1) / 2;
        if n < 1 {
            Tier(1)
        } else if n > 4 {
            Tier(4)
        } else {
            Tier(n)
        }
    }

    /// Raw tier number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Deepest card depth this tier grants access to.
    #[must_use]
    pub const fn max_depth(self) -> u8 {
        self.0 * 2
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier({})", self.0)
    }
}
