//! Card instance identification.
//!
//! Every physical card copy in a session has a unique `InstanceId`. Piles
//! compare instances by this id, never by definition, so two copies of the
//! same authored card are still distinct.
//!
//! ```
//! use engagement_engine::core::{InstanceId, InstanceAllocator};
//!
//! let mut alloc = InstanceAllocator::new();
//! let a = alloc.next_id();
//! let b = alloc.next_id();
//! assert_ne!(a, b);
//! assert_eq!(a.raw(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic allocator for instance ids within one engagement.
#[derive(Clone, Debug, Default)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
