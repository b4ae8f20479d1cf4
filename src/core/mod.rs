//! Core types: RNG, instance IDs, configuration, errors.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::{BalanceBand, EngineConfig};
pub use error::EngineError;
pub use ids::{InstanceAllocator, InstanceId};
pub use rng::GameRng;
