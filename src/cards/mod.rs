//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Arena handle for an authored card
//! - `CardDefinition`: Categorical tags plus derived or authored effects
//! - `CardEffects`: Concrete numbers a card spends and produces
//! - `CardInstance`: One copy in a session, with its pre-roll and context
//! - `CardRegistry`: Sole owner of a system's definitions

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardEffects, CardId};
pub use instance::{CardContext, CardInstance, CardKind};
pub use registry::CardRegistry;
