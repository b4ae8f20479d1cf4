//! Piles and the session deck.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered copies with shuffle, draw and lazy pre-rolls
//! - `SessionDeck`: Deck, hand, played and gated piles of one engagement
//! - `PileId`: Names one of the four piles

pub mod deck;
pub mod pile;

pub use deck::{MovedCards, PileCounts, PileId, SessionDeck};
pub use pile::{Pile, PRE_ROLL_MAX, PRE_ROLL_MIN};
