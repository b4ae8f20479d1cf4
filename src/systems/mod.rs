//! The three engagement systems.

pub mod mental;
pub mod physical;
pub mod social;

pub use mental::{Mental, MentalCategory, Method};
pub use physical::{Physical, PhysicalApproach, PhysicalCategory};
pub use social::{Delivery, Social, SocialCategory};
