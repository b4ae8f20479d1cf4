//! Universal card property taxonomy shared by all three systems.

pub mod depth;
pub mod equipment;
pub mod universal;

pub use depth::{DepthBand, Tier};
pub use equipment::{EquipmentCategory, EquipmentRequirement};
pub use universal::{ExertionLevel, MethodType, PlayerStat, RiskLevel, Visibility};
