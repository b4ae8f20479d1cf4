//! Cross-system card properties.
//!
//! These tags mean the same thing on a social, mental or physical card.
//! Each maps to a small derived number so content never hand-tunes them.

use serde::{Deserialize, Serialize};

/// Player stat a card can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerStat {
    Insight,
    Rapport,
    Authority,
    Diplomacy,
    Cunning,
}

/// How dangerous a card is to the body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    Minimal,
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    /// Health lost when the card resolves.
    #[must_use]
    pub const fn health_cost(self) -> i32 {
        match self {
            RiskLevel::Minimal | RiskLevel::Low | RiskLevel::Moderate => 0,
            RiskLevel::High => 1,
            RiskLevel::Extreme => 2,
        }
    }
}

/// How conspicuous a card is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Subtle,
    Noticeable,
    Obvious,
    Blatant,
}

impl Visibility {
    /// Extra loss resource generated by being noticed.
    #[must_use]
    pub const fn loss_surcharge(self) -> i32 {
        match self {
            Visibility::Hidden | Visibility::Subtle | Visibility::Noticeable => 0,
            Visibility::Obvious => 1,
            Visibility::Blatant => 2,
        }
    }
}

/// Physical effort a card demands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExertionLevel {
    #[default]
    Minimal,
    Light,
    Moderate,
    Heavy,
    Extreme,
}

impl ExertionLevel {
    /// Stamina spent when the card resolves.
    #[must_use]
    pub const fn stamina_cost(self) -> i32 {
        match self {
            ExertionLevel::Minimal | ExertionLevel::Light => 0,
            ExertionLevel::Moderate => 1,
            ExertionLevel::Heavy => 2,
            ExertionLevel::Extreme => 3,
        }
    }
}

/// System-neutral rank of an approach, from cautious to reckless.
///
/// Every system's approach enum maps onto one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MethodType {
    Careful,
    #[default]
    Standard,
    Bold,
    Reckless,
}

impl MethodType {
    /// Shift applied to the balance counter when a card of this rank is played.
    #[must_use]
    pub const fn balance_shift(self) -> i32 {
        match self {
            MethodType::Careful => -1,
            MethodType::Standard => 0,
            MethodType::Bold => 1,
            MethodType::Reckless => 2,
        }
    }

    /// Default risk modifier for this rank.
    #[must_use]
    pub const fn risk_modifier(self) -> i32 {
        self.balance_shift()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_cost() {
        assert_eq!(RiskLevel::Moderate.health_cost(), 0);
        assert_eq!(RiskLevel::High.health_cost(), 1);
        assert_eq!(RiskLevel::Extreme.health_cost(), 2);
    }

    #[test]
    fn test_visibility_surcharge() {
        assert_eq!(Visibility::default().loss_surcharge(), 0);
        assert_eq!(Visibility::Obvious.loss_surcharge(), 1);
        assert_eq!(Visibility::Blatant.loss_surcharge(), 2);
    }

    #[test]
    fn test_stamina_cost() {
        assert_eq!(ExertionLevel::Light.stamina_cost(), 0);
        assert_eq!(ExertionLevel::Moderate.stamina_cost(), 1);
        assert_eq!(ExertionLevel::Extreme.stamina_cost(), 3);
    }

    #[test]
    fn test_method_shift_is_monotonic() {
        let ranks = [MethodType::Careful, MethodType::Standard, MethodType::Bold, MethodType::Reckless];
        for pair in ranks.windows(2) {
            assert!(pair[0].balance_shift() < pair[1].balance_shift());
        }
    }
}
