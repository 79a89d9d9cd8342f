//! Rarity tiers and their point values.
//!
//! Rarity is a closed set of five tiers. Each tier carries a fixed point
//! weight on a Fibonacci-like curve (1, 2, 3, 5, 8) so that higher tiers
//! are rewarded disproportionately. The set and the weights are immutable
//! for the life of the process.

use serde::{Deserialize, Serialize};

/// One of the five fixed rarity tiers.
///
/// ## Example
///
/// ```
/// use relic_core::Rarity;
///
/// assert_eq!(Rarity::Unique.points(), 8);
/// assert_eq!(Rarity::parse("legendary"), Some(Rarity::Legendary));
/// assert_eq!(Rarity::parse("mythic"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    /// Baseline tier, worth 1 point.
    Common,
    /// Worth 2 points.
    Rare,
    /// Worth 3 points.
    Epic,
    /// Worth 5 points.
    Legendary,
    /// Top tier, worth 8 points.
    Unique,
}

impl Rarity {
    /// Every tier, lowest to highest.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Unique,
    ];

    /// Point weight of this tier.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 5,
            Rarity::Unique => 8,
        }
    }

    /// Canonical name of this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unique => "Unique",
        }
    }

    /// Case-insensitive exact match against the canonical tier names.
    ///
    /// No partial or fuzzy matching; returns `None` for anything outside
    /// the closed set.
    #[must_use]
    pub fn parse(value: &str) -> Option<Rarity> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Rarity {
    type Err = crate::RelicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::parse(s).ok_or_else(|| crate::RelicError::UnknownRarity {
            value: s.to_string(),
        })
    }
}
