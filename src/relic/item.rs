//! The relic value type.
//!
//! A `Relic` is an immutable `(name, rarity)` pair. The name grammar is
//! enforced at construction and is the type's only failure mode; once built,
//! a relic never changes. A "renamed" or "re-tiered" relic is modeled as
//! destruction plus re-registration in the registry.

use serde::{Deserialize, Serialize};

use crate::error::{RelicError, Result};

use super::rarity::Rarity;

/// An immutable, named, rarity-tagged trackable entity.
///
/// Name grammar: non-empty; the first character is alphanumeric, an
/// apostrophe, a hyphen, or a comma; later characters additionally allow
/// spaces, interior only. Control characters, leading whitespace, and
/// trailing whitespace are rejected.
///
/// ## Example
///
/// ```
/// use relic_core::{Rarity, Relic};
///
/// let relic = Relic::new("Mace of Djibuttiron", Rarity::Unique).unwrap();
/// assert_eq!(relic.name(), "Mace of Djibuttiron");
/// assert!(Relic::new(" Leading whitespace", Rarity::Common).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relic {
    name: String,
    rarity: Rarity,
}

impl Relic {
    /// Create a relic, validating the name grammar.
    ///
    /// # Errors
    ///
    /// Returns [`RelicError::InvalidName`] if the name violates the grammar.
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(RelicError::InvalidName { name });
        }
        Ok(Self { name, rarity })
    }

    /// The relic's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The relic's rarity tier.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Point weight of this relic, from its rarity.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.rarity.points()
    }
}

impl std::fmt::Display for Relic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}

/// Check a name against the relic name grammar.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_head_char(first) {
        return false;
    }
    // Spaces are interior only: never first (checked above), never last.
    chars.all(|c| is_head_char(c) || c == ' ') && !name.ends_with(' ')
}

fn is_head_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-' || c == ','
}
