//! Relic registry: the ownership aggregate.
//!
//! The `RelicRegistry` maps each known relic to an optional owner. Relic
//! names are unique within a registry, so entries are keyed by name. All
//! mutators are synchronous and immediate; every failure is reported to the
//! caller, never auto-corrected.
//!
//! One registry is created per host session, populated from the store at
//! session start (see [`store::RegistryStore`]) and written back at session
//! end. Collaborators mutate it through the lifecycle bus rather than
//! calling the mutators directly, so integration and messaging listeners
//! observe every state change.

pub mod store;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{RelicError, Result};
use crate::relic::{OwnerId, Relic};

/// What `claim` does when the relic already has an owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClaimPolicy {
    /// Re-claiming overwrites the current owner. Matches the reference
    /// behavior, and allows ownership transfer without a destroy step.
    #[default]
    LastWins,
    /// Claiming an owned relic fails with [`RelicError::AlreadyOwned`].
    RequireUnowned,
}

/// Registry construction options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegistryConfig {
    /// Policy applied by [`RelicRegistry::claim`] on owned relics.
    pub claim_policy: ClaimPolicy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    relic: Relic,
    owner: Option<OwnerId>,
}

/// The aggregate of relics and their ownership.
///
/// ## Example
///
/// ```
/// use relic_core::{Rarity, Relic, RelicRegistry, OwnerId};
///
/// let mut registry = RelicRegistry::new();
/// let crown = Relic::new("Crown", Rarity::Unique).unwrap();
///
/// registry.register(crown.clone()).unwrap();
/// assert!(registry.contains(&crown));
/// assert_eq!(registry.owner_of(&crown).unwrap(), None);
///
/// let owner = OwnerId::new_v4();
/// registry.claim(&crown, owner).unwrap();
/// assert_eq!(registry.owner_of(&crown).unwrap(), Some(owner));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RelicRegistry {
    entries: FxHashMap<String, Entry>,
    config: RegistryConfig,
}

impl RelicRegistry {
    /// Create a new empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry with an explicit configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: FxHashMap::default(),
            config,
        }
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub const fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Register a relic with no owner.
    ///
    /// # Errors
    ///
    /// Returns [`RelicError::AlreadyRegistered`] if any relic with the same
    /// name is present, regardless of rarity.
    pub fn register(&mut self, relic: Relic) -> Result<()> {
        if self.entries.contains_key(relic.name()) {
            return Err(RelicError::AlreadyRegistered {
                name: relic.name().to_string(),
            });
        }
        debug!(relic = %relic, "relic registered");
        self.entries.insert(
            relic.name().to_string(),
            Entry {
                relic,
                owner: None,
            },
        );
        Ok(())
    }

    /// Assign an owner to a registered relic.
    ///
    /// Under the default [`ClaimPolicy::LastWins`] a later claim overwrites
    /// the current owner.
    ///
    /// # Errors
    ///
    /// Returns [`RelicError::NotRegistered`] if the relic is absent, or
    /// [`RelicError::AlreadyOwned`] under [`ClaimPolicy::RequireUnowned`]
    /// when an owner is already set.
    pub fn claim(&mut self, relic: &Relic, owner: OwnerId) -> Result<()> {
        let policy = self.config.claim_policy;
        let entry = self
            .entries
            .get_mut(relic.name())
            .ok_or_else(|| RelicError::NotRegistered {
                name: relic.name().to_string(),
            })?;
        if policy == ClaimPolicy::RequireUnowned && entry.owner.is_some() {
            return Err(RelicError::AlreadyOwned {
                name: relic.name().to_string(),
            });
        }
        debug!(relic = %relic, %owner, "relic claimed");
        entry.owner = Some(owner);
        Ok(())
    }

    /// Remove a relic and its ownership entry atomically.
    ///
    /// # Errors
    ///
    /// Returns [`RelicError::NotRegistered`] if the relic is absent.
    pub fn destroy(&mut self, relic: &Relic) -> Result<()> {
        if self.entries.remove(relic.name()).is_none() {
            return Err(RelicError::NotRegistered {
                name: relic.name().to_string(),
            });
        }
        debug!(relic = %relic, "relic destroyed");
        Ok(())
    }

    /// Current owner of a registered relic.
    ///
    /// A registered-but-unclaimed relic yields `Ok(None)`; that is distinct
    /// from the relic being absent, which is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RelicError::NotRegistered`] if the relic is absent.
    pub fn owner_of(&self, relic: &Relic) -> Result<Option<OwnerId>> {
        self.entries
            .get(relic.name())
            .map(|entry| entry.owner)
            .ok_or_else(|| RelicError::NotRegistered {
                name: relic.name().to_string(),
            })
    }

    /// Check whether a relic is registered.
    #[must_use]
    pub fn contains(&self, relic: &Relic) -> bool {
        self.entries.contains_key(relic.name())
    }

    /// Exact-match lookup by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Relic> {
        self.entries.get(name).map(|entry| &entry.relic)
    }

    /// Number of registered relics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every registered relic, unordered.
    pub fn all(&self) -> impl Iterator<Item = &Relic> {
        self.entries.values().map(|entry| &entry.relic)
    }

    /// Iterate over every entry as a (relic, owner) pair, unordered.
    pub fn entries(&self) -> impl Iterator<Item = (&Relic, Option<OwnerId>)> {
        self.entries.values().map(|entry| (&entry.relic, entry.owner))
    }

    /// Iterate over the claimed subset with each relic's owner.
    pub fn owned(&self) -> impl Iterator<Item = (&Relic, OwnerId)> {
        self.entries
            .values()
            .filter_map(|entry| entry.owner.map(|owner| (&entry.relic, owner)))
    }

    /// Total rarity points per owner.
    ///
    /// Owners holding no relics are absent from the map, never present
    /// with a zero total.
    #[must_use]
    pub fn points_by_owner(&self) -> FxHashMap<OwnerId, u32> {
        let mut totals: FxHashMap<OwnerId, u32> = FxHashMap::default();
        for (relic, owner) in self.owned() {
            *totals.entry(owner).or_default() += relic.points();
        }
        totals
    }
}

/// Equality is the relic set plus the owner mapping; configuration is not
/// part of registry identity.
impl PartialEq for RelicRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for RelicRegistry {}
