//! Durable storage for the registry.
//!
//! The registry persists as a JSON array of records, one per relic:
//!
//! ```json
//! [
//!   { "name": "Crown", "rarity": "Unique", "owner": "5f2e…" },
//!   { "name": "Dust", "rarity": "Common", "owner": null }
//! ]
//! ```
//!
//! "No owner" is native JSON `null`. Records are written sorted by name so
//! the document is deterministic for a given registry state.
//!
//! A missing file on load means "start empty" and is not an error. Malformed
//! content is: it decodes to [`RelicError::Corrupt`], never to a silently
//! empty registry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RelicError, Result};
use crate::relic::{OwnerId, Relic};

use super::{RegistryConfig, RelicRegistry};

/// One persisted registry entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct RelicRecord {
    name: String,
    rarity: String,
    owner: Option<OwnerId>,
}

/// File-backed store for a [`RelicRegistry`].
///
/// Load once at session start, save once at session end. Both calls are
/// plain synchronous I/O; a failed save leaves the in-memory registry
/// untouched.
#[derive(Clone, Debug)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store bound to a document path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a registry from the document, with the default configuration.
    ///
    /// # Errors
    ///
    /// [`RelicError::Store`] if the file exists but cannot be read,
    /// [`RelicError::Corrupt`] if it does not parse as a record array,
    /// [`RelicError::UnknownRarity`] or [`RelicError::InvalidName`] if a
    /// record fails model validation.
    pub fn load(&self) -> Result<RelicRegistry> {
        self.load_with_config(RegistryConfig::default())
    }

    /// Load a registry from the document with an explicit configuration.
    pub fn load_with_config(&self, config: RegistryConfig) -> Result<RelicRegistry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no registry document, starting empty");
                return Ok(RelicRegistry::with_config(config));
            }
            Err(err) => {
                return Err(RelicError::Store {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        let records: Vec<RelicRecord> =
            serde_json::from_str(&text).map_err(|err| RelicError::Corrupt {
                path: self.path.clone(),
                source: err,
            })?;

        let mut registry = RelicRegistry::with_config(config);
        for record in records {
            let rarity = record.rarity.parse()?;
            let relic = Relic::new(record.name, rarity)?;
            registry.register(relic.clone())?;
            if let Some(owner) = record.owner {
                registry.claim(&relic, owner)?;
            }
        }
        debug!(
            path = %self.path.display(),
            relics = registry.len(),
            "registry loaded"
        );
        Ok(registry)
    }

    /// Save a registry to the document, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// [`RelicError::Store`] on any I/O failure, [`RelicError::Encode`] if
    /// the registry state fails to serialize. The registry itself is
    /// untouched either way.
    pub fn save(&self, registry: &RelicRegistry) -> Result<()> {
        let mut records: Vec<RelicRecord> = registry
            .entries()
            .map(|(relic, owner)| RelicRecord {
                name: relic.name().to_string(),
                rarity: relic.rarity().name().to_string(),
                owner,
            })
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));

        let text = serde_json::to_string_pretty(&records).map_err(|err| RelicError::Encode {
            path: self.path.clone(),
            source: err,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| RelicError::Store {
                    path: self.path.clone(),
                    source: err,
                })?;
            }
        }
        fs::write(&self.path, text).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "registry save failed");
            RelicError::Store {
                path: self.path.clone(),
                source: err,
            }
        })?;
        debug!(
            path = %self.path.display(),
            relics = registry.len(),
            "registry saved"
        );
        Ok(())
    }
}
