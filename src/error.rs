//! Error types for the crate.
//!
//! All fallible operations return [`RelicError`] through the crate-level
//! [`Result`] alias. Every variant is a local, recoverable condition reported
//! to the immediate caller; nothing in this crate panics on bad input.

use std::path::PathBuf;

use crate::bus::EventKind;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, RelicError>;

/// Errors that can occur in the relic model, bus, and store.
#[derive(Debug, thiserror::Error)]
pub enum RelicError {
    /// A relic name failed the name grammar at construction.
    #[error("invalid relic name: {name:?}")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A relic with the same name is already present in the registry.
    #[error("relic already registered: {name:?}")]
    AlreadyRegistered {
        /// The colliding name.
        name: String,
    },

    /// The relic is not present in the registry.
    #[error("relic not registered: {name:?}")]
    NotRegistered {
        /// The missing name.
        name: String,
    },

    /// Claim rejected under [`ClaimPolicy::RequireUnowned`].
    ///
    /// [`ClaimPolicy::RequireUnowned`]: crate::registry::ClaimPolicy::RequireUnowned
    #[error("relic already owned: {name:?}")]
    AlreadyOwned {
        /// The owned relic's name.
        name: String,
    },

    /// An event that requires an acting identity was published without one.
    #[error("{kind} event requires an actor")]
    MissingActor {
        /// The event kind that was missing its actor.
        kind: EventKind,
    },

    /// A persisted record named a rarity outside the closed set.
    #[error("unknown rarity: {value:?}")]
    UnknownRarity {
        /// The unrecognized rarity name.
        value: String,
    },

    /// The persisted document exists but could not be decoded.
    #[error("corrupt registry document at {path}")]
    Corrupt {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// Registry state failed to encode while saving.
    #[error("failed to encode registry document for {path}")]
    Encode {
        /// Destination path of the save.
        path: PathBuf,
        /// Underlying encode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The persisted document could not be read or written.
    #[error("registry store I/O failure at {path}")]
    Store {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
