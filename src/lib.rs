//! # relic-core
//!
//! The data-and-event core of a relic-tracking host: a bounded collection of
//! uniquely-named, rarity-tagged relics, their ownership, and the ordered
//! propagation of lifecycle events to subscriber layers.
//!
//! ## Design Principles
//!
//! 1. **Explicit objects, no globals**: one [`RelicRegistry`] and one
//!    [`LifecycleBus`] are constructed per session and passed to every
//!    collaborator that needs them.
//!
//! 2. **Bus-mediated mutation**: collaborators publish events instead of
//!    calling registry mutators, so integration and messaging listeners
//!    observe every state change. The registry's own model listeners fire
//!    first on every publish.
//!
//! 3. **Fail-fast, recoverable errors**: every failure is a [`RelicError`]
//!    reported to the immediate caller; a failed model mutation stops
//!    delivery before any side effect runs.
//!
//! ## Modules
//!
//! - `relic`: [`Rarity`], [`Relic`], [`OwnerId`] value types
//! - `registry`: the [`RelicRegistry`] aggregate and its JSON store
//! - `bus`: the [`LifecycleBus`] dispatcher and model-phase adapters
//! - `error`: the crate error taxonomy
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use relic_core::{
//!     attach_model_listeners, EventKind, LifecycleBus, OwnerId, Rarity, Relic,
//!     RelicEvent, RelicRegistry,
//! };
//!
//! let registry = Rc::new(RefCell::new(RelicRegistry::new()));
//! let mut bus = LifecycleBus::new();
//! attach_model_listeners(&mut bus, &registry);
//!
//! let crown = Relic::new("Crown", Rarity::Unique)?;
//! bus.publish(&RelicEvent::new(EventKind::Register, crown.clone()))?;
//! bus.publish(&RelicEvent::new(EventKind::Claim, crown.clone()).with_actor(OwnerId::new_v4()))?;
//!
//! assert!(registry.borrow().owner_of(&crown)?.is_some());
//! # Ok::<(), relic_core::RelicError>(())
//! ```

pub mod bus;
pub mod error;
pub mod registry;
pub mod relic;

// Re-export commonly used types
pub use crate::bus::{
    attach_model_listeners, model_listener, EventKind, LifecycleBus, Listener, ListenerId, Phase,
    RelicEvent,
};
pub use crate::error::{RelicError, Result};
pub use crate::registry::{store::RegistryStore, ClaimPolicy, RegistryConfig, RelicRegistry};
pub use crate::relic::{is_valid_name, OwnerId, Rarity, Relic};
