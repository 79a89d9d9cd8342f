//! Lifecycle event bus.
//!
//! Publish/subscribe routing for relic lifecycle events, with a fixed,
//! ordered set of listener phases per event kind:
//!
//! 1. [`Phase::Model`] — the registry's canonical state mutation
//! 2. [`Phase::Integration`] — host-side side effects
//! 3. [`Phase::Messaging`] — user notification
//!
//! Delivery is synchronous, deterministic, and fail-fast. See
//! [`LifecycleBus::publish`].

mod adapter;
mod dispatcher;
mod event;

pub use adapter::{attach_model_listeners, model_listener};
pub use dispatcher::{LifecycleBus, Listener, ListenerId, Phase};
pub use event::{EventKind, RelicEvent};
