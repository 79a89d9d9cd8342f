//! Registry listeners for the model phase.
//!
//! The registry is the canonical state and always fires first: a session
//! wires one model listener per event kind, then collaborators attach their
//! integration and messaging listeners behind it. After that, `publish` is
//! the single mutation entry point.
//!
//! The registry is shared as `Rc<RefCell<_>>`: the core assumes a single
//! logical command thread, and the session owns both bus and registry
//! explicitly rather than through globals.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{RelicError, Result};
use crate::registry::RelicRegistry;

use super::dispatcher::{Listener, LifecycleBus, Phase};
use super::event::EventKind;

/// Build the model-phase listener for one event kind.
///
/// - `Register` registers the event's relic.
/// - `Claim` claims it for the event's actor; publishing a claim without an
///   actor fails with [`RelicError::MissingActor`].
/// - `Destroy` destroys it.
///
/// The event payload is ignored; it exists for collaborator phases.
#[must_use]
pub fn model_listener(kind: EventKind, registry: Rc<RefCell<RelicRegistry>>) -> Listener {
    Box::new(move |event| -> Result<()> {
        let mut registry = registry.borrow_mut();
        match kind {
            EventKind::Register => registry.register(event.relic.clone()),
            EventKind::Claim => {
                let actor = event.actor.ok_or(RelicError::MissingActor { kind })?;
                registry.claim(&event.relic, actor)
            }
            EventKind::Destroy => registry.destroy(&event.relic),
        }
    })
}

/// Subscribe a registry's model listeners for all three event kinds.
///
/// Call once at session start, before any collaborator subscribes.
pub fn attach_model_listeners(bus: &mut LifecycleBus, registry: &Rc<RefCell<RelicRegistry>>) {
    for kind in EventKind::ALL {
        bus.subscribe(kind, Phase::Model, model_listener(kind, Rc::clone(registry)));
    }
}
