//! The lifecycle bus.
//!
//! A direct synchronous dispatcher: no queueing, no buffering, no retries.
//! Listeners are grouped per (event kind, phase); `publish` walks the phases
//! in their fixed order and stops at the first listener error (fail-fast),
//! so a failed model mutation never reaches integration or messaging.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::Result;

use super::event::{EventKind, RelicEvent};

/// Ordered listener groups for an event kind.
///
/// Model performs the canonical registry mutation; integration applies
/// host-side side effects; messaging notifies users. Every publish fires
/// them strictly in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Canonical state mutation. Always first.
    Model,
    /// Host-side side effects.
    Integration,
    /// User notification. Always last.
    Messaging,
}

impl Phase {
    /// Firing order for every publish call.
    pub const ORDER: [Phase; 3] = [Phase::Model, Phase::Integration, Phase::Messaging];
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Model => "Model",
            Phase::Integration => "Integration",
            Phase::Messaging => "Messaging",
        };
        f.write_str(name)
    }
}

/// Identity of one subscription.
///
/// Allocated by the bus; each `subscribe` call gets a fresh id, so the same
/// closure registered twice is two distinct subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// A subscriber callback.
///
/// Receives the full event; returns `Err` to abort delivery of the current
/// publish call.
pub type Listener = Box<dyn FnMut(&RelicEvent) -> Result<()>>;

/// Publish/subscribe dispatcher for relic lifecycle events.
///
/// The bus holds no relic data; it is pure routing state, created once per
/// session alongside the registry. Within a phase, listeners fire in
/// ascending [`ListenerId`] order, which makes delivery deterministic for a
/// given registration sequence.
#[derive(Default)]
pub struct LifecycleBus {
    listeners: FxHashMap<(EventKind, Phase), Vec<(ListenerId, Listener)>>,
    next_id: u32,
}

impl LifecycleBus {
    /// Create a bus with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener for one (kind, phase) pair. Returns its id.
    pub fn subscribe(&mut self, kind: EventKind, phase: Phase, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        debug!(%kind, %phase, %id, "listener subscribed");
        self.listeners
            .entry((kind, phase))
            .or_default()
            .push((id, listener));
        id
    }

    /// Remove a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        self.listeners.retain(|_, group| {
            group.retain(|(lid, _)| {
                if *lid == id {
                    removed = true;
                    false
                } else {
                    true
                }
            });
            !group.is_empty()
        });
        removed
    }

    /// Deliver an event to every listener for its kind, phase by phase.
    ///
    /// # Errors
    ///
    /// The first listener error propagates unmodified and interrupts
    /// delivery to every as-yet-uninvoked listener of this call.
    pub fn publish(&mut self, event: &RelicEvent) -> Result<()> {
        debug!(kind = %event.kind, relic = %event.relic, "publishing");
        for phase in Phase::ORDER {
            let Some(group) = self.listeners.get_mut(&(event.kind, phase)) else {
                continue;
            };
            // Ids are allocated monotonically and pushed in order, so the
            // group is already sorted ascending by id.
            for (id, listener) in group.iter_mut() {
                if let Err(err) = listener(event) {
                    warn!(
                        kind = %event.kind,
                        %phase,
                        listener = %id,
                        error = %err,
                        "listener failed, aborting delivery"
                    );
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Total subscription count across all kinds and phases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Check if the bus has no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for LifecycleBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleBus")
            .field("subscriptions", &self.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
