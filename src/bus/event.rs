//! Lifecycle event types.
//!
//! An event names a transition a relic undergoes. The bus routes events; it
//! never interprets the payload, which exists for the collaborator phases
//! (integration and messaging) only.

use serde::{Deserialize, Serialize};

use crate::relic::{OwnerId, Relic};

/// The transition a relic undergoes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The relic enters the registry, unowned.
    Register,
    /// An actor takes (or transfers) ownership of the relic.
    Claim,
    /// The relic and its ownership entry leave the registry.
    Destroy,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 3] = [EventKind::Register, EventKind::Claim, EventKind::Destroy];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Register => "Register",
            EventKind::Claim => "Claim",
            EventKind::Destroy => "Destroy",
        };
        f.write_str(name)
    }
}

/// A lifecycle event with contextual data.
///
/// ## Example
///
/// ```
/// use relic_core::{EventKind, OwnerId, Rarity, Relic, RelicEvent};
///
/// let crown = Relic::new("Crown", Rarity::Unique).unwrap();
/// let event = RelicEvent::new(EventKind::Claim, crown)
///     .with_actor(OwnerId::new_v4())
///     .with_payload("looted from the vault");
///
/// assert_eq!(event.kind, EventKind::Claim);
/// assert!(event.actor.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicEvent {
    /// The transition being published.
    pub kind: EventKind,

    /// The affected relic.
    pub relic: Relic,

    /// The acting identity, when the transition has one.
    /// Required for [`EventKind::Claim`]; optional otherwise.
    pub actor: Option<OwnerId>,

    /// Auxiliary data for collaborator phases. Model listeners ignore it.
    pub payload: Option<String>,
}

impl RelicEvent {
    /// Create an event with no actor and no payload.
    #[must_use]
    pub fn new(kind: EventKind, relic: Relic) -> Self {
        Self {
            kind,
            relic,
            actor: None,
            payload: None,
        }
    }

    /// Set the acting identity (builder pattern).
    #[must_use]
    pub fn with_actor(mut self, actor: OwnerId) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Set the auxiliary payload (builder pattern).
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}
