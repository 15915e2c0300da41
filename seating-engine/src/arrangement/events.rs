//! Event fan-out for the arrangement store
//!
//! Events leave the store two ways, both synchronously after the mutation
//! has committed:
//! - registered listener callbacks (no ordering guarantee between listeners)
//! - a `tokio::sync::broadcast` channel for subscribers that drain later

use shared::arrangement::{ArrangementEvent, EventPayload};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Handle returned by [`EventBus::add_listener`]
pub type ListenerId = u64;

type Listener = Arc<dyn Fn(&ArrangementEvent) + Send + Sync>;

pub struct EventBus {
    event_tx: broadcast::Sender<ArrangementEvent>,
    listeners: HashMap<ListenerId, Listener>,
    next_listener_id: ListenerId,
    sequence: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_tx", &"<broadcast::Sender>")
            .field("listeners", &self.listeners.len())
            .field("sequence", &self.sequence)
            .finish()
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(capacity.max(1));
        Self {
            event_tx,
            listeners: HashMap::new(),
            next_listener_id: 1,
            sequence: 0,
        }
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<ArrangementEvent> {
        self.event_tx.subscribe()
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&ArrangementEvent) + Send + Sync + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.insert(id, Arc::new(listener));
        id
    }

    /// Returns false when the id was not registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Sequence number of the last emitted event (0 before the first)
    pub fn last_sequence(&self) -> u64 {
        self.sequence
    }

    /// Wrap the payload in an envelope and deliver it
    pub fn emit(&mut self, payload: EventPayload) -> ArrangementEvent {
        self.sequence += 1;
        let event = ArrangementEvent::new(self.sequence, payload);
        tracing::trace!(
            sequence = event.sequence,
            event_type = %event.event_type,
            "Emitting arrangement event"
        );

        for listener in self.listeners.values() {
            listener(&event);
        }

        // No subscribers is the normal case for a headless store
        if self.event_tx.receiver_count() > 0 && self.event_tx.send(event.clone()).is_err() {
            tracing::warn!("Event broadcast failed: no active receivers");
        }

        event
    }
}
