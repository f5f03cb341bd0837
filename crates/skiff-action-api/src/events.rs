//! Node-change events.
//!
//! Actions announce node changes on a broadcast bus; interested components
//! subscribe independently. Emission is fire-and-forget: no receiver is a
//! normal condition, and send errors are ignored.

use serde::{Deserialize, Serialize};
use skiff_core::Node;
use tokio::sync::broadcast;

/// Wire identifier for node deletion events.
pub const FILES_NODE_DELETED: &str = "files:node:deleted";

/// An event describing a node change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FsEvent {
    /// A node was removed from its current view.
    ///
    /// Emitted even when the server merely moved the node to the trash:
    /// it is gone from the view it was deleted from either way, and trash
    /// consumers reload independently.
    NodeDeleted { node: Node },
}

impl FsEvent {
    /// Wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            FsEvent::NodeDeleted { .. } => FILES_NODE_DELETED,
        }
    }
}

/// Fire-and-forget broadcast bus for [`FsEvent`]s.
///
/// Cloning is cheap and every clone publishes to the same subscribers.
/// Safe to use from multiple outstanding operations.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<FsEvent>,
}

impl EventBus {
    /// Create a bus that buffers up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FsEvent> {
        self.tx.subscribe()
    }

    /// Emit an event.
    ///
    /// If no receiver is attached the event is dropped silently.
    pub fn emit(&self, event: FsEvent) {
        let _ = self.tx.send(event);
    }

    /// Number of live subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_core::NodeKind;

    fn deleted(source: &str) -> FsEvent {
        FsEvent::NodeDeleted {
            node: Node::new(source, "doc.txt", NodeKind::File),
        }
    }

    #[test]
    fn test_event_name() {
        assert_eq!(deleted("dav://a").name(), "files:node:deleted");
    }

    #[test]
    fn test_emit_and_receive() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.emit(deleted("dav://files/admin/doc.txt"));

        let FsEvent::NodeDeleted { node } = rx.try_recv().unwrap();
        assert_eq!(node.source, "dav://files/admin/doc.txt");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_emit_without_receiver_is_dropped() {
        let bus = EventBus::default();
        assert_eq!(bus.receiver_count(), 0);
        // Must not panic or error out.
        bus.emit(deleted("dav://a"));
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.clone().emit(deleted("dav://a"));
        assert!(rx.try_recv().is_ok());
    }
}
