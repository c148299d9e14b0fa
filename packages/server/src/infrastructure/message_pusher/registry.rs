//! Connection registry.
//!
//! Capacity is not enforced here; seats are the room's concern.

use std::collections::HashMap;

use crate::domain::{ConnectionId, PusherChannel};

#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, PusherChannel>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, connection_id: ConnectionId, sender: PusherChannel) {
        self.connections.insert(connection_id, sender);
    }

    /// Returns whether the connection was present
    pub fn unregister(&mut self, connection_id: &ConnectionId) -> bool {
        self.connections.remove(connection_id).is_some()
    }

    pub fn get(&self, connection_id: &ConnectionId) -> Option<&PusherChannel> {
        self.connections.get(connection_id)
    }

    /// Connections whose writer is still draining their channel.
    ///
    /// A closed channel means the socket is closing or already gone, so it
    /// is skipped even if it has not been unregistered yet.
    pub fn open_connections(&self) -> impl Iterator<Item = (&ConnectionId, &PusherChannel)> {
        self.connections
            .iter()
            .filter(|(_, sender)| !sender.is_closed())
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
