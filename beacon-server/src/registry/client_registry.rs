use crate::registry::ConnectionHandle;
use beacon_core::ClientId;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::warn;

struct RegistryInner {
    clients: DashMap<ClientId, ConnectionHandle>,
}

/// The identifier → connection map shared by every routing operation.
///
/// An entry is present exactly while its connection is open: inserted after
/// id assignment, removed once on disconnect. Lookups clone the handle out
/// of the map so no shard lock is held across the subsequent send.
#[derive(Clone)]
pub struct ClientRegistry {
    inner: Arc<RegistryInner>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                clients: DashMap::new(),
            }),
        }
    }

    /// Registers a connection under its id. Ids are minted per connection,
    /// so a collision means the id generator misbehaved; we log it and let
    /// the last writer win rather than fail the new connection.
    pub fn register(&self, handle: ConnectionHandle) {
        let id = handle.id().clone();
        if self.inner.clients.insert(id.clone(), handle).is_some() {
            warn!(client = %id, "duplicate client id, replacing previous registration");
        }
    }

    pub fn lookup(&self, id: &ClientId) -> Option<ConnectionHandle> {
        self.inner.clients.get(id).map(|entry| entry.value().clone())
    }

    /// Idempotent: removing an id that was never registered (or already
    /// removed by a duplicate disconnect signal) is a no-op.
    pub fn remove(&self, id: &ClientId) {
        self.inner.clients.remove(id);
    }

    pub fn len(&self) -> usize {
        self.inner.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.clients.is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
