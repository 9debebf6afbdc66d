use beacon_core::{ClientId, ServerEvent};
use tokio::sync::mpsc;
use tracing::debug;

/// Send half of one attached client.
///
/// The receive half is drained by that client's writer task, so events
/// pushed here reach the peer in FIFO order. Sending is fire-and-forget:
/// once the socket is gone the channel is closed and events are dropped.
#[derive(Clone)]
pub struct ConnectionHandle {
    id: ClientId,
    tx: mpsc::UnboundedSender<ServerEvent>,
}

impl ConnectionHandle {
    pub fn new(id: ClientId) -> (Self, mpsc::UnboundedReceiver<ServerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { id, tx }, rx)
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn send(&self, event: ServerEvent) {
        if self.tx.send(event).is_err() {
            debug!(client = %self.id, "dropping event for closed connection");
        }
    }
}
