use crate::registry::{ClientRegistry, ConnectionHandle};
use beacon_core::{ClientEvent, ServerEvent};
use tracing::{debug, warn};

const PREVIEW_LEN: usize = 100;

/// Stateless address-based dispatcher: resolves the declared target id and
/// hands the stamped envelope to the target's send queue. It never looks at
/// payload content beyond picking the outbound label, and it never blocks
/// on the target — delivery is an unbounded-channel push.
#[derive(Clone)]
pub struct MessageRouter {
    registry: ClientRegistry,
}

impl MessageRouter {
    pub fn new(registry: ClientRegistry) -> Self {
        Self { registry }
    }

    /// Forwards `event` to its declared target, or reports the failure back
    /// to the sender. Successful forwards are not acknowledged.
    pub fn route(&self, sender: &ConnectionHandle, event: ClientEvent) {
        let target_id = event.target().clone();
        match self.registry.lookup(&target_id) {
            Some(target) => {
                debug!(
                    from = %sender.id(),
                    to = %target_id,
                    event = event.label(),
                    payload = %preview(event.payload()),
                    "forwarding",
                );
                target.send(event.into_forward(sender.id().clone()));
            }
            None => {
                // Expected whenever the target already disconnected or the
                // sender holds a stale id. The would-be target hears nothing.
                warn!(from = %sender.id(), to = %target_id, "target client not connected");
                sender.send(ServerEvent::target_not_connected());
            }
        }
    }
}

fn preview(payload: &str) -> String {
    if payload.len() > PREVIEW_LEN {
        let cut = payload
            .char_indices()
            .take_while(|(i, _)| *i < PREVIEW_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &payload[..cut])
    } else {
        payload.to_string()
    }
}
