use crate::app::AppState;
use crate::registry::ConnectionHandle;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::{ClientEvent, ClientId, ServerEvent};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let client_id = ClientId::new();
    info!(client = %client_id, "new client connected");

    let (mut sender, mut receiver) = socket.split();
    let (handle, mut rx) = ConnectionHandle::new(client_id.clone());

    state.registry.register(handle.clone());
    handle.send(ServerEvent::YourId {
        id: client_id.clone(),
    });

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!("failed to serialize outbound event: {e}"),
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let router = state.router.clone();
        let handle = handle.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => router.route(&handle, event),
                        Err(e) => {
                            // Bad input closes nothing: report and keep the
                            // connection open.
                            warn!(client = %handle.id(), error = %e, "malformed message");
                            handle.send(ServerEvent::Error {
                                message: format!("Malformed message: {e}"),
                            });
                        }
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    state.registry.remove(&client_id);
    info!(client = %client_id, clients = state.registry.len(), "client disconnected");
}
