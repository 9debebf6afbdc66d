use crate::error::ServerError;
use crate::registry::ClientRegistry;
use crate::router::MessageRouter;
use crate::signaling::ws_handler;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub struct AppState {
    pub registry: ClientRegistry,
    pub router: MessageRouter,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let registry = ClientRegistry::new();
        let router = MessageRouter::new(registry.clone());
        Arc::new(Self { registry, router })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(bind: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|source| ServerError::Bind { addr: bind, source })?;

    info!("signaling relay listening on http://{bind}");

    axum::serve(listener, app(state))
        .await
        .map_err(ServerError::Serve)
}
