mod app;
mod error;
mod registry;
mod router;
mod signaling;

pub use app::{AppState, app, serve};
pub use error::ServerError;
pub use registry::{ClientRegistry, ConnectionHandle};
pub use router::MessageRouter;
pub use signaling::ws_handler;
