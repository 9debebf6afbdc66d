mod client_registry;
mod connection_handle;

pub use client_registry::ClientRegistry;
pub use connection_handle::ConnectionHandle;
