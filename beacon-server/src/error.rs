use std::net::SocketAddr;
use thiserror::Error;

/// Failures of the server surface itself. Per-connection problems never
/// show up here: they are reported to the offending client or logged.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind signaling listener on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("signaling server terminated")]
    Serve(#[source] std::io::Error),
}
