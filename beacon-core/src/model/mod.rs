mod client;
mod event;

pub use client::ClientId;
pub use event::{ClientEvent, ServerEvent, TARGET_NOT_CONNECTED};
