pub mod model;

pub use model::{ClientEvent, ClientId, ServerEvent, TARGET_NOT_CONNECTED};
