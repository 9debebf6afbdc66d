mod message_router;

pub use message_router::MessageRouter;
