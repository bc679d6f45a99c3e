pub mod emitter;
pub mod event;
pub mod response;
pub mod server;
pub mod subscriber;
