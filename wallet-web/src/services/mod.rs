//! Browser services: wallet bridge, window events, timers and the backend probe

pub mod backend;
pub mod events;
pub mod hashpack;
pub mod timers;
