//! UI Components

pub mod status_messages;

pub use status_messages::StatusMessages;
