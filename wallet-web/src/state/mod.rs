//! Reactive page state

pub mod connector;
