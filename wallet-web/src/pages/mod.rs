//! Page modules

pub mod connector;

pub use connector::ConnectorPage;
