//! # Connector Library
//!
//! Platform-independent core of the HashPack connector: the connection state
//! machine, transfer validation, and the seams the browser layer plugs into.
//!
//! ## Seams
//!
//! - [`WalletProvider`]: the injected wallet's `request({method, params})` entry point
//! - [`ConnectorView`]: the bound UI elements
//! - [`Scheduler`]: cancellable timers for message dismissal and balance refresh
//!
//! Everything runs on a single thread; the connector is shared through `Rc`.

pub mod config;
pub mod connector;
pub mod error;
pub mod provider;
pub mod scheduler;
pub mod state;
pub mod transfer;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::ConnectorConfig;
pub use connector::WalletConnector;
pub use error::{ConnectorError, Operation, ProviderError};
pub use provider::WalletProvider;
pub use scheduler::{Scheduler, TimerHandle, TimerRegistry};
pub use state::ConnectionState;
pub use transfer::{TransferError, TransferForm, TransferRequest};
pub use view::{ConnectorView, MessageId, MessageKind, StatusMessage, UiSnapshot};
