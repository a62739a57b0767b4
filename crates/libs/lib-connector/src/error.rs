//! # Connector Error Types
//!
//! Every failure the connector can surface, categorized by source:
//!
//! - **Preconditions**: [`ProviderMissing`](ConnectorError::ProviderMissing),
//!   [`NotConnected`](ConnectorError::NotConnected) and
//!   [`Transfer`](ConnectorError::Transfer) form validation. These never reach
//!   the wallet.
//! - **User rejection**: [`Rejected`](ConnectorError::Rejected), the wallet's
//!   code 4001 on an account request.
//! - **Provider failure**: [`Provider`](ConnectorError::Provider), reported
//!   verbatim with the wallet's message. Balance and transfer rejections land
//!   here too.
//! - **Wrong network**: [`WrongNetwork`](ConnectorError::WrongNetwork), a
//!   successful account request on the wrong ledger.
//!
//! The `Display` text of each variant is the message shown to the user.
//!
//! ```rust
//! use lib_connector::error::{ConnectorError, Operation, ProviderError};
//!
//! let err = ConnectorError::from_provider(
//!     Operation::Connect,
//!     ProviderError::with_code(4001, "User rejected the request."),
//! );
//! assert_eq!(err.to_string(), "Connection request was rejected.");
//! ```

use shared::USER_REJECTED_CODE;
use thiserror::Error;

use crate::transfer::TransferError;

/// Error object reported by the wallet provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

/// Wallet operation a provider error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Connect,
    Balance,
    Transfer,
}

impl Operation {
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Operation::Connect => "Failed to connect",
            Operation::Balance => "Failed to get balance",
            Operation::Transfer => "Transaction failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectorError {
    #[error("{wallet} wallet not found. Please install it first.")]
    ProviderMissing { wallet: String },

    #[error("Please connect to {wallet} first.")]
    NotConnected { wallet: String },

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error(
        "Connected to {}. Please switch to {} in {}.",
        .actual,
        .required.to_uppercase(),
        .wallet
    )]
    WrongNetwork {
        actual: String,
        required: String,
        wallet: String,
    },

    #[error("Connection request was rejected.")]
    Rejected,

    #[error("{}: {}", .operation.failure_prefix(), .error)]
    Provider {
        operation: Operation,
        error: ProviderError,
    },

    #[error("Invalid connector configuration: {0}")]
    Config(String),
}

impl ConnectorError {
    /// Classify a provider error. Only a rejected account request gets its
    /// own text; other operations show the wallet's message.
    pub fn from_provider(operation: Operation, error: ProviderError) -> Self {
        if operation == Operation::Connect && error.is_user_rejection() {
            ConnectorError::Rejected
        } else {
            ConnectorError::Provider { operation, error }
        }
    }

    /// A request or response that did not match the wallet's wire format.
    pub fn malformed(operation: Operation, err: serde_json::Error) -> Self {
        ConnectorError::Provider {
            operation,
            error: ProviderError::new(format!("unexpected wallet payload: {}", err)),
        }
    }
}
