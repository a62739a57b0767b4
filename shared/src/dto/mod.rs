//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the wallet provider's `request` entry point.
//!
//! ## Module Organization
//!
//! - [`account`] - Account IDs and the account-request response
//! - [`transfer`] - Transfer transactions and execution receipts
//! - [`provider`] - Request envelope, method names and error codes
//!
//! ## Example JSON Communication
//!
//! ```text
//! request({ method: "hedera_getAccountBalance", params: { accountId: "0.0.4815" } })
//! => 42.5
//! ```
//!
//! ```text
//! request({ method: "hedera_requestAccount" })
//! => { "accountId": "0.0.4815", "network": "testnet" }
//! ```

pub mod account;
pub mod provider;
pub mod transfer;

pub use account::*;
pub use provider::*;
pub use transfer::*;
