//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the connector and the injected
//! HashPack wallet provider. All DTOs use JSON serialization via `serde`; the
//! browser layer converts them to and from JavaScript objects.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for provider communication
//!   - **[`dto::account`]**: Account identifiers and the account-request response
//!   - **[`dto::transfer`]**: Crypto transfer transactions and receipts
//!   - **[`dto::provider`]**: The `request({method, params})` envelope
//! - **[`utils`]**: HBAR/tinybar conversion and balance formatting
//!
//! ## Wire Format
//!
//! The wallet speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`:
//!
//! ```rust
//! use shared::dto::account::Account;
//!
//! let account: Account = serde_json::from_str(
//!     r#"{"accountId":"0.0.4815","network":"testnet"}"#,
//! ).unwrap();
//! assert_eq!(account.account_id, "0.0.4815");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
