//! # Provider Request Envelope
//!
//! HashPack injects a single async entry point, `request({ method, params })`.
//! [`ProviderRequest`] is that argument object.

use serde::{Deserialize, Serialize};

use super::transfer::TransferTransaction;

/// Error code the wallet reports when the user dismisses a request
pub const USER_REJECTED_CODE: i64 = 4001;

/// Methods understood by the HashPack provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderMethod {
    #[serde(rename = "hedera_requestAccount")]
    RequestAccount,
    #[serde(rename = "hedera_getAccountBalance")]
    GetAccountBalance,
    #[serde(rename = "hedera_signAndExecuteTransaction")]
    SignAndExecuteTransaction,
}

impl ProviderMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMethod::RequestAccount => "hedera_requestAccount",
            ProviderMethod::GetAccountBalance => "hedera_getAccountBalance",
            ProviderMethod::SignAndExecuteTransaction => "hedera_signAndExecuteTransaction",
        }
    }
}

/// Argument of `provider.request(...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    pub method: ProviderMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl ProviderRequest {
    pub fn new(method: ProviderMethod) -> Self {
        Self { method, params: None }
    }

    /// Attach typed params, serialized to JSON
    pub fn with_params<T: Serialize>(
        method: ProviderMethod,
        params: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method,
            params: Some(serde_json::to_value(params)?),
        })
    }
}

/// Params of `hedera_getAccountBalance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceParams {
    pub account_id: String,
}

/// Params of `hedera_signAndExecuteTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignAndExecuteParams {
    pub transaction: TransferTransaction,
}
