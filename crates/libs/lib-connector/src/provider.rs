//! # Wallet Provider Seam
//!
//! The injected wallet exposes one async entry point, `request({method, params})`.
//! The connector receives an implementation at construction instead of
//! reaching for a global, so tests substitute a scripted provider.

use std::rc::Rc;

use async_trait::async_trait;
use shared::ProviderRequest;

use crate::error::ProviderError;

/// Request/response access to an injected wallet.
///
/// Futures are `!Send`: browser wallets live on the main thread.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Issue a request and return the raw JSON result.
    async fn request(&self, request: ProviderRequest) -> Result<serde_json::Value, ProviderError>;
}

#[async_trait(?Send)]
impl<T: WalletProvider + ?Sized> WalletProvider for Rc<T> {
    async fn request(&self, request: ProviderRequest) -> Result<serde_json::Value, ProviderError> {
        (**self).request(request).await
    }
}
