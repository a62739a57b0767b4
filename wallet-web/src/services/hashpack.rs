//! HashPack Provider Bridge
//!
//! Wraps the `window.hedera` object the extension injects and forwards
//! `request({ method, params })` calls to it.

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use lib_connector::{ProviderError, WalletProvider};
use serde::Serialize;
use shared::ProviderRequest;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::utils::constants::PROVIDER_GLOBAL;

/// The injected wallet object
pub struct HashPackProvider {
    provider: JsValue,
}

impl HashPackProvider {
    /// Look up the injected provider. `None` when the extension is not installed.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let provider = Reflect::get(&window, &JsValue::from_str(PROVIDER_GLOBAL)).ok()?;
        if provider.is_undefined() || provider.is_null() {
            return None;
        }
        Some(Self { provider })
    }

    fn request_fn(&self) -> Result<Function, ProviderError> {
        Reflect::get(&self.provider, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ProviderError::new("wallet provider has no request method"))
    }
}

#[async_trait(?Send)]
impl WalletProvider for HashPackProvider {
    async fn request(&self, request: ProviderRequest) -> Result<serde_json::Value, ProviderError> {
        // Plain JS objects, not Maps, so the extension can read the fields
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let args = request
            .serialize(&serializer)
            .map_err(|e| ProviderError::new(format!("failed to encode request: {}", e)))?;

        let result = self
            .request_fn()?
            .call1(&self.provider, &args)
            .map_err(provider_error)?;

        let value = match result.dyn_into::<Promise>() {
            Ok(promise) => JsFuture::from(promise).await.map_err(provider_error)?,
            Err(value) => value,
        };

        if value.is_undefined() {
            return Ok(serde_json::Value::Null);
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ProviderError::new(format!("failed to decode response: {}", e)))
    }
}

/// Convert a thrown value or rejection reason. Wallet errors carry `code` and `message`.
fn provider_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderError { code, message }
}
