//! Signing-client boundary.
//!
//! Client-side (hydrate): calls the promise-returning wallet integration the
//! host page injects at `window.multisigWallet`.
//! Server-side (SSR): stubs reporting the bridge as unavailable, since a
//! wallet only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Wallet rejections surface their message text verbatim — the form shows
//! exactly what the wallet (or chain) said, with no classification or retry.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use std::sync::Arc;

use async_trait::async_trait;
use chain::{ExecuteResponse, StdFee};
use serde_json::Value;

/// Name of the bridge object the host page injects on `window`.
pub const BRIDGE_GLOBAL: &str = "multisigWallet";

/// Error from the wallet boundary.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No bridge object exists on this page (or this is the server).
    #[error("no wallet was found on this page")]
    BridgeUnavailable,
    /// The wallet rejected the request; the message is shown unmodified.
    #[error("{0}")]
    Rejected(String),
    /// The wallet resolved with a value this UI cannot decode.
    #[error("malformed wallet response: {0}")]
    MalformedResponse(String),
}

/// The external signing client.
///
/// Wallet connection, transaction signing, and broadcasting all live behind
/// this trait; the UI only consumes it. Futures are non-`Send` because the
/// real implementation runs on the browser's single thread.
#[async_trait(?Send)]
pub trait SigningClient {
    /// Connect and return the sender address.
    async fn connect(&self) -> Result<String, WalletError>;

    /// Execute `msg` against `contract` with the given flat fee.
    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        msg: &Value,
        fee: &StdFee,
    ) -> Result<ExecuteResponse, WalletError>;

    /// Run a smart query against `contract`.
    async fn query_smart(&self, contract: &str, query: &Value) -> Result<Value, WalletError>;
}

/// Cloneable handle to the signing client, shared through Leptos context.
///
/// Both implementations are stateless (the browser one resolves the bridge
/// object at call time), which keeps the handle `Send + Sync` as context
/// values must be.
#[derive(Clone)]
pub struct WalletHandle(Arc<dyn SigningClient + Send + Sync>);

impl WalletHandle {
    /// The signing client for this build: the browser bridge under
    /// `hydrate`, an unavailable stub otherwise.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self(Arc::new(browser::BrowserWallet))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self(Arc::new(NullWallet))
        }
    }
}

impl Default for WalletHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for WalletHandle {
    type Target = dyn SigningClient;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Stub used where no browser wallet can exist.
#[cfg(not(feature = "hydrate"))]
struct NullWallet;

#[cfg(not(feature = "hydrate"))]
#[async_trait(?Send)]
impl SigningClient for NullWallet {
    async fn connect(&self) -> Result<String, WalletError> {
        Err(WalletError::BridgeUnavailable)
    }

    async fn execute(
        &self,
        _sender: &str,
        _contract: &str,
        _msg: &Value,
        _fee: &StdFee,
    ) -> Result<ExecuteResponse, WalletError> {
        Err(WalletError::BridgeUnavailable)
    }

    async fn query_smart(&self, _contract: &str, _query: &Value) -> Result<Value, WalletError> {
        Err(WalletError::BridgeUnavailable)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::{BRIDGE_GLOBAL, SigningClient, WalletError};
    use async_trait::async_trait;
    use chain::{ExecuteResponse, StdFee};
    use serde_json::Value;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    /// Signing client backed by the injected `window.multisigWallet` bridge.
    pub(super) struct BrowserWallet;

    fn bridge() -> Result<js_sys::Object, WalletError> {
        let window = web_sys::window().ok_or(WalletError::BridgeUnavailable)?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(BRIDGE_GLOBAL))
            .map_err(|_| WalletError::BridgeUnavailable)?;
        value
            .dyn_into::<js_sys::Object>()
            .map_err(|_| WalletError::BridgeUnavailable)
    }

    /// Pull a human-readable message out of a rejected promise value.
    fn rejection_message(value: &JsValue) -> String {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return String::from(error.message());
        }
        value
            .as_string()
            .unwrap_or_else(|| "wallet request failed".to_owned())
    }

    async fn call_bridge(method: &str, args: &js_sys::Array) -> Result<JsValue, WalletError> {
        let bridge = bridge()?;
        let function = js_sys::Reflect::get(&bridge, &JsValue::from_str(method))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .ok_or(WalletError::BridgeUnavailable)?;
        let result = function
            .apply(&bridge, args)
            .map_err(|e| WalletError::Rejected(rejection_message(&e)))?;
        let promise = js_sys::Promise::resolve(&result);
        JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::Rejected(rejection_message(&e)))
    }

    fn decode<T: serde::de::DeserializeOwned>(value: &JsValue) -> Result<T, WalletError> {
        let text = js_sys::JSON::stringify(value)
            .map(String::from)
            .map_err(|_| WalletError::MalformedResponse("value is not serializable".to_owned()))?;
        serde_json::from_str(&text).map_err(|e| WalletError::MalformedResponse(e.to_string()))
    }

    #[async_trait(?Send)]
    impl SigningClient for BrowserWallet {
        async fn connect(&self) -> Result<String, WalletError> {
            let value = call_bridge("connect", &js_sys::Array::new()).await?;
            value.as_string().ok_or_else(|| {
                WalletError::MalformedResponse("connect did not return an address".to_owned())
            })
        }

        async fn execute(
            &self,
            sender: &str,
            contract: &str,
            msg: &Value,
            fee: &StdFee,
        ) -> Result<ExecuteResponse, WalletError> {
            let fee_json = serde_json::to_string(fee)
                .map_err(|e| WalletError::MalformedResponse(e.to_string()))?;
            let args = js_sys::Array::new();
            args.push(&JsValue::from_str(sender));
            args.push(&JsValue::from_str(contract));
            args.push(&JsValue::from_str(&msg.to_string()));
            args.push(&JsValue::from_str(&fee_json));
            let value = call_bridge("execute", &args).await?;
            decode(&value)
        }

        async fn query_smart(&self, contract: &str, query: &Value) -> Result<Value, WalletError> {
            let args = js_sys::Array::new();
            args.push(&JsValue::from_str(contract));
            args.push(&JsValue::from_str(&query.to_string()));
            let value = call_bridge("query", &args).await?;
            decode(&value)
        }
    }
}
