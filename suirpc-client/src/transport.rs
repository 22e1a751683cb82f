//! HTTP transport for JSON-RPC calls
//!
//! This module owns the single network-facing operation of the SDK: build a
//! JSON-RPC 2.0 envelope for one [`RpcCall`], POST it to the configured
//! endpoint, and hand back the response. No batching, no multiplexing, no
//! retry, no caching - one HTTP round trip per call.
//!
//! # Call Lifecycle
//!
//! 1. **Rate limit** (only if configured): await a permit
//! 2. **Encode**: serialize the envelope, fail with `Error::Encode`
//! 3. **Send**: HTTP POST with `Content-Type: application/json`
//! 4. **Read**: consume the full response body
//! 5. **Decode** (typed path only): envelope -> `result` -> caller's type
//!
//! # Status-Blind Raw Path
//!
//! [`HttpTransport::request_raw`] returns the body bytes without inspecting
//! the HTTP status code or the JSON-RPC `error` field; both are left to the
//! caller. The typed [`HttpTransport::call`] path decodes the envelope and
//! surfaces a server-side error object as [`Error::Rpc`], while a non-JSON
//! body (such as an empty HTTP 500 response) fails with [`Error::Decode`].
//!
//! # Thread Safety
//!
//! The transport holds no mutable state besides the atomic ID counter, so a
//! single instance can serve any number of concurrent calls. Connection
//! pooling is delegated to `reqwest`.

use crate::rate_limit::RateLimit;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use suirpc_core::{codec, Error, RequestId, Result, RpcCall, RpcRequest};

/// Default per-request deadline when the builder does not override it
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP transport for a single JSON-RPC endpoint
///
/// Immutable after construction (via
/// [`ClientBuilder`](crate::ClientBuilder)); all configuration is shared
/// read-only across concurrent calls.
#[derive(Debug)]
pub struct HttpTransport {
    /// Underlying HTTP client; pluggable for proxying or custom TLS
    http: reqwest::Client,
    /// Full node JSON-RPC endpoint URL
    endpoint: String,
    /// Per-request deadline
    request_timeout: Duration,
    /// Counter issuing unique correlation IDs across concurrent calls
    next_id: AtomicI64,
    /// Optional cooperative rate limiter, awaited before each send
    rate_limit: Option<RateLimit>,
}

impl HttpTransport {
    pub(crate) fn new(
        http: reqwest::Client,
        endpoint: String,
        request_timeout: Duration,
        rate_limit: Option<RateLimit>,
    ) -> Self {
        Self {
            http,
            endpoint,
            request_timeout,
            next_id: AtomicI64::new(1),
            rate_limit,
        }
    }

    /// The endpoint URL this transport POSTs to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue the next request ID
    ///
    /// IDs are correlation tokens only; no ordering between concurrent calls
    /// is implied. The atomic counter keeps them unique per transport even
    /// under sub-millisecond issuance.
    fn next_id(&self) -> RequestId {
        RequestId::Number(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Execute one JSON-RPC call and return the raw response body
    ///
    /// Builds the `{jsonrpc, id, method, params}` envelope, POSTs it, and
    /// reads the full body. The bytes are returned unconditionally: neither
    /// the HTTP status code nor the JSON-RPC `error` field is inspected here.
    ///
    /// # Errors
    ///
    /// - [`Error::Encode`] if the envelope cannot be serialized
    /// - [`Error::Transport`] if the connection fails or is interrupted
    /// - [`Error::Timeout`] if the per-request deadline elapses
    /// - [`Error::Read`] if the body cannot be fully consumed
    #[tracing::instrument(skip(self, call), fields(method = %call.method))]
    pub async fn request_raw(&self, call: &RpcCall) -> Result<Vec<u8>> {
        if let Some(ref limiter) = self.rate_limit {
            limiter.acquire().await;
        }

        let request = RpcRequest::new(call.method.clone(), call.params.clone(), self.next_id());
        let body = codec::encode(&request)?;

        tracing::debug!(id = %request.id, "Sending request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(map_send_error)?;

        let bytes = response.bytes().await.map_err(map_read_error)?;

        tracing::debug!(len = bytes.len(), "Received response body");
        Ok(bytes.to_vec())
    }

    /// Execute one JSON-RPC call and decode the result into `R`
    ///
    /// The typed counterpart of [`request_raw`](Self::request_raw): decodes
    /// the response envelope, surfaces a server-side error object, and
    /// deserializes the `result` value into the caller's type.
    ///
    /// # Errors
    ///
    /// Everything `request_raw` can return, plus:
    ///
    /// - [`Error::Rpc`] if the server answered with an `error` object
    /// - [`Error::Decode`] if the body is not a JSON-RPC response or the
    ///   `result` does not match `R`
    pub async fn call<R: DeserializeOwned>(&self, call: RpcCall) -> Result<R> {
        let raw = self.request_raw(&call).await?;
        let response = codec::decode_response(&raw)?;
        let result = codec::unwrap_result(response).map_err(|e| {
            if let Error::Rpc(ref data) = e {
                tracing::error!(method = %call.method, code = data.code, "Server returned error");
            }
            e
        })?;
        serde_json::from_value(result).map_err(|e| Error::Decode(e.to_string()))
    }
}

/// Map a reqwest send-phase failure to the SDK taxonomy
fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Transport(e.to_string())
    }
}

/// Map a reqwest body-read failure to the SDK taxonomy
///
/// The deadline set via `RequestBuilder::timeout` covers the body read as
/// well, so a slow-bodied server still surfaces as `Timeout`.
fn map_read_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Read(e.to_string())
    }
}
