//! Codec for JSON-RPC message serialization and deserialization
//!
//! This module provides the encode/decode helpers shared by the transport and
//! the typed API surface. While serde does the heavy lifting, the codec adds:
//!
//! - **Error mapping**: serde failures become the right [`Error`] kind
//!   (`Encode` on the way out, `Decode` on the way in)
//! - **Envelope unwrapping**: a decoded response is reduced to its `result`
//!   value, surfacing a server-side error object as [`Error::Rpc`]
//!
//! # Error-Path Decision
//!
//! A response carrying an `error` object instead of a `result` is surfaced as
//! a distinct `Error::Rpc` rather than being force-decoded into the result
//! shape. Callers that want the raw envelope can use
//! [`decode_response`] directly and inspect both fields themselves.
//!
//! # Examples
//!
//! ```rust
//! use suirpc_core::{codec, RpcRequest, RequestId};
//! use serde_json::json;
//!
//! let request = RpcRequest::new("sui_getObject", vec![json!("0x5")], RequestId::Number(1));
//! let body = codec::encode(&request).unwrap();
//! assert!(body.contains("\"method\":\"sui_getObject\""));
//! ```

use crate::error::{Error, Result};
use crate::types::RpcResponse;
use serde::Serialize;

/// Encode any serializable message to a JSON string
///
/// # Errors
///
/// Returns [`Error::Encode`] if the message cannot be serialized to JSON.
/// This can happen if a parameter contains types that aren't JSON-compatible
/// (e.g. a map with non-string keys).
pub fn encode<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Encode(e.to_string()))
}

/// Serialize one positional parameter to a JSON value
///
/// The typed API surface uses this to map each named request field into its
/// slot in the positional parameter list.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the value is not JSON-representable.
///
/// # Examples
///
/// ```rust
/// use suirpc_core::codec;
/// use serde_json::json;
///
/// let param = codec::to_param(&Some(5u64)).unwrap();
/// assert_eq!(param, json!(5));
///
/// let absent = codec::to_param(&None::<String>).unwrap();
/// assert_eq!(absent, json!(null));
/// ```
pub fn to_param<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| Error::Encode(e.to_string()))
}

/// Decode raw response bytes into a JSON-RPC response envelope
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not valid JSON or are not a
/// JSON-RPC 2.0 response object. An empty body (e.g. from an HTTP-level
/// failure the transport did not inspect) falls into this category.
pub fn decode_response(bytes: &[u8]) -> Result<RpcResponse> {
    serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Reduce a response envelope to its `result` value
///
/// # Errors
///
/// - [`Error::Rpc`] if the envelope carries an `error` object
/// - [`Error::Decode`] if the envelope carries neither `result` nor `error`
///   (not a valid JSON-RPC 2.0 response)
pub fn unwrap_result(response: RpcResponse) -> Result<serde_json::Value> {
    if let Some(error) = response.error {
        return Err(Error::Rpc(error));
    }
    response
        .result
        .ok_or_else(|| Error::Decode("response has neither result nor error".to_string()))
}
