//! JSON-RPC 2.0 wire types used by the suirpc client
//!
//! This module implements the request/response envelopes from the JSON-RPC 2.0
//! specification (https://www.jsonrpc.org/specification), restricted to what a
//! client SDK needs:
//!
//! 1. **Request**: a call to a remote method, with **positional** parameters
//! 2. **Response**: the result of processing a request (success or error)
//!
//! # Positional Parameters
//!
//! The Sui full node API uses positional parameters exclusively: `params` is
//! always a JSON array, and the order of its elements is part of the wire
//! contract for each method. There is no named-parameter support anywhere in
//! this SDK.
//!
//! # Request IDs
//!
//! Request IDs correlate a request with its response. The spec allows string,
//! number, or null IDs; this client issues numeric IDs from an atomic counter
//! so they are unique even under concurrent calls on the same client.

use crate::error::RpcErrorObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 request ID
///
/// Used to correlate a request with its corresponding response. According to
/// the spec an ID can be a string, number, or null.
///
/// # Implementation Notes
///
/// This enum uses `#[serde(untagged)]` to serialize directly as the inner
/// value without a type discriminator, matching the JSON-RPC 2.0 spec exactly.
/// The client only ever *produces* `Number` IDs, but a response from a
/// non-conforming server may echo back any of the three shapes, so decoding
/// accepts all of them.
///
/// # Examples
///
/// ```rust
/// use suirpc_core::RequestId;
///
/// let id1: RequestId = "req-123".into();
/// let id2: RequestId = 42i64.into();
///
/// assert_eq!(id1.to_string(), "\"req-123\"");
/// assert_eq!(id2.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// String identifier - useful for UUIDs or correlation tokens
    String(String),
    /// Numeric identifier - what this client issues
    Number(i64),
    /// Null identifier - allowed by spec but makes correlation impossible
    Null,
}

impl fmt::Display for RequestId {
    /// Format the ID in a JSON-like representation: strings quoted, numbers
    /// as-is, null as "null".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::String(s) => write!(f, "\"{}\"", s),
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions to make ID creation ergonomic

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

impl From<u64> for RequestId {
    /// Convert from u64 to RequestId
    ///
    /// Note: This casts to i64, so values > i64::MAX will wrap around.
    /// The client's counter starts at 1, so this is never an issue in practice.
    fn from(n: u64) -> Self {
        RequestId::Number(n as i64)
    }
}

/// JSON-RPC 2.0 request envelope
///
/// # Spec Compliance
///
/// A request MUST contain:
/// - `jsonrpc`: Must be exactly "2.0"
/// - `method`: The name of the method to invoke
/// - `id`: An identifier to correlate with the response
///
/// Unlike the general spec, `params` is not optional here: the Sui API always
/// takes a positional parameter list, so `params` is a `Vec` and an empty
/// array is sent for zero-argument methods.
///
/// # Examples
///
/// ```rust
/// use suirpc_core::{RpcRequest, RequestId};
/// use serde_json::json;
///
/// let req = RpcRequest::new(
///     "sui_getObject",
///     vec![json!("0x5"), json!(null)],
///     RequestId::Number(1),
/// );
/// assert_eq!(req.jsonrpc, "2.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Name of the remote method to invoke
    pub method: String,
    /// Positional parameters, in the exact order the remote method expects
    pub params: Vec<serde_json::Value>,
    /// Unique identifier to correlate this request with its response
    pub id: RequestId,
}

impl RpcRequest {
    /// Create a new JSON-RPC 2.0 request
    ///
    /// The `jsonrpc` field is automatically set to "2.0" per the specification.
    ///
    /// # Arguments
    ///
    /// * `method` - The name of the method to invoke on the full node
    /// * `params` - Positional parameters (empty vec if the method takes none)
    /// * `id` - Unique identifier for correlating the response
    pub fn new(
        method: impl Into<String>,
        params: Vec<serde_json::Value>,
        id: RequestId,
    ) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope
///
/// Sent by the server after processing a request. Contains either a result
/// (success) or an error (failure), but never both.
///
/// # Spec Compliance
///
/// Per JSON-RPC 2.0 specification:
/// - `result`: Required on success, must not exist on error
/// - `error`: Required on error, must not exist on success
/// - `id`: Must match the `id` from the corresponding request
///
/// # Examples
///
/// ```rust
/// use suirpc_core::{RpcResponse, RequestId};
/// use serde_json::json;
///
/// let success = RpcResponse::success(json!({"objectId": "0x5"}), RequestId::Number(1));
/// assert!(success.is_success());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// The result of the method invocation (present only on success)
    /// Mutually exclusive with `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error information (present only on failure)
    /// Mutually exclusive with `result`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
    /// Request ID from the original request (for correlation)
    /// Will be `RequestId::Null` if the request ID couldn't be determined
    pub id: RequestId,
}

impl RpcResponse {
    /// Create a successful JSON-RPC 2.0 response
    ///
    /// The `error` field is automatically set to None. Mostly useful for
    /// building stub responses in tests.
    pub fn success(result: serde_json::Value, id: RequestId) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error JSON-RPC 2.0 response
    ///
    /// The `result` field is automatically set to None.
    pub fn error(error: RpcErrorObject, id: RequestId) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Check if the response represents a successful result
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Check if the response represents an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A single pending call: a method name paired with its positional parameters
///
/// This is a transient value. The typed API surface builds one per invocation,
/// the transport consumes it to produce an [`RpcRequest`], and it is never
/// persisted or reused. The parameter order is the wire contract of the named
/// method; callers of [`RpcCall::new`] are responsible for getting it right.
///
/// # Examples
///
/// ```rust
/// use suirpc_core::RpcCall;
/// use serde_json::json;
///
/// let call = RpcCall::new("sui_getObject", vec![json!("0x5"), json!(null)]);
/// assert_eq!(call.method, "sui_getObject");
/// assert_eq!(call.params.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RpcCall {
    /// RPC method name, e.g. `sui_getObject`
    pub method: String,
    /// Positional parameters in the order the method expects
    pub params: Vec<serde_json::Value>,
}

impl RpcCall {
    /// Pair a method name with its positional parameter list
    pub fn new(method: impl Into<String>, params: Vec<serde_json::Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}
