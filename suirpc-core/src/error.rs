//! Error types for suirpc
//!
//! This module provides the error taxonomy for the client SDK. It defines two
//! main types:
//!
//! - **Error**: application-level errors returned to SDK callers (uses thiserror)
//! - **RpcErrorObject**: the wire-format error object from the JSON-RPC 2.0 spec
//!
//! # Taxonomy
//!
//! Every failure a call can produce maps to exactly one variant, and each
//! variant tells the caller which stage of the round trip failed:
//!
//! - `Encode`: the request envelope could not be serialized (no bytes sent)
//! - `Transport`: the connection could not be established or was interrupted
//! - `Timeout`: the per-request deadline elapsed
//! - `Read`: the response body could not be fully consumed
//! - `Decode`: the response bytes did not match the expected shape
//! - `Validation`: the request failed structural pre-checks (no bytes sent)
//! - `Rpc`: the server answered with a JSON-RPC error object
//!
//! # Propagation Policy
//!
//! Strictly local: nothing in this SDK catches, wraps, or retries an error.
//! Every error is returned unchanged to the immediate caller, who may choose
//! to retry (`Transport`/`Timeout`) or give up.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for suirpc operations
///
/// Convenience alias used throughout the suirpc crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-level error type for suirpc operations
///
/// Each variant corresponds to one stage of a single JSON-RPC round trip,
/// so a caller can tell whether the request ever left the process
/// (`Encode`/`Validation` mean it did not) and whether a retry could help
/// (`Transport`/`Timeout` are the only candidates).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Request envelope could not be serialized to JSON
    ///
    /// Surfaced before any network activity. Indicates a parameter value
    /// that is not JSON-representable.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Transport layer failure
    ///
    /// The connection could not be established, was refused, or was
    /// interrupted mid-flight. The server may or may not have seen the
    /// request; idempotent reads are safe to retry.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The per-request deadline elapsed
    ///
    /// The in-flight call was abandoned. No partial state is retained.
    #[error("Request timeout")]
    Timeout,

    /// Response body could not be fully read
    ///
    /// The HTTP exchange started but the body stream failed before it was
    /// completely consumed.
    #[error("Read error: {0}")]
    Read(String),

    /// Response bytes did not match the expected shape
    ///
    /// Covers invalid JSON, a missing `result` field, and result payloads
    /// that do not deserialize into the operation's declared result type.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request failed structural pre-checks
    ///
    /// A required field was absent or out of range. Guaranteed to surface
    /// before any network activity, so no round trip is wasted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server returned a JSON-RPC error object
    ///
    /// The HTTP exchange succeeded but the method invocation failed on the
    /// server. The original error object is carried intact.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcErrorObject),
}

/// JSON-RPC 2.0 error object as defined in the specification
///
/// This structure represents the exact wire format appearing in the `error`
/// field of a response. As a pure client, this SDK only ever *receives* these;
/// the constructors exist for stubbing server behavior in tests.
///
/// # Standard Error Codes
///
/// The spec reserves:
/// - `-32700`: Parse error
/// - `-32600`: Invalid Request
/// - `-32601`: Method not found
/// - `-32602`: Invalid params
/// - `-32603`: Internal error
/// - `-32000 to -32099`: Server error (implementation-defined)
///
/// # Examples
///
/// ```rust
/// use suirpc_core::RpcErrorObject;
/// use serde_json::json;
///
/// let err = RpcErrorObject::with_data(
///     -32602,
///     "Invalid params",
///     json!({"expected": "address"}),
/// );
/// assert_eq!(err.code, -32602);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Numeric error code indicating the error type
    ///
    /// Negative codes from -32768 to -32000 are reserved by the spec.
    pub code: i64,

    /// Human-readable error message
    pub message: String,

    /// Optional additional error information
    ///
    /// Any JSON-serializable data providing more context about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcErrorObject {
    /// Create a new JSON-RPC error object with code and message
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new JSON-RPC error object with additional data
    pub fn with_data(code: i64, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl std::fmt::Display for RpcErrorObject {
    /// Formats as "[code] message" for easy readability in logs.
    /// For example: "[-32602] Invalid params"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RpcErrorObject {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_object_display() {
        let error = RpcErrorObject::new(-32602, "Invalid params");
        let display = format!("{}", error);

        assert!(display.contains("-32602"));
        assert!(display.contains("Invalid params"));
    }

    #[test]
    fn test_error_object_with_data() {
        let error = RpcErrorObject::with_data(
            -32602,
            "Invalid params",
            json!({"missing": ["address"]}),
        );

        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params");

        if let Some(data) = error.data {
            assert_eq!(data["missing"][0], "address");
        } else {
            panic!("Expected data to be present");
        }
    }

    #[test]
    fn test_error_object_deserialization() {
        let json = r#"{"code":-32601,"message":"Method not found"}"#;
        let error: RpcErrorObject = serde_json::from_str(json).unwrap();

        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found");
        assert!(error.data.is_none());
    }

    #[test]
    fn test_error_object_round_trip() {
        let error = RpcErrorObject::with_data(-32000, "Server error", json!({"key": "value"}));

        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: RpcErrorObject = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, error);
    }

    #[test]
    fn test_rpc_error_conversion() {
        let error: Error = RpcErrorObject::new(-32601, "Method not found").into();
        match error {
            Error::Rpc(data) => assert_eq!(data.code, -32601),
            _ => panic!("Expected Rpc error"),
        }
    }

    #[test]
    fn test_timeout_display() {
        let error = Error::Timeout;
        assert_eq!(format!("{}", error), "Request timeout");
    }

    #[test]
    fn test_validation_error_display() {
        let error = Error::Validation("address is required".to_string());
        let display = format!("{}", error);

        assert!(display.contains("address is required"));
    }

    #[test]
    fn test_transport_error_display() {
        let error = Error::Transport("connection refused".to_string());
        match error {
            Error::Transport(msg) => assert_eq!(msg, "connection refused"),
            _ => panic!("Expected Transport error"),
        }
    }
}
