//! Core JSON-RPC 2.0 types, codec and errors for suirpc
//!
//! This crate provides the foundational types and utilities for the suirpc
//! client SDK. It includes:
//!
//! - **Types**: the JSON-RPC 2.0 request/response envelopes with positional
//!   parameters, request IDs, and the transient method/params pairing the
//!   transport consumes
//! - **Codec**: serialization and deserialization helpers with error mapping
//! - **Error handling**: the SDK-wide error taxonomy
//!
//! # Architecture
//!
//! The crate is transport-agnostic - it handles envelope construction and
//! decoding but doesn't dictate how bytes are moved. The `suirpc-client`
//! crate builds on this foundation to provide the HTTP transport and the
//! typed Sui read API.
//!
//! # Example
//!
//! ```rust
//! use suirpc_core::{codec, RpcRequest, RequestId};
//! use serde_json::json;
//!
//! // Build a positional-parameter request
//! let request = RpcRequest::new(
//!     "sui_getObject",
//!     vec![json!("0x5"), json!(null)],
//!     RequestId::Number(1),
//! );
//!
//! // Encode it to the wire format
//! let body = codec::encode(&request).unwrap();
//! assert!(body.contains("\"jsonrpc\":\"2.0\""));
//! ```

pub mod codec;
pub mod error;
pub mod types;

// Re-export the most commonly used types for convenience
// This allows users to use `suirpc_core::Error` instead of `suirpc_core::error::Error`
pub use error::{Error, Result, RpcErrorObject};
pub use types::{RequestId, RpcCall, RpcRequest, RpcResponse};
