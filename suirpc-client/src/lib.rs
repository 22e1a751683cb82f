//! JSON-RPC 2.0 client for the Sui full node read API over HTTP
//!
//! This crate provides a typed client for a Sui full node's JSON-RPC
//! interface: strongly-typed request/result shapes, one function per RPC
//! method, and an HTTP transport that performs exactly one POST per call.
//!
//! # Core Pieces
//!
//! - **HTTP Transport**: one JSON-RPC 2.0 envelope per call, positional
//!   params, `Content-Type: application/json`, 20 second default deadline
//! - **Typed Read API**: the seven object read methods behind the
//!   [`ObjectReadApi`] trait, substitutable with test doubles
//! - **Validation**: operations with required fields fail fast, before any
//!   network activity
//! - **Builder**: endpoint, custom `reqwest::Client`, timeout, and an
//!   explicit opt-in rate limiter
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use suirpc_client::{GetObjectRequest, ObjectDataOptions, ObjectReadApi, SuiRpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SuiRpcClient::new("https://fullnode.mainnet.sui.io")?;
//!
//!     let object = client
//!         .read_api()
//!         .get_object(GetObjectRequest {
//!             object_id: "0x5".to_string(),
//!             options: Some(ObjectDataOptions {
//!                 show_type: true,
//!                 ..Default::default()
//!             }),
//!         })
//!         .await?;
//!
//!     println!("object {} at version {}", object.object_id, object.version);
//!     Ok(())
//! }
//! ```
//!
//! # Concurrency
//!
//! Each call executes on the caller's task; the client imposes no internal
//! scheduler or queue. Configuration is immutable after construction, so one
//! client (or its cheap clones) can serve any number of concurrent calls.
//! Cancel a call by dropping its future or letting the per-request deadline
//! elapse.

mod client_builder;
mod models;
mod rate_limit;
mod read_api;
mod transport;
mod validate;

pub use client_builder::{ClientBuilder, SuiRpcClient};
pub use models::{
    ChildObjectsResponse, DynamicFieldInfo, DynamicFieldName, GetDynamicFieldObjectRequest,
    GetDynamicFieldsRequest, GetLoadedChildObjectsRequest, GetObjectRequest,
    GetOwnedObjectsRequest, LoadedChildObject, MultiGetObjectsRequest, ObjectData,
    ObjectDataOptions, ObjectResponse, ObjectResponseQuery, PaginatedDynamicFieldInfoResponse,
    PaginatedObjectsResponse, PastObjectResponse, TryGetPastObjectRequest,
    QUERY_MAX_RESULT_LIMIT,
};
pub use rate_limit::RateLimit;
pub use read_api::{ObjectReadApi, ReadApi};
pub use transport::{HttpTransport, DEFAULT_REQUEST_TIMEOUT};
pub use validate::Validate;
