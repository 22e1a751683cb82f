//! suirpc - Typed JSON-RPC 2.0 client SDK for Sui full nodes
//!
//! This is the main convenience crate that re-exports the suirpc sub-crates.
//! Use this crate if you want a single dependency for talking to a full node.
//!
//! # Architecture
//!
//! suirpc is organized into modular crates:
//!
//! - **suirpc-core**: JSON-RPC 2.0 wire types, codec, error taxonomy
//! - **suirpc-client**: HTTP transport, builder, and the typed read API
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use suirpc::{GetOwnedObjectsRequest, ObjectReadApi, SuiRpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SuiRpcClient::new("https://fullnode.mainnet.sui.io")?;
//!
//!     let page = client
//!         .read_api()
//!         .get_owned_objects(GetOwnedObjectsRequest {
//!             address: "0x1".to_string(),
//!             limit: 10,
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("{} objects, more: {}", page.data.len(), page.has_next_page);
//!     Ok(())
//! }
//! ```

// Re-export all public APIs from sub-crates
// This allows users to access everything through `suirpc::` prefix
pub use suirpc_client as client;
pub use suirpc_core as core;

// Convenience re-exports of the most commonly used types
pub use suirpc_client::{
    ClientBuilder, GetDynamicFieldObjectRequest, GetDynamicFieldsRequest,
    GetLoadedChildObjectsRequest, GetObjectRequest, GetOwnedObjectsRequest,
    MultiGetObjectsRequest, ObjectDataOptions, ObjectReadApi, RateLimit, SuiRpcClient,
    TryGetPastObjectRequest,
};
pub use suirpc_core::{Error, Result};
