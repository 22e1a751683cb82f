//! Client builder for configuring endpoint, HTTP client and timeouts
//!
//! The `ClientBuilder` provides a fluent API for configuring client behavior
//! before construction. It allows you to:
//! - Point the client at a full node endpoint
//! - Supply a custom `reqwest::Client` (proxying, TLS configuration)
//! - Override the per-request timeout (default 20 seconds)
//! - Opt into request rate limiting
//!
//! All configuration is captured at build time; the resulting client is
//! immutable and safely shared across tasks.
//!
//! # Examples
//!
//! ```rust
//! use suirpc_client::{ClientBuilder, RateLimit};
//! use std::time::Duration;
//!
//! # fn example() -> suirpc_core::Result<()> {
//! // Defaults only
//! let client = ClientBuilder::new("https://fullnode.mainnet.sui.io").build()?;
//!
//! // Tighter deadline plus rate limiting
//! let client2 = ClientBuilder::new("https://fullnode.mainnet.sui.io")
//!     .request_timeout(Duration::from_secs(5))
//!     .rate_limit(RateLimit::new(100, Duration::from_secs(1)))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::rate_limit::RateLimit;
use crate::read_api::ReadApi;
use crate::transport::{HttpTransport, DEFAULT_REQUEST_TIMEOUT};
use std::sync::Arc;
use std::time::Duration;
use suirpc_core::{Error, Result};

/// Builder for configuring and creating a [`SuiRpcClient`]
pub struct ClientBuilder {
    endpoint: String,
    http_client: Option<reqwest::Client>,
    request_timeout: Duration,
    rate_limit: Option<RateLimit>,
}

impl ClientBuilder {
    /// Create a new client builder targeting the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            rate_limit: None,
        }
    }

    /// Use a custom HTTP client instead of the default
    ///
    /// Lets callers control proxying, TLS, and connection pooling. The
    /// client is shared read-only by every call.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Override the per-request deadline (default 20 seconds)
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Enable cooperative request rate limiting (disabled by default)
    pub fn rate_limit(mut self, limit: RateLimit) -> Self {
        self.rate_limit = Some(limit);
        self
    }

    /// Build the client
    ///
    /// No connection is established here; HTTP connections are opened
    /// lazily on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the endpoint is empty.
    pub fn build(self) -> Result<SuiRpcClient> {
        if self.endpoint.is_empty() {
            return Err(Error::Validation("endpoint URL is required".to_string()));
        }

        let http = self.http_client.unwrap_or_default();
        let transport = Arc::new(HttpTransport::new(
            http,
            self.endpoint,
            self.request_timeout,
            self.rate_limit,
        ));

        tracing::debug!(endpoint = %transport.endpoint(), "Client built");

        Ok(SuiRpcClient {
            read_api: ReadApi::new(transport.clone()),
            transport,
        })
    }
}

/// Typed JSON-RPC client for a Sui full node
///
/// Cheaply cloneable (`Arc` internally); all clones share the same transport
/// and configuration. Construct via [`ClientBuilder`] or
/// [`SuiRpcClient::new`] for defaults.
///
/// # Examples
///
/// ```rust
/// use suirpc_client::SuiRpcClient;
///
/// # fn example() -> suirpc_core::Result<()> {
/// let client = SuiRpcClient::new("https://fullnode.mainnet.sui.io")?;
/// let _read = client.read_api();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SuiRpcClient {
    transport: Arc<HttpTransport>,
    read_api: ReadApi,
}

impl SuiRpcClient {
    /// Create a client with default configuration for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(endpoint).build()
    }

    /// Start configuring a client
    pub fn builder(endpoint: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(endpoint)
    }

    /// The object read API surface
    pub fn read_api(&self) -> &ReadApi {
        &self.read_api
    }

    /// The underlying transport, for issuing methods this SDK does not type
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }
}
