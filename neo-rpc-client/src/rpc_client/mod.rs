//! HTTP JSON-RPC client.

mod builder;
mod client;
mod helpers;

use std::time::Duration;

use reqwest::{Client, Url};

pub use builder::RpcClientBuilder;

/// Default timeout applied to every HTTP request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a single Neo node's JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    request_timeout: Duration,
}
