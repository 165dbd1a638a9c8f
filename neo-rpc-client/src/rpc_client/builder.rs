use std::time::Duration;

use reqwest::{Client, Url};

use super::{RpcClient, DEFAULT_HTTP_TIMEOUT};
use crate::ClientRpcError;

/// Builder for [`RpcClient`].
#[derive(Debug, Clone)]
pub struct RpcClientBuilder {
    url: Url,
    timeout: Duration,
    user_agent: Option<String>,
}

impl RpcClientBuilder {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: None,
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<RpcClient, ClientRpcError> {
        let mut builder = Client::builder().timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientRpcError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(RpcClient::with_client(http_client, self.url, self.timeout))
    }
}
