//! Delivery of a conversation to the relay.

use crate::ClientConfig;
use anyhow::{Result, bail};
use bytes::Bytes;
use futures_util::{StreamExt, TryStreamExt, stream::BoxStream};
use llm::Turn;
use reqwest::Client;

/// Raw response body chunks, in arrival order.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Path of the relay chat endpoint.
pub const CHAT_PATH: &str = "/api/chat";

/// Sends a conversation and yields the streamed reply body.
pub trait Transport {
    /// Send `turns`; fails on transport errors and non-success statuses.
    fn send(&self, turns: &[Turn]) -> impl Future<Output = Result<ByteStream>> + Send;
}

/// HTTP transport posting JSON to a relay.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    /// Create a transport for the relay in `config`.
    pub fn new(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            url: format!("{}{CHAT_PATH}", config.relay_url.trim_end_matches('/')),
        }
    }

    /// The chat endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn send(&self, turns: &[Turn]) -> Result<ByteStream> {
        tracing::debug!(turns = turns.len(), "posting conversation to {}", self.url);
        let response = self.client.post(&self.url).json(turns).send().await?;

        let status = response.status();
        if !status.is_success() {
            bail!("relay returned {status}");
        }

        Ok(response.bytes_stream().map_err(anyhow::Error::from).boxed())
    }
}
