//! HTTP transport for OpenAI-compatible chat completions.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers and
//! the completions endpoint URL, and streams the Server-Sent Events
//! response back as [`StreamChunk`]s.

use crate::{Chunks, DONE, Model, Request, SseDecoder, StreamChunk, UpstreamError};
use anyhow::{Result, bail};
use async_stream::try_stream;
use futures_util::StreamExt;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Deserialize;

/// OpenAI-compatible endpoint URLs.
pub mod endpoint {
    /// OpenRouter API base.
    pub const OPENROUTER_BASE: &str = "https://openrouter.ai/api/v1";
    /// Path of the chat completions resource below an API base.
    pub const COMPLETIONS_PATH: &str = "/chat/completions";

    /// Join an API base URL and the chat completions path.
    pub fn completions(base: &str) -> String {
        format!("{}{COMPLETIONS_PATH}", base.trim_end_matches('/'))
    }
}

/// Bearer-authenticated transport for an OpenAI-compatible API.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl HttpProvider {
    /// Create a provider with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth: HeaderValue = format!("Bearer {key}").parse()?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }

    /// Create a provider targeting the OpenRouter API.
    pub fn openrouter(client: Client, key: &str) -> Result<Self> {
        Self::bearer(client, key, &endpoint::completions(endpoint::OPENROUTER_BASE))
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl Model for HttpProvider {
    async fn stream(&self, request: Request) -> Result<Chunks> {
        let body = request.stream();
        tracing::debug!(
            model = %body.model,
            turns = body.messages.len(),
            "sending completion request to {}",
            self.endpoint
        );

        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("upstream returned {status}: {}", text.trim());
        }
        tracing::debug!("upstream responded with status {status}");

        let mut bytes = response.bytes_stream();
        let chunks = try_stream! {
            let mut decoder = SseDecoder::new();
            let mut done = false;
            while let Some(next) = bytes.next().await {
                let next = next?;
                tracing::trace!("chunk: {}", String::from_utf8_lossy(&next));
                for data in decoder.feed(&next) {
                    if data == DONE {
                        done = true;
                        break;
                    }
                    if let Some(chunk) = parse(&data)? {
                        yield chunk;
                    }
                }
                if done {
                    break;
                }
            }

            if !done {
                for data in decoder.finish() {
                    if data == DONE {
                        break;
                    }
                    if let Some(chunk) = parse(&data)? {
                        yield chunk;
                    }
                }
            }
            tracing::debug!("upstream stream closed");
        };

        Ok(Box::pin(chunks))
    }
}

/// An in-band error frame: `{"error": {...}}`.
#[derive(Deserialize)]
struct ErrorFrame {
    error: UpstreamError,
}

/// Parse one `data` payload.
///
/// Error frames fail the stream; payloads that are not chunks are skipped.
fn parse(data: &str) -> Result<Option<StreamChunk>> {
    if let Ok(frame) = serde_json::from_str::<ErrorFrame>(data) {
        return Err(frame.error.into());
    }
    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => Ok(Some(chunk)),
        Err(e) => {
            tracing::warn!("failed to parse chunk: {e}, data: {data}");
            Ok(None)
        }
    }
}
