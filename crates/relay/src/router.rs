//! HTTP surface of the relay.

use crate::{Relay, RelayError};
use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use llm::{Model, Turn};

/// Path of the chat endpoint.
pub const CHAT_PATH: &str = "/api/chat";

/// Build the axum router with the chat endpoint.
pub fn router<M: Model>(relay: Relay<M>) -> Router {
    Router::new()
        .route(CHAT_PATH, post(chat::<M>))
        .with_state(relay)
}

/// Relay one conversation.
///
/// The body is parsed from raw bytes so the content type is not enforced.
/// The response is a chunked body of raw UTF-8 fragments.
async fn chat<M: Model>(
    State(relay): State<Relay<M>>,
    body: Bytes,
) -> Result<Response, RelayError> {
    let turns: Vec<Turn> = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::debug!("rejected conversation: {e}");
    })?;
    tracing::debug!(turns = turns.len(), "relaying conversation");

    let fragments = relay.relay(turns).await.map_err(|e| {
        tracing::warn!("upstream refused request: {e:#}");
        RelayError::Upstream(e)
    })?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(fragments),
    )
        .into_response())
}
