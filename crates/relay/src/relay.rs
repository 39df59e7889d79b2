//! The streaming relay.
//!
//! One inbound conversation becomes exactly one upstream streamed request.
//! Every non-empty content delta is forwarded as soon as it arrives, in
//! arrival order, without buffering, merging or re-chunking.

use crate::SYSTEM_PROMPT;
use anyhow::Result;
use futures_util::{StreamExt, stream::BoxStream};
use llm::{Chunks, Model, Request, Turn};
use std::sync::Arc;

/// Text fragments of one assistant reply, in upstream arrival order.
pub type Fragments = BoxStream<'static, Result<String>>;

/// Forwards conversations to a [`Model`] behind the fixed system prompt.
///
/// Holds no per-request state; clones share the provider handle.
#[derive(Clone)]
pub struct Relay<M: Model> {
    model: M,
    model_id: Arc<str>,
}

impl<M: Model> Relay<M> {
    /// Create a relay that requests completions from `model_id`.
    pub fn new(model: M, model_id: impl Into<Arc<str>>) -> Self {
        Self {
            model,
            model_id: model_id.into(),
        }
    }

    /// The upstream model identifier.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Build the upstream turn list: the system turn, then the caller's
    /// turns unmodified and in order.
    pub fn conversation(turns: Vec<Turn>) -> Vec<Turn> {
        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(Turn::system(SYSTEM_PROMPT));
        messages.extend(turns);
        messages
    }

    /// Open the upstream stream for `turns` and return its text fragments.
    ///
    /// Fails when the upstream refuses the request. Errors raised while
    /// streaming end the fragment stream with that error.
    pub async fn relay(&self, turns: Vec<Turn>) -> Result<Fragments> {
        let messages = Self::conversation(turns);
        let request = Request::new(self.model_id.as_ref(), messages).stream();
        let chunks = self.model.stream(request).await?;
        Ok(fragments(chunks))
    }
}

/// Extract the non-empty content deltas of `chunks`.
///
/// Chunks without text (role announcements, finish markers, usage) emit
/// nothing. The first error is passed through and ends the stream.
pub fn fragments(chunks: Chunks) -> Fragments {
    let mut failed = false;
    chunks
        .take_while(move |chunk| {
            let open = !failed;
            failed = chunk.is_err();
            futures_util::future::ready(open)
        })
        .filter_map(|chunk| async move {
            match chunk {
                Ok(chunk) => {
                    if let Some(reason) = chunk.finish_reason() {
                        tracing::debug!("upstream finished: {reason}");
                    }
                    chunk.content().map(|text| Ok(text.to_owned()))
                }
                Err(e) => {
                    tracing::warn!("upstream stream failed: {e:#}");
                    Some(Err(e))
                }
            }
        })
        .boxed()
}
