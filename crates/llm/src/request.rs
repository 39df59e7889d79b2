//! OpenAI-compatible chat completions request body.

use crate::Turn;
use serde::Serialize;

/// Chat completions request body.
///
/// Only the fields the relay sends: the model identifier, the turn list,
/// and the streaming flag.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// The turns to send, in conversation order.
    pub messages: Vec<Turn>,
    /// Whether to stream the response.
    pub stream: bool,
}

impl Request {
    /// Create a non-streaming request for the given model.
    pub fn new(model: impl Into<String>, messages: Vec<Turn>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
        }
    }

    /// Ask the upstream to stream its completion token by token.
    pub fn stream(mut self) -> Self {
        self.stream = true;
        self
    }
}
