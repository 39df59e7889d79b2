//! Streaming response types for OpenAI-compatible chat completions.

use serde::Deserialize;
use std::fmt;

/// A streaming chat completion chunk
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StreamChunk {
    /// The chunk id
    #[serde(default)]
    pub id: String,

    /// The model that produced the chunk
    #[serde(default)]
    pub model: String,

    /// The list of completion choices (with delta content)
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl StreamChunk {
    /// Create a chunk carrying a single content delta
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                delta: Delta {
                    content: Some(content.into()),
                    ..Default::default()
                },
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// Get the content of the first choice, if it carries any text
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Get the reason the model stopped generating
    pub fn finish_reason(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.finish_reason.as_deref())
    }
}

/// A completion choice
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Choice {
    /// The index of the choice
    #[serde(default)]
    pub index: u32,

    /// The incremental message delta
    #[serde(default)]
    pub delta: Delta,

    /// Why generation stopped, set on the final chunk
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// An incremental message delta
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Delta {
    /// The role, usually only present on the first chunk
    #[serde(default)]
    pub role: Option<String>,

    /// The content fragment
    #[serde(default)]
    pub content: Option<String>,
}

/// An error object reported by the provider inside the event stream.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamError {
    /// Human readable message
    #[serde(default)]
    pub message: String,

    /// Provider specific error code
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "upstream error ({code}): {}", self.message),
            None => write!(f, "upstream error: {}", self.message),
        }
    }
}

impl std::error::Error for UpstreamError {}
