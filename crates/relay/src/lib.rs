//! FitB relay. Accepts a conversation over HTTP, prepends the fixed
//! system prompt, forwards it to an OpenAI-compatible completions API and
//! relays the generated text back as a plain chunked byte stream.

pub mod config;
pub mod error;
pub mod prompt;
pub mod relay;
pub mod router;
pub mod serve;
pub mod utils;

pub use config::RelayConfig;
pub use error::RelayError;
pub use prompt::SYSTEM_PROMPT;
pub use relay::{Fragments, Relay};
pub use router::{CHAT_PATH, router};
pub use serve::{ServeHandle, serve, serve_relay};
