//! Upstream protocol types for the FitB relay.
//!
//! Provides the conversation [`Turn`], the OpenAI-compatible chat
//! completions [`Request`] and [`StreamChunk`] wire types, an incremental
//! [`SseDecoder`], and [`HttpProvider`], the bearer-authenticated HTTP
//! transport implementing the [`Model`] trait.

pub use http::{HttpProvider, endpoint};
pub use message::{Role, Turn};
pub use provider::{Chunks, Model};
pub use request::Request;
pub use reqwest::{self, Client};
pub use sse::{DONE, SseDecoder};
pub use stream::{Choice, Delta, StreamChunk, UpstreamError};

mod http;
mod message;
mod provider;
mod request;
mod sse;
mod stream;
