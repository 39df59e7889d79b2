//! FitB client library: the conversation a user sees, the session that
//! sends it to a relay, and the assembly of the streamed reply.
//!
//! Used by the `fitb` terminal front-end and by tests.

pub use conversation::{APOLOGY, Conversation, GREETING};
pub use decode::Utf8StreamDecoder;
pub use dictation::{Dictation, DictationOptions, NoDictation};
pub use llm::{Role, Turn};
pub use session::{Session, SessionState};
pub use transport::{ByteStream, HttpTransport, Transport};

pub mod conversation;
pub mod decode;
pub mod dictation;
pub mod session;
pub mod transport;

/// Default relay base URL.
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000";

/// Client configuration for reaching a relay.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Relay base URL, without the chat path.
    pub relay_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_owned(),
        }
    }
}
