//! Interactive chat REPL command.

use crate::repl::ChatRepl;
use anyhow::Result;
use clap::Args;
use client::{ClientConfig, DEFAULT_RELAY_URL, HttpTransport};

/// Chat with a running relay.
#[derive(Args, Debug)]
pub struct Chat {
    /// Relay base URL.
    #[arg(long, default_value = DEFAULT_RELAY_URL)]
    pub url: String,
}

impl Chat {
    /// Enter the interactive REPL against the relay at `url`.
    pub async fn run(self) -> Result<()> {
        let config = ClientConfig { relay_url: self.url };
        let transport = HttpTransport::new(llm::Client::new(), &config);
        tracing::debug!("chatting via {}", transport.url());

        let mut repl = ChatRepl::new(transport)?;
        repl.run().await
    }
}
