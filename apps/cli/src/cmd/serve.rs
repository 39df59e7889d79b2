//! Relay server command.

use anyhow::Result;
use clap::Args;
use relay::RelayConfig;
use std::path::PathBuf;

/// Run the chat relay.
#[derive(Args, Debug)]
pub struct Serve {
    /// Config file. Defaults to `~/.config/fitb/relay.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address (host:port). Overrides `server.bind`.
    #[arg(long)]
    pub bind: Option<String>,
}

impl Serve {
    /// Load config, start the relay and serve until ctrl-c.
    pub async fn run(self) -> Result<()> {
        let mut config = RelayConfig::resolve(self.config.as_deref())?;
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }

        let handle = relay::serve(&config).await?;
        println!("FitB relay listening on {}", handle.local_url());

        tokio::signal::ctrl_c().await?;
        tracing::info!("received ctrl-c, shutting down");
        handle.shutdown().await?;
        tracing::info!("relay shut down");
        Ok(())
    }
}
