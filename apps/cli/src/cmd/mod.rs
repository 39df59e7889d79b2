//! CLI argument parsing and subcommand dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use chat::Chat;
pub use serve::Serve;

pub mod chat;
pub mod serve;

/// FitB, your personal AI fitness coach.
#[derive(Parser, Debug)]
#[command(name = "fitb", about = "FitB, your personal AI fitness coach")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the chat relay.
    Serve(Serve),
    /// Chat with a running relay.
    Chat(Chat),
}

impl Cli {
    /// Run the selected subcommand.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Serve(cmd) => cmd.run().await,
            Command::Chat(cmd) => cmd.run().await,
        }
    }
}
