//! FitB CLI application: runs the chat relay, or chats with a running
//! relay from the terminal.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod repl;
