//! Interactive chat REPL with streaming output and persistent history.

use anyhow::Result;
use client::{Conversation, Role, Session, Transport};
use rustyline::error::ReadlineError;
use std::{io::Write, path::PathBuf};

/// Interactive chat REPL, generic over the relay transport.
pub struct ChatRepl<T: Transport> {
    session: Session,
    transport: T,
    editor: rustyline::DefaultEditor,
    history_path: Option<PathBuf>,
}

impl<T: Transport> ChatRepl<T> {
    /// Create a new REPL over a freshly seeded session.
    pub fn new(transport: T) -> Result<Self> {
        let mut editor = rustyline::DefaultEditor::new()?;
        let history_path = history_file_path();
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }
        Ok(Self {
            session: Session::new(),
            transport,
            editor,
            history_path,
        })
    }

    /// Run the interactive REPL loop.
    pub async fn run(&mut self) -> Result<()> {
        println!("FitB chat (Ctrl+D to exit)");
        println!("---");
        for turn in self.session.conversation().turns() {
            if turn.role == Role::Assistant {
                println!("{}", turn.content);
            }
        }

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line.as_str());

                    let mut printer = TurnPrinter::default();
                    self.session
                        .submit(&line, &self.transport, |c| printer.render(c))
                        .await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.save_history();
        Ok(())
    }

    /// Save readline history to disk.
    fn save_history(&mut self) {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }
    }
}

/// Resolve the history file path at `~/.config/fitb/history`.
fn history_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fitb").join("history"))
}

/// Prints assistant turns incrementally as the conversation grows.
///
/// Only the text not yet printed goes to stdout; a new assistant turn
/// (the apology after a partial reply) starts on a fresh line.
#[derive(Debug, Default)]
pub struct TurnPrinter {
    turn: Option<usize>,
    printed: usize,
}

impl TurnPrinter {
    /// Print whatever the last assistant turn gained since the last call.
    pub fn render(&mut self, conversation: &Conversation) {
        let mut out = std::io::stdout().lock();
        let _ = self.write(conversation, &mut out);
        out.flush().ok();
    }

    /// Write the unprinted tail of the last assistant turn to `out`.
    pub fn write(&mut self, conversation: &Conversation, out: &mut impl Write) -> Result<()> {
        let index = conversation.len().saturating_sub(1);
        let Some(turn) = conversation.last() else {
            return Ok(());
        };
        if turn.role != Role::Assistant {
            return Ok(());
        }

        if self.turn != Some(index) {
            if self.printed > 0 {
                writeln!(out)?;
            }
            self.turn = Some(index);
            self.printed = 0;
        }
        if let Some(tail) = turn.content.get(self.printed..) {
            write!(out, "{tail}")?;
            self.printed = turn.content.len();
        }
        Ok(())
    }
}
