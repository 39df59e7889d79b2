//! The visible conversation.

use llm::{Role, Turn};

/// Assistant turn every conversation starts with.
pub const GREETING: &str = "Hi! I'm 💪FitB, your personal AI coach. How can I help you today?";

/// Assistant turn shown when an exchange fails, whatever the cause.
pub const APOLOGY: &str = "I'm sorry, but I encountered an error. Please try again later.";

/// An ordered, append-only sequence of turns.
///
/// Turns are never removed or reordered. The only mutation of an existing
/// turn is appending text to the last one while it is an assistant turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// A conversation holding the given turns.
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    /// A fresh conversation holding only the greeting.
    pub fn seeded() -> Self {
        Self::new(vec![Turn::assistant(GREETING)])
    }

    /// All turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether there are no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Append a turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Append text to the last turn if it is an assistant turn.
    ///
    /// Returns whether the text was appended.
    pub fn append_to_last(&mut self, text: &str) -> bool {
        match self.turns.last_mut() {
            Some(turn) if turn.role == Role::Assistant => {
                turn.content.push_str(text);
                true
            }
            _ => false,
        }
    }
}
