//! The client session.
//!
//! A session owns one conversation and moves between two states: `Idle`,
//! where input is accepted, and `Awaiting`, while a reply is streaming
//! into the last turn. There is no cancellation; a submission made while
//! awaiting is refused.

use crate::{
    APOLOGY, Conversation, Dictation, DictationOptions, Transport, Utf8StreamDecoder,
};
use anyhow::Result;
use futures_util::StreamExt;
use llm::Turn;

/// Whether a reply is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for a submission.
    #[default]
    Idle,
    /// A reply is streaming into the last turn.
    Awaiting,
}

impl SessionState {
    /// `Idle -> Awaiting`; `None` if already awaiting.
    pub fn begin(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Awaiting),
            Self::Awaiting => None,
        }
    }

    /// `Awaiting -> Idle`; `None` if nothing is in flight.
    pub fn finish(self) -> Option<Self> {
        match self {
            Self::Awaiting => Some(Self::Idle),
            Self::Idle => None,
        }
    }
}

/// One user's chat session with the relay.
#[derive(Debug)]
pub struct Session {
    conversation: Conversation,
    state: SessionState,
    pending: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session over a freshly seeded conversation.
    pub fn new() -> Self {
        Self::with_conversation(Conversation::seeded())
    }

    /// A session over an existing conversation.
    pub fn with_conversation(conversation: Conversation) -> Self {
        Self {
            conversation,
            state: SessionState::Idle,
            pending: String::new(),
        }
    }

    /// The visible conversation.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a reply is in flight.
    pub fn is_awaiting(&self) -> bool {
        self.state == SessionState::Awaiting
    }

    /// Whether the input control accepts submissions.
    pub fn input_enabled(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// The text waiting in the input control.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replace the text waiting in the input control.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Start an exchange.
    ///
    /// Refused (`None`, nothing changes) when `text` is blank or a reply is
    /// already in flight. Otherwise appends the user turn and an empty
    /// assistant turn, enters `Awaiting`, clears the pending input and
    /// returns the turns to send: everything but the new assistant turn.
    pub fn begin(&mut self, text: &str) -> Option<Vec<Turn>> {
        if text.trim().is_empty() {
            return None;
        }
        let Some(next) = self.state.begin() else {
            tracing::debug!("submission refused while awaiting a reply");
            return None;
        };

        self.state = next;
        self.pending.clear();
        self.conversation.push(Turn::user(text));
        let history = self.conversation.turns().to_vec();
        self.conversation.push(Turn::assistant(""));
        Some(history)
    }

    /// Append a reply fragment to the assistant turn in flight.
    pub fn apply(&mut self, fragment: &str) {
        if !self.is_awaiting() {
            tracing::debug!("dropping fragment received while idle");
            return;
        }
        self.conversation.append_to_last(fragment);
    }

    /// Complete the exchange in flight.
    pub fn finish(&mut self) {
        if let Some(next) = self.state.finish() {
            self.state = next;
        }
    }

    /// Fail the exchange in flight and show the apology.
    ///
    /// An assistant turn that received nothing is filled with the apology;
    /// one holding a partial reply is kept and the apology follows it.
    pub fn fail(&mut self) {
        let Some(next) = self.state.finish() else {
            return;
        };
        self.state = next;

        let untouched = self
            .conversation
            .last()
            .is_some_and(|turn| turn.content.is_empty());
        if !(untouched && self.conversation.append_to_last(APOLOGY)) {
            self.conversation.push(Turn::assistant(APOLOGY));
        }
    }

    /// Submit `text` and stream the reply into the conversation.
    ///
    /// `render` sees the conversation once the new turns are appended,
    /// after every received fragment, and once the exchange has settled.
    /// Returns whether the submission was accepted.
    pub async fn submit<T: Transport>(
        &mut self,
        text: &str,
        transport: &T,
        mut render: impl FnMut(&Conversation),
    ) -> bool {
        let Some(history) = self.begin(text) else {
            return false;
        };
        render(&self.conversation);

        match self.exchange(&history, transport, &mut render).await {
            Ok(()) => self.finish(),
            Err(e) => {
                tracing::warn!("exchange failed: {e:#}");
                self.fail();
            }
        }
        render(&self.conversation);
        true
    }

    /// Submit the pending input.
    pub async fn submit_pending<T: Transport>(
        &mut self,
        transport: &T,
        render: impl FnMut(&Conversation),
    ) -> bool {
        let text = self.pending.clone();
        self.submit(&text, transport, render).await
    }

    /// Replace the pending input with a dictated transcript.
    ///
    /// Best effort: an unavailable recognizer, an empty result or a
    /// recognition error leave the pending input untouched. Returns
    /// whether the input was replaced.
    pub async fn dictate<D: Dictation>(&mut self, dictation: &mut D) -> bool {
        if !dictation.is_available() {
            tracing::debug!("dictation unavailable");
            return false;
        }
        match dictation.recognize(&DictationOptions::default()).await {
            Ok(Some(transcript)) => {
                self.pending = transcript;
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::debug!("dictation failed: {e:#}");
                false
            }
        }
    }

    async fn exchange<T: Transport>(
        &mut self,
        history: &[Turn],
        transport: &T,
        render: &mut impl FnMut(&Conversation),
    ) -> Result<()> {
        let mut body = transport.send(history).await?;
        let mut decoder = Utf8StreamDecoder::new();
        while let Some(chunk) = body.next().await {
            let text = decoder.decode(&chunk?);
            if !text.is_empty() {
                self.apply(&text);
                render(&self.conversation);
            }
        }

        let tail = decoder.finish();
        if !tail.is_empty() {
            self.apply(&tail);
            render(&self.conversation);
        }
        Ok(())
    }
}
