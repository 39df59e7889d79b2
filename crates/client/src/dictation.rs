//! Optional speech-to-text input.
//!
//! Dictation only fills the pending input; it never submits. Runtimes
//! without a recognizer use [`NoDictation`].

use anyhow::Result;

/// Recognition settings: single-shot, final results only, US English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictationOptions {
    /// BCP 47 language tag.
    pub language: String,
    /// Keep listening after the first result.
    pub continuous: bool,
    /// Report partial hypotheses.
    pub interim_results: bool,
}

impl Default for DictationOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_owned(),
            continuous: false,
            interim_results: false,
        }
    }
}

/// A speech recognizer.
pub trait Dictation {
    /// Whether recognition is possible in this environment.
    fn is_available(&self) -> bool {
        true
    }

    /// Listen once and return the transcript, if anything was recognized.
    fn recognize(
        &mut self,
        options: &DictationOptions,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// Dictation for environments without a recognizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictation;

impl Dictation for NoDictation {
    fn is_available(&self) -> bool {
        false
    }

    async fn recognize(&mut self, _options: &DictationOptions) -> Result<Option<String>> {
        Ok(None)
    }
}
