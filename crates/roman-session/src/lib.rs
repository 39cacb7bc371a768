//! Caller-side session around a transliteration backend.
//!
//! `TransliterationSession` owns everything the presentation layer tracks
//! between calls: the history of (input, output, time) records, the running
//! count of transliterations and the output currently on display. The backend
//! itself stays stateless.

pub mod history;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use roman_core::backend::{RuleBasedTransliterator, Transliterator};
use roman_core::script::{is_word_separator, visible_char_count};
use roman_core::settings::settings;

pub use history::{now_epoch, HistoryRecord, TransliterationHistory};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("input is empty")]
    EmptyInput,
    #[error("input has {len} characters, limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub output: String,
    /// Characters in the input other than ASCII spaces.
    pub char_count: usize,
}

pub struct TransliterationSession {
    backend: Arc<dyn Transliterator>,
    history: TransliterationHistory,
    total_transliterations: u64,
    current_output: Option<String>,
    max_chars: usize,
}

impl TransliterationSession {
    pub fn new(backend: Arc<dyn Transliterator>, history: TransliterationHistory) -> Self {
        Self {
            backend,
            history,
            total_transliterations: 0,
            current_output: None,
            max_chars: settings().input.max_chars,
        }
    }

    /// Session over the rule-based backend with an empty history.
    pub fn rule_based() -> Self {
        Self::new(
            Arc::new(RuleBasedTransliterator::default()),
            TransliterationHistory::new(),
        )
    }

    /// Override the input length limit taken from the settings.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Transliterate `text`, record it and make it the current output.
    ///
    /// Input made only of word separators is rejected before the backend is called, as is
    /// input longer than the configured character limit.
    pub fn submit(&mut self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let _span = debug_span!("submit", backend = self.backend.name()).entered();

        if text.chars().all(is_word_separator) {
            return Err(SessionError::EmptyInput);
        }
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(SessionError::InputTooLong {
                len,
                max: self.max_chars,
            });
        }

        let output = self.backend.transliterate(text);
        self.history.record(text, &output);
        self.total_transliterations += 1;
        self.current_output = Some(output.clone());

        debug!(
            total = self.total_transliterations,
            history_len = self.history.len(),
            "submitted"
        );
        Ok(SubmitOutcome {
            output,
            char_count: visible_char_count(text),
        })
    }

    pub fn current_output(&self) -> Option<&str> {
        self.current_output.as_deref()
    }

    /// Clear the displayed output. History and counters are kept.
    pub fn clear_output(&mut self) {
        self.current_output = None;
    }

    pub fn total_transliterations(&self) -> u64 {
        self.total_transliterations
    }

    pub fn history(&self) -> &TransliterationHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut TransliterationHistory {
        &mut self.history
    }

    pub fn into_history(self) -> TransliterationHistory {
        self.history
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}
