mod proptest_session;

use std::sync::Arc;

use roman_core::backend::{BackendError, FallibleTransliterator, WithFallback};

use super::{TransliterationHistory, TransliterationSession};

/// Backend standing in for a learned model that is never available.
struct MissingModel;

impl FallibleTransliterator for MissingModel {
    fn name(&self) -> &str {
        "bilstm"
    }

    fn try_transliterate(&self, _text: &str) -> Result<String, BackendError> {
        Err(BackendError::Unavailable {
            backend: "bilstm".to_string(),
            reason: "model.pt not found".to_string(),
        })
    }
}

pub(super) fn make_session() -> TransliterationSession {
    TransliterationSession::rule_based()
}

pub(super) fn make_fallback_session(max_records: usize) -> TransliterationSession {
    TransliterationSession::new(
        Arc::new(WithFallback::new(MissingModel)),
        TransliterationHistory::with_max_records(max_records),
    )
}
