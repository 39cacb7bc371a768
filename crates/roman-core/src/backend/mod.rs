//! Pluggable transliteration backends.
//!
//! Every backend presents the same `text -> text` contract. The rule-based
//! backend is always available; backends that can fail (a learned model that
//! may be missing or may error at inference time) implement
//! `FallibleTransliterator` and are put in front of the rule-based one with
//! `WithFallback`.

mod fallback;
mod lazy;

use std::sync::Arc;

use crate::engine::transliterate_with;
use crate::tables::ScriptTables;

pub use fallback::WithFallback;
pub use lazy::LazyBackend;

/// Infallible single-operation contract seen by callers.
pub trait Transliterator: Send + Sync {
    fn name(&self) -> &str;
    fn transliterate(&self, text: &str) -> String;
}

/// Contract for backends that may be unavailable or fail per call.
pub trait FallibleTransliterator: Send + Sync {
    fn name(&self) -> &str;
    fn try_transliterate(&self, text: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend {backend} unavailable: {reason}")]
    Unavailable { backend: String, reason: String },
    #[error("backend {backend} failed: {reason}")]
    Inference { backend: String, reason: String },
}

/// Dictionary + character-map backend over a shared table set.
#[derive(Debug, Clone)]
pub struct RuleBasedTransliterator {
    tables: Arc<ScriptTables>,
}

impl RuleBasedTransliterator {
    pub const NAME: &'static str = "rule-based";

    pub fn new(tables: Arc<ScriptTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScriptTables {
        &self.tables
    }
}

impl Default for RuleBasedTransliterator {
    fn default() -> Self {
        Self::new(ScriptTables::shared())
    }
}

impl Transliterator for RuleBasedTransliterator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn transliterate(&self, text: &str) -> String {
        transliterate_with(&self.tables, text)
    }
}

impl<T: Transliterator + ?Sized> Transliterator for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn transliterate(&self, text: &str) -> String {
        (**self).transliterate(text)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{BackendError, FallibleTransliterator};

    /// Uppercases its input, or fails every call.
    pub struct StubBackend {
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    impl StubBackend {
        pub fn ok() -> Self {
            Self {
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl FallibleTransliterator for StubBackend {
        fn name(&self) -> &str {
            "stub"
        }

        fn try_transliterate(&self, text: &str) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(BackendError::Inference {
                    backend: "stub".to_string(),
                    reason: "forward pass failed".to_string(),
                })
            } else {
                Ok(text.to_uppercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_based_uses_global_tables() {
        let b = RuleBasedTransliterator::default();
        assert_eq!(b.name(), "rule-based");
        assert_eq!(b.transliterate("السلام علیکم"), "Assalam Alaikum");
        assert_eq!(b.tables().word_count(), 13);
    }

    #[test]
    fn rule_based_with_custom_tables() {
        let tables = ScriptTables::from_toml("[words]\n\"آپ\" = \"Aap\"\n").unwrap();
        let b = RuleBasedTransliterator::new(Arc::new(tables));
        assert_eq!(b.transliterate("آپ  آپ"), "Aap Aap");
        // no character map: everything else passes through
        assert_eq!(b.transliterate("ابد"), "ابد");
    }

    #[test]
    fn arc_dyn_dispatch() {
        let b: Arc<dyn Transliterator> = Arc::new(RuleBasedTransliterator::default());
        assert_eq!(b.name(), "rule-based");
        assert_eq!(b.transliterate("ابد"), "abd");
    }

    #[test]
    fn backend_error_display() {
        let e = BackendError::Unavailable {
            backend: "bilstm".into(),
            reason: "model.pt not found".into(),
        };
        assert_eq!(e.to_string(), "backend bilstm unavailable: model.pt not found");
    }
}
