//! Rule-based Urdu → Roman Urdu transliteration core.

pub mod backend;
pub mod engine;
pub mod script;
pub mod settings;
pub mod tables;

pub use backend::{
    BackendError, FallibleTransliterator, LazyBackend, RuleBasedTransliterator, Transliterator,
    WithFallback,
};
pub use engine::{normalize_whitespace, transliterate, transliterate_with};
pub use tables::ScriptTables;
