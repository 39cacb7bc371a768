//! Urdu → Roman Urdu transliteration.
//!
//! The deterministic rule-based engine lives in `roman_core`; caller-side
//! history lives in `roman_session`. This crate ties them together behind
//! [`RomanUrdu`].

mod api;
mod trace_init;

pub use api::{EngineError, RomanUrdu};
pub use trace_init::init_tracing;

pub use roman_core::backend::{
    BackendError, FallibleTransliterator, LazyBackend, RuleBasedTransliterator, Transliterator,
    WithFallback,
};
pub use roman_core::engine::{explain, normalize_whitespace, transliterate, Resolution, WordTrace};
pub use roman_core::tables::ScriptTables;
pub use roman_session::{
    HistoryRecord, SessionError, SubmitOutcome, TransliterationHistory, TransliterationSession,
};
