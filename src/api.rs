use std::fs;
use std::path::Path;
use std::sync::Arc;

use roman_core::backend::{
    FallibleTransliterator, RuleBasedTransliterator, Transliterator, WithFallback,
};
use roman_core::engine::{explain_with, WordTrace};
use roman_core::settings::{self, SettingsError};
use roman_core::tables::{ScriptTables, TablesConfigError};
use roman_session::{TransliterationHistory, TransliterationSession};
use tracing::{debug, debug_span};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tables: {0}")]
    Tables(#[from] TablesConfigError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Entry point for callers: a backend plus the tables its rule-based
/// fallback runs on.
pub struct RomanUrdu {
    backend: Arc<dyn Transliterator>,
    tables: Arc<ScriptTables>,
}

impl Default for RomanUrdu {
    fn default() -> Self {
        Self::new()
    }
}

impl RomanUrdu {
    /// Rule-based engine over the global tables.
    pub fn new() -> Self {
        Self::with_tables(ScriptTables::shared())
    }

    /// Rule-based engine over a caller-supplied table set.
    pub fn with_tables(tables: Arc<ScriptTables>) -> Self {
        Self {
            backend: Arc::new(RuleBasedTransliterator::new(Arc::clone(&tables))),
            tables,
        }
    }

    /// Rule-based engine over tables read from a TOML file.
    pub fn from_tables_file(path: &Path) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path)?;
        let tables = ScriptTables::from_toml(&content)?;
        Ok(Self::with_tables(Arc::new(tables)))
    }

    /// Put a fallible backend in front; the rule-based engine over this
    /// instance's tables answers whenever it fails.
    pub fn with_primary<P: FallibleTransliterator + 'static>(self, primary: P) -> Self {
        let fallback = RuleBasedTransliterator::new(Arc::clone(&self.tables));
        Self {
            backend: Arc::new(WithFallback::with_fallback(primary, fallback)),
            tables: self.tables,
        }
    }

    pub fn transliterate(&self, text: &str) -> String {
        let _span = debug_span!("engine_transliterate", backend = self.backend.name()).entered();
        self.backend.transliterate(text)
    }

    /// Per-word trace of the rule-based resolution over this instance's tables.
    pub fn explain(&self, text: &str) -> Vec<WordTrace> {
        explain_with(&self.tables, text)
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn tables(&self) -> &ScriptTables {
        &self.tables
    }

    pub fn create_session(&self) -> TransliterationSession {
        TransliterationSession::new(Arc::clone(&self.backend), TransliterationHistory::new())
    }

    /// Session whose history is loaded from `history_path` (empty if the file
    /// does not exist yet).
    pub fn open_session(&self, history_path: &Path) -> Result<TransliterationSession, EngineError> {
        let _span = debug_span!("open_session", path = %history_path.display()).entered();
        let history = TransliterationHistory::open(history_path)?;
        debug!(records = history.len(), "history loaded");
        Ok(TransliterationSession::new(
            Arc::clone(&self.backend),
            history,
        ))
    }

    /// Install settings from a TOML file. Must run before anything reads the
    /// settings.
    pub fn load_settings_file(path: &Path) -> Result<(), EngineError> {
        let content = fs::read_to_string(path)?;
        settings::init_custom(content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use roman_core::backend::BackendError;

    use super::*;

    struct Broken;

    impl FallibleTransliterator for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn try_transliterate(&self, _text: &str) -> Result<String, BackendError> {
            Err(BackendError::Inference {
                backend: "broken".into(),
                reason: "nan logits".into(),
            })
        }
    }

    #[test]
    fn default_engine() {
        let e = RomanUrdu::new();
        assert_eq!(e.backend_name(), "rule-based");
        assert_eq!(e.transliterate("السلام علیکم"), "Assalam Alaikum");
        assert_eq!(e.transliterate(""), "");
    }

    #[test]
    fn tables_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[characters]\n\"ب\" = \"bh\"\n").unwrap();
        let e = RomanUrdu::from_tables_file(f.path()).unwrap();
        assert_eq!(e.transliterate("بب ا"), "bhbh ا");
        assert_eq!(e.tables().character_count(), 1);
    }

    #[test]
    fn tables_file_errors() {
        let missing = RomanUrdu::from_tables_file(Path::new("/nonexistent/tables.toml"));
        assert!(matches!(missing, Err(EngineError::Io(_))));

        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[words]\n\"کیا\" = \"\"").unwrap();
        let invalid = RomanUrdu::from_tables_file(f.path());
        assert!(matches!(invalid, Err(EngineError::Tables(_))));
    }

    #[test]
    fn primary_failure_uses_instance_tables() {
        let tables = ScriptTables::from_toml("[words]\n\"آپ\" = \"Aap\"\n").unwrap();
        let e = RomanUrdu::with_tables(Arc::new(tables)).with_primary(Broken);
        assert_eq!(e.backend_name(), "broken");
        assert_eq!(e.transliterate("آپ"), "Aap");
    }

    #[test]
    fn explain_matches_transliterate() {
        let e = RomanUrdu::new();
        let text = "میرا نام  Sara ہے؟";
        let joined: Vec<String> = e.explain(text).into_iter().map(|t| t.output).collect();
        assert_eq!(joined.join(" "), e.transliterate(text));
    }

    #[test]
    fn session_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.ruhs");
        let e = RomanUrdu::new();

        let mut s = e.open_session(&path).unwrap();
        assert!(s.history().is_empty());
        s.submit("دوست").unwrap();
        s.history().save(&path).unwrap();

        let s2 = e.open_session(&path).unwrap();
        assert_eq!(s2.history().latest().unwrap().output, "dost");
        assert_eq!(s2.total_transliterations(), 0);
    }

    #[test]
    fn create_session_shares_backend() {
        let e = RomanUrdu::new().with_primary(Broken);
        let mut s = e.create_session();
        assert_eq!(s.backend_name(), "broken");
        assert_eq!(s.submit("مدد").unwrap().output, "madad");
    }
}
