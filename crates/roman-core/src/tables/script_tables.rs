use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::config::{parse_tables_toml, TableSet, TablesConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable character map and word dictionary.
#[derive(Debug)]
pub struct ScriptTables {
    characters: HashMap<char, String>,
    words: HashMap<String, String>,
}

impl ScriptTables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TablesConfigError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TablesConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ScriptTables {
        &**Self::global_arc()
    }

    /// The global singleton as a shareable handle.
    pub fn shared() -> Arc<ScriptTables> {
        Arc::clone(Self::global_arc())
    }

    fn global_arc() -> &'static Arc<ScriptTables> {
        static INSTANCE: OnceLock<Arc<ScriptTables>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let set = parse_tables_toml(toml_str).expect("script tables TOML must be valid");
            Arc::new(ScriptTables::from_set(set))
        })
    }

    /// Build a standalone instance, independent of the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, TablesConfigError> {
        parse_tables_toml(toml_str).map(Self::from_set)
    }

    pub fn from_set(set: TableSet) -> Self {
        Self {
            characters: set.characters.into_iter().collect(),
            words: set.words.into_iter().collect(),
        }
    }

    pub fn char_roman(&self, c: char) -> Option<&str> {
        self.characters.get(&c).map(String::as_str)
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.characters.contains_key(&c)
    }

    pub fn word_roman(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Dictionary entries in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Character entries in unspecified order.
    pub fn characters(&self) -> impl Iterator<Item = (char, &str)> {
        self.characters.iter().map(|(&k, v)| (k, v.as_str()))
    }
}
