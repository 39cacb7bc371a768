use std::collections::BTreeMap;

use serde::Deserialize;

use crate::script::is_word_separator;

#[derive(Deserialize)]
struct TablesConfig {
    #[serde(default)]
    characters: BTreeMap<String, String>,
    #[serde(default)]
    words: BTreeMap<String, String>,
}

/// Validated contents of a tables TOML document.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet {
    pub characters: BTreeMap<char, String>,
    pub words: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TablesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[characters] and [words] tables are both empty")]
    Empty,
    #[error("character key must be a single code point: {0:?}")]
    MultiCodepointKey(String),
    #[error("character key is whitespace: {0:?}")]
    WhitespaceKey(String),
    #[error("word key is empty or contains whitespace: {0:?}")]
    InvalidWordKey(String),
    #[error("empty value for word: {0}")]
    EmptyWordValue(String),
    #[error("script tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into character and word tables.
///
/// Character values may be empty (the letter is dropped from the output);
/// word values may not.
pub fn parse_tables_toml(toml_str: &str) -> Result<TableSet, TablesConfigError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TablesConfigError::Parse(e.to_string()))?;

    if config.characters.is_empty() && config.words.is_empty() {
        return Err(TablesConfigError::Empty);
    }

    let mut characters = BTreeMap::new();
    for (key, value) in config.characters {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TablesConfigError::MultiCodepointKey(key)),
        };
        if is_word_separator(c) {
            return Err(TablesConfigError::WhitespaceKey(key));
        }
        characters.insert(c, value);
    }

    for (key, value) in &config.words {
        if key.is_empty() || key.chars().any(is_word_separator) {
            return Err(TablesConfigError::InvalidWordKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TablesConfigError::EmptyWordValue(key.clone()));
        }
    }

    Ok(TableSet {
        characters,
        words: config.words,
    })
}
