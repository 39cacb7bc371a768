use serde::Serialize;

use crate::tables::ScriptTables;

use super::{normalize_whitespace, split_words, transliterate_word};

/// How a single word was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Whole-word dictionary hit.
    Dictionary,
    /// Character-by-character mapping. `unmapped` lists the characters that
    /// were copied through unchanged, in input order.
    Characters { unmapped: Vec<char> },
}

/// Diagnostic record for one word of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTrace {
    pub word: String,
    pub output: String,
    pub resolution: Resolution,
}

/// Explain using the global tables.
pub fn explain(text: &str) -> Vec<WordTrace> {
    explain_with(ScriptTables::global(), text)
}

/// Per-word resolution trace. Joining the `output` fields with single spaces
/// reproduces `transliterate_with(tables, text)`.
pub fn explain_with(tables: &ScriptTables, text: &str) -> Vec<WordTrace> {
    let normalized = normalize_whitespace(text);
    split_words(&normalized)
        .map(|word| {
            let resolution = if tables.contains_word(word) {
                Resolution::Dictionary
            } else {
                Resolution::Characters {
                    unmapped: word.chars().filter(|&c| !tables.contains_char(c)).collect(),
                }
            };
            WordTrace {
                word: word.to_string(),
                output: transliterate_word(tables, word),
                resolution,
            }
        })
        .collect()
}
