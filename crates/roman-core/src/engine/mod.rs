//! Rule-based Urdu → Roman Urdu transliteration.
//!
//! Input is whitespace-normalized and split into words. Each word is looked up
//! whole in the dictionary; on a miss every character goes through the
//! character map, and characters without an entry are copied as-is. The
//! engine never fails.

mod explain;

use tracing::{debug, debug_span};

use crate::script::is_word_separator;
use crate::tables::ScriptTables;

pub use explain::{explain, explain_with, Resolution, WordTrace};

/// Trim both ends and collapse every run of word separators (see
/// [`is_word_separator`]) into one ASCII space.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in split_words(text) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Transliterate using the global tables.
pub fn transliterate(text: &str) -> String {
    transliterate_with(ScriptTables::global(), text)
}

/// Transliterate using an explicit table instance.
pub fn transliterate_with(tables: &ScriptTables, text: &str) -> String {
    let _span = debug_span!("transliterate", input_len = text.len()).entered();

    let normalized = normalize_whitespace(text);
    let mut out = String::with_capacity(normalized.len());
    for (i, word) in split_words(&normalized).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&transliterate_word(tables, word));
    }

    debug!(output_len = out.len(), "transliterated");
    out
}

/// Transliterate a single word: dictionary first, then character by character.
pub fn transliterate_word(tables: &ScriptTables, word: &str) -> String {
    if let Some(roman) = tables.word_roman(word) {
        return roman.to_string();
    }
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match tables.char_roman(c) {
            Some(roman) => out.push_str(roman),
            None => out.push(c),
        }
    }
    out
}

/// Maximal runs of non-separator characters. Blank input yields no words.
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|w| !w.is_empty())
}
