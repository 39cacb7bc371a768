use std::path::Path;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};
use unicode_width::UnicodeWidthStr;

use roman_session::{HistoryRecord, TransliterationHistory};

use super::load_engine;

pub fn history_show(file: &str) {
    let history = die!(
        TransliterationHistory::open(Path::new(file)),
        "Error opening history: {}"
    );
    if history.is_empty() {
        println!("(empty)");
        return;
    }
    for line in format_history(&history) {
        println!("{line}");
    }
}

pub fn history_add(file: &str, text: &str, tables: Option<&str>) {
    let engine = load_engine(tables);
    let mut session = die!(
        engine.open_session(Path::new(file)),
        "Error opening history: {}"
    );
    let outcome = die!(session.submit(text), "Error: {}");
    die!(
        session.history().save(Path::new(file)),
        "Error saving history: {}"
    );
    println!("{}", outcome.output);
}

pub fn history_clear(file: &str) {
    let mut history = die!(
        TransliterationHistory::open(Path::new(file)),
        "Error opening history: {}"
    );
    let removed = history.len();
    history.clear();
    die!(history.save(Path::new(file)), "Error saving history: {}");
    println!("Removed {removed} records");
}

/// One aligned line per record, oldest first: time, input, output.
pub(crate) fn format_history(history: &TransliterationHistory) -> Vec<String> {
    let input_width = history
        .iter()
        .map(|r| UnicodeWidthStr::width(flatten(&r.input).as_str()))
        .max()
        .unwrap_or(0);
    history
        .iter()
        .map(|r| format_record(r, input_width))
        .collect()
}

fn format_record(record: &HistoryRecord, input_width: usize) -> String {
    let input = flatten(&record.input);
    let pad = input_width.saturating_sub(UnicodeWidthStr::width(input.as_str()));
    format!(
        "{}  {}{}  {}",
        format_timestamp(record.timestamp),
        input,
        " ".repeat(pad),
        record.output
    )
}

fn flatten(input: &str) -> String {
    input.replace(['\n', '\r', '\t'], " ")
}

/// RFC 3339 in the local offset when it can be determined, UTC otherwise.
pub(crate) fn format_timestamp(epoch_secs: u64) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    i64::try_from(epoch_secs)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|t| t.to_offset(offset).format(&Rfc3339).ok())
        .unwrap_or_else(|| epoch_secs.to_string())
}
