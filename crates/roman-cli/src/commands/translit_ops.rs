use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use serde::Serialize;

use roman_core::engine::{Resolution, WordTrace};
use roman_core::script::{has_urdu_letters, is_word_separator};
use roman_urdu::RomanUrdu;

use super::load_engine;

#[derive(Serialize)]
struct TranslitRecord<'a> {
    input: &'a str,
    output: &'a str,
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    line: usize,
    input: &'a str,
    output: &'a str,
}

pub fn translit_cmd(text: Option<&str>, tables: Option<&str>, json: bool) {
    let engine = load_engine(tables);
    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    };
    let output = engine.transliterate(&input);
    if let Some(note) = script_note(&input) {
        eprintln!("{note}");
    }
    if json {
        let record = TranslitRecord {
            input: &input,
            output: &output,
        };
        println!(
            "{}",
            die!(serde_json::to_string(&record), "Error encoding JSON: {}")
        );
    } else {
        println!("{output}");
    }
}

pub fn explain_cmd(text: &str, tables: Option<&str>, json: bool) {
    let engine = load_engine(tables);
    let traces = engine.explain(text);
    if let Some(note) = script_note(text) {
        eprintln!("{note}");
    }
    if json {
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&traces),
                "Error encoding JSON: {}"
            )
        );
        return;
    }
    if traces.is_empty() {
        println!("(no words)");
        return;
    }
    for trace in &traces {
        println!("{}", format_trace(trace));
    }
}

/// Warning for non-blank input that has nothing in the Urdu script.
pub(crate) fn script_note(text: &str) -> Option<String> {
    if text.chars().all(is_word_separator) || has_urdu_letters(text) {
        return None;
    }
    Some(format!(
        "note: {:?} contains no Urdu letters; only custom table entries can change it",
        text.trim()
    ))
}

pub(crate) fn format_trace(trace: &WordTrace) -> String {
    let how = match &trace.resolution {
        Resolution::Dictionary => "dictionary".to_string(),
        Resolution::Characters { unmapped } if unmapped.is_empty() => "characters".to_string(),
        Resolution::Characters { unmapped } => {
            let list: Vec<String> = unmapped.iter().map(|c| format!("{c:?}")).collect();
            format!("characters, passed through: {}", list.join(" "))
        }
    };
    format!("{} → {}  [{how}]", trace.word, trace.output)
}

pub fn batch_cmd(input_file: &str, output_file: &str, tables: Option<&str>) {
    let engine = load_engine(tables);
    let reader = BufReader::new(die!(
        File::open(input_file),
        "Error opening {input_file}: {}"
    ));
    let mut writer = BufWriter::new(die!(
        File::create(output_file),
        "Error creating {output_file}: {}"
    ));
    let count = die!(
        run_batch(&engine, reader, &mut writer),
        "Error processing batch: {}"
    );
    die!(writer.flush(), "Error writing {output_file}: {}");
    eprintln!("Wrote {count} records to {output_file}");
}

/// Transliterate every line of `reader` and write one JSON object per line.
pub fn run_batch<R: BufRead, W: Write>(
    engine: &RomanUrdu,
    reader: R,
    mut writer: W,
) -> io::Result<usize> {
    let mut count = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let output = engine.transliterate(&line);
        let record = BatchRecord {
            line: i + 1,
            input: &line,
            output: &output,
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use roman_core::engine::explain;

    use super::*;

    #[test]
    fn batch_writes_jsonl() {
        let engine = RomanUrdu::new();
        let input = "السلام علیکم\n\nابد\n";
        let mut out = Vec::new();
        let n = run_batch(&engine, input.as_bytes(), &mut out).unwrap();
        assert_eq!(n, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["output"], "Assalam Alaikum");
        assert_eq!(lines[1]["output"], "");
        assert_eq!(lines[2]["line"], 3);
        assert_eq!(lines[2]["output"], "abd");
    }

    #[test]
    fn note_only_for_non_urdu_input() {
        assert_eq!(script_note("کیا ہے"), None);
        assert_eq!(script_note("hello دوست"), None);
        assert_eq!(script_note("   "), None);
        assert!(script_note(" hello ").unwrap().contains("\"hello\""));
        // punctuation and digits alone are not letters
        assert!(script_note("۔؟ ۳").is_some());
    }

    #[test]
    fn trace_formatting() {
        let traces = explain("شکریہ ابد؟ ابد");
        assert_eq!(format_trace(&traces[0]), "شکریہ → shukriya  [dictionary]");
        assert_eq!(
            format_trace(&traces[1]),
            "ابد؟ → abd؟  [characters, passed through: '؟']"
        );
        assert_eq!(format_trace(&traces[2]), "ابد → abd  [characters]");
    }
}
