use std::path::Path;

use clap::{Parser, Subcommand};

use roman_cli::commands::{config_ops, history_ops, translit_ops};

#[derive(Parser)]
#[command(name = "urdutool", about = "Urdu to Roman Urdu transliteration tool")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace log into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin when TEXT is omitted)
    Translit {
        /// Urdu text
        text: Option<String>,
        /// Custom tables TOML
        #[arg(long)]
        tables: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how each word was resolved
    Explain {
        /// Urdu text
        text: String,
        /// Custom tables TOML
        #[arg(long)]
        tables: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Transliterate a file line by line into JSONL
    Batch {
        /// Input file (one text per line)
        input_file: String,
        /// Output JSONL file
        output_file: String,
        /// Custom tables TOML
        #[arg(long)]
        tables: Option<String>,
    },
    /// Export default tables as TOML
    TablesExport,
    /// Validate a custom tables TOML file
    TablesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Inspect or update a history file
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Print all records, oldest first
    Show {
        /// History file
        file: String,
    },
    /// Transliterate TEXT and append it to the history file
    Add {
        /// History file (created if missing)
        file: String,
        /// Urdu text
        text: String,
        /// Custom tables TOML
        #[arg(long)]
        tables: Option<String>,
    },
    /// Remove every record
    Clear {
        /// History file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        roman_urdu::init_tracing(Path::new(dir));
    }
    if let Some(path) = &cli.settings {
        if let Err(e) = roman_urdu::RomanUrdu::load_settings_file(Path::new(path)) {
            eprintln!("Error loading settings: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Translit { text, tables, json } => {
            translit_ops::translit_cmd(text.as_deref(), tables.as_deref(), json)
        }
        Command::Explain { text, tables, json } => {
            translit_ops::explain_cmd(&text, tables.as_deref(), json)
        }
        Command::Batch {
            input_file,
            output_file,
            tables,
        } => translit_ops::batch_cmd(&input_file, &output_file, tables.as_deref()),
        Command::TablesExport => config_ops::tables_export(),
        Command::TablesValidate { file } => config_ops::tables_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::History { action } => match action {
            HistoryAction::Show { file } => history_ops::history_show(&file),
            HistoryAction::Add { file, text, tables } => {
                history_ops::history_add(&file, &text, tables.as_deref())
            }
            HistoryAction::Clear { file } => history_ops::history_clear(&file),
        },
    }
}
