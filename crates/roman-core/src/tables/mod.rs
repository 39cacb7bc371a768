//! Urdu → Roman mapping tables.
//!
//! Two lookup tables back the transliteration engine: a character map keyed by
//! single code points and a whole-word dictionary. Defaults are embedded as
//! TOML and can be replaced once per process before first use.

mod config;
mod script_tables;
mod table;

pub use config::{parse_tables_toml, TableSet, TablesConfigError};
pub use script_tables::ScriptTables;
pub use table::default_toml;
