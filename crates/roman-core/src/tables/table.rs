pub(crate) const DEFAULT_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
