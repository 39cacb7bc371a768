use std::fs;

pub fn tables_export() {
    print!("{}", roman_core::tables::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let set = die!(roman_core::tables::parse_tables_toml(&content), "Error: {}");
    println!(
        "OK: {} character mappings, {} dictionary words",
        set.characters.len(),
        set.words.len()
    );
}

pub fn settings_export() {
    print!("{}", roman_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        roman_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: history.max_records={}, input.max_chars={}",
        s.history.max_records, s.input.max_chars
    );
}
