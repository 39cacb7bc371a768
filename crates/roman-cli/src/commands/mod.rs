macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod history_ops;
pub mod translit_ops;

use std::path::Path;

use roman_urdu::RomanUrdu;

/// Engine over custom tables when a path is given, else the built-in ones.
pub(crate) fn load_engine(tables: Option<&str>) -> RomanUrdu {
    match tables {
        Some(path) => die!(
            RomanUrdu::from_tables_file(Path::new(path)),
            "Error loading tables: {}"
        ),
        None => RomanUrdu::new(),
    }
}
