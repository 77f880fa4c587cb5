use std::fs;
use std::process;

use uz_core::settings::parse_settings_toml;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn table_export() {
    print!("{}", uz_core::table::export_toml());
}

pub fn settings_export() {
    print!("{}", uz_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: transliteration.direction={}, transliteration.preserve_markup={}, detection.min_letter_share={}",
        s.transliteration.direction,
        s.transliteration.preserve_markup,
        s.detection.min_letter_share
    );
}

/// Install a custom settings file for the rest of the process.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(uz_core::settings::init_custom(content), "Error in {file}: {}");
}
