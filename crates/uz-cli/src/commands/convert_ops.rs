use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::process;
use std::str::FromStr;

use serde::Serialize;

use uz_core::settings::Settings;
use uz_core::{detect_script, split_spans, transliterate, transliterate_text, Direction, Span};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// `--direction` value: a fixed direction or `auto` (detect the source script).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionChoice {
    Fixed(Direction),
    Auto,
}

impl FromStr for DirectionChoice {
    type Err = uz_core::ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            Ok(DirectionChoice::Auto)
        } else {
            s.parse().map(DirectionChoice::Fixed)
        }
    }
}

impl fmt::Display for DirectionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionChoice::Fixed(d) => fmt::Display::fmt(d, f),
            DirectionChoice::Auto => f.write_str("auto"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot detect the source script (no script reaches {min_share} of the letters)")]
    UndetectedScript { min_share: f64 },
    #[error("failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        error: io::Error,
    },
}

#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub direction: Direction,
    pub preserve_markup: bool,
    pub input: String,
    pub output: String,
}

pub fn resolve_direction(
    choice: Option<DirectionChoice>,
    text: &str,
    settings: &Settings,
) -> Result<Direction, ConvertError> {
    match choice {
        None => Ok(settings.transliteration.direction),
        Some(DirectionChoice::Fixed(d)) => Ok(d),
        Some(DirectionChoice::Auto) => {
            let min_share = settings.detection.min_letter_share;
            detect_script(text, min_share)
                .map(Direction::from_source)
                .ok_or(ConvertError::UndetectedScript { min_share })
        }
    }
}

pub fn run_convert(text: &str, direction: Direction, preserve_markup: bool) -> ConvertOutput {
    let output = if preserve_markup {
        transliterate(text, direction)
    } else {
        transliterate_text(text, direction)
    };
    ConvertOutput {
        direction,
        preserve_markup,
        input: text.to_string(),
        output,
    }
}

/// Text from the positional argument, a file, or stdin, in that order.
pub fn read_input(text: Option<&str>, file: Option<&str>) -> Result<String, ConvertError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return fs::read_to_string(path).map_err(|error| ConvertError::Read {
            source_name: path.to_string(),
            error,
        });
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|error| ConvertError::Read {
            source_name: "stdin".to_string(),
            error,
        })?;
    Ok(buf)
}

pub fn convert_cmd(
    text: Option<&str>,
    file: Option<&str>,
    direction: Option<DirectionChoice>,
    plain: bool,
    json: bool,
) {
    let settings = uz_core::settings::settings();
    let input = die!(read_input(text, file), "Error: {}");
    let direction = die!(resolve_direction(direction, &input, settings), "Error: {}");
    let preserve_markup = settings.transliteration.preserve_markup && !plain;

    let result = run_convert(&input, direction, preserve_markup);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&result), "JSON serialization failed: {}")
        );
    } else if text.is_some() {
        println!("{}", result.output);
    } else {
        // File and stdin input keep their own trailing newline.
        print!("{}", result.output);
    }
}

pub fn format_spans(spans: &[Span<'_>]) -> String {
    let mut out = String::new();
    for (i, span) in spans.iter().enumerate() {
        let kind = if span.is_tag() { "tag " } else { "text" };
        out.push_str(&format!("{i:>3} {kind} {:?}\n", span.as_str()));
    }
    out
}

pub fn spans_cmd(text: &str, json: bool) {
    let spans = split_spans(text);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&spans), "JSON serialization failed: {}")
        );
    } else {
        print!("{}", format_spans(&spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Settings {
        uz_core::settings::parse_settings_toml(uz_core::settings::default_toml()).unwrap()
    }

    #[test]
    fn test_direction_choice_parse() {
        assert_eq!("auto".parse::<DirectionChoice>().unwrap(), DirectionChoice::Auto);
        assert_eq!(
            "latin-to-cyrillic".parse::<DirectionChoice>().unwrap(),
            DirectionChoice::Fixed(Direction::LatinToCyrillic)
        );
        assert!("sideways".parse::<DirectionChoice>().is_err());
    }

    #[test]
    fn test_resolve_direction_default_from_settings() {
        let s = defaults();
        let d = resolve_direction(None, "salom", &s).unwrap();
        assert_eq!(d, Direction::CyrillicToLatin);
    }

    #[test]
    fn test_resolve_direction_auto() {
        let s = defaults();
        let auto = Some(DirectionChoice::Auto);
        assert_eq!(
            resolve_direction(auto, "<p>salom dunyo</p>", &s).unwrap(),
            Direction::LatinToCyrillic
        );
        assert_eq!(
            resolve_direction(auto, "салом дунё", &s).unwrap(),
            Direction::CyrillicToLatin
        );
        assert!(matches!(
            resolve_direction(auto, "2024", &s),
            Err(ConvertError::UndetectedScript { .. })
        ));
    }

    #[test]
    fn test_run_convert_plain_touches_markup() {
        let out = run_convert("<b>шарқ</b>", Direction::CyrillicToLatin, true);
        assert_eq!(out.output, "<b>sharq</b>");
        let out = run_convert("<sh>", Direction::LatinToCyrillic, false);
        assert_eq!(out.output, "<ш>");
    }

    #[test]
    fn test_convert_output_json_shape() {
        let out = run_convert("g'oz", Direction::LatinToCyrillic, true);
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["direction"], "latin-to-cyrillic");
        assert_eq!(v["output"], "ғоз");
    }

    #[test]
    fn test_read_input_prefers_text() {
        assert_eq!(read_input(Some("салом"), Some("/nonexistent")).unwrap(), "салом");
        assert!(matches!(
            read_input(None, Some("/nonexistent/uztool-input.txt")),
            Err(ConvertError::Read { .. })
        ));
    }

    #[test]
    fn test_format_spans() {
        let spans = split_spans("<b>x</b>");
        let text = format_spans(&spans);
        assert_eq!(
            text,
            "  0 text \"\"\n  1 tag  \"<b>\"\n  2 text \"x\"\n  3 tag  \"</b>\"\n  4 text \"\"\n"
        );
    }

    #[test]
    fn test_spans_json() {
        let spans = split_spans("a<br>");
        let v = serde_json::to_value(&spans).unwrap();
        assert_eq!(v[0]["kind"], "text");
        assert_eq!(v[1]["kind"], "tag");
        assert_eq!(v[1]["value"], "<br>");
    }
}
