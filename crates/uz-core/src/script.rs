//! Script and direction vocabulary shared by the engine, settings and CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::markup::{transliterate, Span, Spans};
use crate::unicode::{is_latin, is_uzbek_cyrillic};

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    CyrillicToLatin,
    LatinToCyrillic,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::CyrillicToLatin, Direction::LatinToCyrillic];

    /// Direction that turns text written in `source` into the other script.
    pub fn from_source(source: Script) -> Self {
        match source {
            Script::Cyrillic => Direction::CyrillicToLatin,
            Script::Latin => Direction::LatinToCyrillic,
        }
    }

    pub fn source(self) -> Script {
        match self {
            Direction::CyrillicToLatin => Script::Cyrillic,
            Direction::LatinToCyrillic => Script::Latin,
        }
    }

    pub fn target(self) -> Script {
        self.source().other()
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::CyrillicToLatin => Direction::LatinToCyrillic,
            Direction::LatinToCyrillic => Direction::CyrillicToLatin,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::CyrillicToLatin => "cyrillic-to-latin",
            Direction::LatinToCyrillic => "latin-to-cyrillic",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected \"cyrillic-to-latin\" or \"latin-to-cyrillic\")")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// An Uzbek writing system. Editor language codes are `uz_latn` and
/// `uz_cyrl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    #[serde(rename = "latin", alias = "uz_latn")]
    Latin,
    #[serde(rename = "cyrillic", alias = "uz_cyrl")]
    Cyrillic,
}

impl Script {
    pub fn other(self) -> Self {
        match self {
            Script::Latin => Script::Cyrillic,
            Script::Cyrillic => Script::Latin,
        }
    }

    pub fn language_code(self) -> &'static str {
        match self {
            Script::Latin => "uz_latn",
            Script::Cyrillic => "uz_cyrl",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Latin => f.write_str("latin"),
            Script::Cyrillic => f.write_str("cyrillic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown script {0:?} (expected latin, cyrillic, uz_latn or uz_cyrl)")]
pub struct ParseScriptError(pub String);

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latin" | "uz_latn" => Ok(Script::Latin),
            "cyrillic" | "uz_cyrl" => Ok(Script::Cyrillic),
            _ => Err(ParseScriptError(s.to_string())),
        }
    }
}

/// Render `text`, written in `source`, in the other script. This is the
/// parallel rendering an editor keeps next to the original.
pub fn counterpart(text: &str, source: Script) -> String {
    transliterate(text, Direction::from_source(source))
}

/// Guess which script `text` is written in.
///
/// Only letters outside `<...>` tags are counted. Returns the script whose
/// share of counted letters is at least `min_share`, or `None` when neither
/// dominates or there are no letters at all.
pub fn detect_script(text: &str, min_share: f64) -> Option<Script> {
    let mut cyrillic = 0usize;
    let mut latin = 0usize;
    for span in Spans::new(text) {
        let Span::Text(s) = span else { continue };
        for c in s.chars() {
            if is_uzbek_cyrillic(c) {
                cyrillic += 1;
            } else if is_latin(c) {
                latin += 1;
            }
        }
    }

    let total = cyrillic + latin;
    if total == 0 {
        return None;
    }
    let total = total as f64;
    if cyrillic as f64 / total >= min_share && cyrillic > latin {
        Some(Script::Cyrillic)
    } else if latin as f64 / total >= min_share && latin > cyrillic {
        Some(Script::Latin)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!(
            "cyrillic-to-latin".parse::<Direction>(),
            Ok(Direction::CyrillicToLatin)
        );
        assert_eq!(
            "latin-to-cyrillic".parse::<Direction>(),
            Ok(Direction::LatinToCyrillic)
        );
        let err = "latin_to_cyrillic".parse::<Direction>().unwrap_err();
        assert_eq!(err.0, "latin_to_cyrillic");
    }

    #[test]
    fn test_direction_display_matches_parse() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }

    #[test]
    fn test_direction_scripts() {
        let d = Direction::CyrillicToLatin;
        assert_eq!(d.source(), Script::Cyrillic);
        assert_eq!(d.target(), Script::Latin);
        assert_eq!(d.reverse(), Direction::LatinToCyrillic);
        assert_eq!(Direction::from_source(Script::Latin), Direction::LatinToCyrillic);
    }

    #[test]
    fn test_script_codes() {
        assert_eq!("uz_latn".parse::<Script>(), Ok(Script::Latin));
        assert_eq!("uz_cyrl".parse::<Script>(), Ok(Script::Cyrillic));
        assert_eq!("cyrillic".parse::<Script>(), Ok(Script::Cyrillic));
        assert!("ru".parse::<Script>().is_err());
        assert_eq!(Script::Cyrillic.language_code(), "uz_cyrl");
    }

    #[test]
    fn test_counterpart() {
        assert_eq!(counterpart("<p>салом</p>", Script::Cyrillic), "<p>salom</p>");
        assert_eq!(counterpart("<p>salom</p>", Script::Latin), "<p>салом</p>");
    }

    #[test]
    fn test_detect_script() {
        assert_eq!(detect_script("Ассалому алайкум", 0.6), Some(Script::Cyrillic));
        assert_eq!(detect_script("Assalomu alaykum", 0.6), Some(Script::Latin));
        assert_eq!(detect_script("2024!", 0.6), None);
        assert_eq!(detect_script("", 0.6), None);
    }

    #[test]
    fn test_detect_script_ignores_tags() {
        let html = r#"<span class="highlight-marker">шаҳар</span>"#;
        assert_eq!(detect_script(html, 0.6), Some(Script::Cyrillic));
    }

    #[test]
    fn test_detect_script_mixed_below_share() {
        // 4 Cyrillic letters, 4 Latin letters.
        assert_eq!(detect_script("ҳаёт life", 0.6), None);
    }
}
