use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::process;

use serde::{Deserialize, Serialize};

use uz_core::{transliterate, Direction};

// --- Corpus types ---

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    pub direction: Direction,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {error}")]
    Read { path: String, error: io::Error },
    #[error("failed to parse corpus TOML: {0}")]
    Parse(String),
    #[error("corpus has no cases")]
    Empty,
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, CorpusError> {
    let corpus: AccuracyCorpus =
        toml::from_str(content).map_err(|e| CorpusError::Parse(e.to_string()))?;
    if corpus.cases.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(corpus)
}

pub fn load_corpus(path: &str) -> Result<AccuracyCorpus, CorpusError> {
    let content = fs::read_to_string(path).map_err(|error| CorpusError::Read {
        path: path.to_string(),
        error,
    })?;
    parse_corpus(&content)
}

// --- Results ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub direction: Direction,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

/// Run every case (optionally only those in `direction`) and summarise.
pub fn evaluate(corpus: &AccuracyCorpus, direction: Option<Direction>) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .filter(|c| direction.map_or(true, |d| c.direction == d))
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = transliterate(&case.input, case.direction);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                direction: case.direction,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let (pass, fail, skip) = (
        count(AccuracyStatus::Pass),
        count(AccuracyStatus::Fail),
        count(AccuracyStatus::Skip),
    );
    let tested = pass + fail;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = AccuracySummary {
        total: results.len(),
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    };
    AccuracyReport { results, summary }
}

pub fn format_report(report: &AccuracyReport, verbose: bool) -> String {
    let mut out = String::new();

    // Group by category
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    for (cat, group) in &grouped {
        out.push_str(&format!("\n=== {} ({} cases) ===\n", cat, group.len()));
        for r in group {
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        out.push_str(&format!(
                            "  \u{2713} [{}] {:?} \u{2192} {:?}\n",
                            r.direction, r.input, r.expected
                        ));
                    }
                }
                AccuracyStatus::Fail => {
                    out.push_str(&format!(
                        "  \u{2717} [{}] {:?} \u{2192} {:?} (got: {:?})\n",
                        r.direction, r.input, r.expected, r.actual
                    ));
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    out.push_str(&format!("  - {:?} [skip: {}]\n", r.input, reason));
                }
            }
        }
    }

    let s = &report.summary;
    out.push_str("\n=== Summary ===\n");
    out.push_str(&format!("  Total:     {}\n", s.total));
    out.push_str(&format!("  Pass:      {:>3}\n", s.pass));
    out.push_str(&format!("  Fail:      {:>3}\n", s.fail));
    out.push_str(&format!("  Skip:      {:>3}\n", s.skip));
    out.push_str(&format!(
        "  Pass rate: {} ({}/{})\n",
        s.pass_rate,
        s.pass,
        s.pass + s.fail
    ));
    out
}

pub fn accuracy_cmd(corpus_file: &str, direction: Option<Direction>, verbose: bool, json: bool) {
    let corpus = load_corpus(corpus_file).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let report = evaluate(&corpus, direction);
    if report.results.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("JSON serialization failed: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", format_report(&report, verbose));
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_CORPUS: &str = include_str!("../../corpus/uzbek.toml");

    #[test]
    fn shipped_corpus_passes() {
        let corpus = parse_corpus(SHIPPED_CORPUS).unwrap();
        let report = evaluate(&corpus, None);
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.status == AccuracyStatus::Fail)
            .map(|r| (&r.input, &r.expected, &r.actual))
            .collect();
        assert!(failures.is_empty(), "failures: {failures:?}");
        assert_eq!(report.summary.skip, 1);
        assert_eq!(report.summary.total, corpus.cases.len());
        assert_eq!(report.summary.pass_rate, "100.0%");
    }

    #[test]
    fn skipped_case_is_really_lossy() {
        let corpus = parse_corpus(SHIPPED_CORPUS).unwrap();
        for case in corpus.cases.iter().filter(|c| c.skip) {
            assert_ne!(transliterate(&case.input, case.direction), case.expected);
        }
    }

    #[test]
    fn direction_filter() {
        let corpus = parse_corpus(SHIPPED_CORPUS).unwrap();
        let report = evaluate(&corpus, Some(Direction::CyrillicToLatin));
        assert!(!report.results.is_empty());
        assert!(report
            .results
            .iter()
            .all(|r| r.direction == Direction::CyrillicToLatin));
    }

    #[test]
    fn failing_case_reported() {
        let corpus = parse_corpus(
            r#"
[[cases]]
input = "salom"
expected = "салам"
direction = "latin-to-cyrillic"
category = "words"
"#,
        )
        .unwrap();
        let report = evaluate(&corpus, None);
        assert_eq!(report.summary.fail, 1);
        assert_eq!(report.results[0].actual, "салом");
        assert_eq!(report.summary.pass_rate, "0.0%");
        let text = format_report(&report, false);
        assert!(text.contains("=== words (1 cases) ==="));
        assert!(text.contains("(got: \"салом\")"));
    }

    #[test]
    fn error_empty_corpus() {
        assert!(matches!(parse_corpus("cases = []"), Err(CorpusError::Empty)));
    }

    #[test]
    fn error_bad_direction() {
        let err = parse_corpus(
            r#"
[[cases]]
input = "a"
expected = "а"
direction = "sideways"
category = "words"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn error_missing_file() {
        assert!(matches!(
            load_corpus("/nonexistent/corpus.toml"),
            Err(CorpusError::Read { .. })
        ));
    }
}
