//! Tag-preserving transliteration.
//!
//! Input is cut into literal text and `<...>` tag spans. A tag runs from a
//! `<` to the nearest following `>`; there is no notion of balanced or valid
//! HTML. A `<` with no `>` after it is ordinary text.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::convert::transliterate_text;
use crate::script::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Span<'a> {
    Text(&'a str),
    Tag(&'a str),
}

impl<'a> Span<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Span::Text(s) | Span::Tag(s) => s,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Span::Tag(_))
    }
}

/// Iterator over the spans of a string.
///
/// Spans alternate text, tag, text, ... and the sequence starts and ends with
/// a (possibly empty) text span, so two adjacent tags have an empty text span
/// between them.
pub struct Spans<'a> {
    rest: Option<&'a str>,
    pending_tag: Option<&'a str>,
}

impl<'a> Spans<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: Some(text),
            pending_tag: None,
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if let Some(tag) = self.pending_tag.take() {
            return Some(Span::Tag(tag));
        }
        let rest = self.rest?;
        match find_tag(rest) {
            Some((start, end)) => {
                self.pending_tag = Some(&rest[start..end]);
                self.rest = Some(&rest[end..]);
                Some(Span::Text(&rest[..start]))
            }
            None => {
                self.rest = None;
                Some(Span::Text(rest))
            }
        }
    }
}

/// Byte range of the first `<...>` in `s`, end exclusive.
fn find_tag(s: &str) -> Option<(usize, usize)> {
    let start = s.find('<')?;
    // If the first '<' is never closed, no later one is either.
    let len = s[start..].find('>')? + 1;
    Some((start, start + len))
}

pub fn split_spans(text: &str) -> Vec<Span<'_>> {
    Spans::new(text).collect()
}

/// Transliterate `text`, copying every `<...>` tag through unchanged.
pub fn transliterate(text: &str, direction: Direction) -> String {
    if text.is_empty() {
        return String::new();
    }
    let _span = debug_span!("transliterate", %direction, len = text.len()).entered();

    if !text.contains('<') {
        return transliterate_text(text, direction);
    }

    let mut out = String::with_capacity(text.len());
    let mut tags = 0usize;
    for span in Spans::new(text) {
        match span {
            Span::Tag(tag) => {
                tags += 1;
                out.push_str(tag);
            }
            Span::Text(s) => out.push_str(&transliterate_text(s, direction)),
        }
    }
    debug!(tag_count = tags);
    out
}
