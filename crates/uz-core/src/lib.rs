//! Uzbek Cyrillic ↔ Latin transliteration.
//!
//! The engine is total: every input string produces an output string, and
//! characters outside the Uzbek alphabets pass through untouched. Inline
//! markup (`<...>` spans) is copied verbatim so editor HTML survives a
//! conversion.

pub mod convert;
pub mod markup;
pub mod script;
pub mod settings;
pub mod table;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use convert::transliterate_text;
pub use markup::{split_spans, transliterate, Span, Spans};
pub use script::{
    counterpart, detect_script, Direction, ParseDirectionError, ParseScriptError, Script,
};
