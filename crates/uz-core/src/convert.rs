use crate::script::Direction;
use crate::table::{CharTable, LATIN_COMBINATIONS};

/// Transliterate plain text in one direction. Markup is not recognised here;
/// see [`crate::transliterate`] for the tag-preserving entry point.
///
/// Characters without a table entry (digits, punctuation, whitespace, letters
/// of the other script) or with an empty one (the soft sign) are copied
/// unchanged.
pub fn transliterate_text(text: &str, direction: Direction) -> String {
    match direction {
        Direction::CyrillicToLatin => cyrillic_to_latin(text),
        Direction::LatinToCyrillic => latin_to_cyrillic(text),
    }
}

fn cyrillic_to_latin(text: &str) -> String {
    let table = CharTable::global();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        // An empty entry (ь, Ь) counts as no entry.
        match table.to_latin(c) {
            Some(latin) if !latin.is_empty() => out.push_str(latin),
            _ => out.push(c),
        }
    }
    out
}

fn latin_to_cyrillic(text: &str) -> String {
    let table = CharTable::global();

    // Digraphs first, one rule at a time over the whole string. Rules only
    // match Latin input, so Cyrillic written by an earlier rule is never
    // picked up by a later one.
    let mut replaced = text.to_string();
    let mut buf = [0u8; 4];
    for &(latin, cyrillic) in LATIN_COMBINATIONS {
        if replaced.contains(latin) {
            replaced = replaced.replace(latin, cyrillic.encode_utf8(&mut buf));
        }
    }

    replaced
        .chars()
        .map(|c| table.to_cyrillic(c).unwrap_or(c))
        .collect()
}
