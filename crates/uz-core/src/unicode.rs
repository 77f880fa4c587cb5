//! Character-level classification for Uzbek text.
use crate::table::CharTable;

/// A letter of the Uzbek Cyrillic alphabet (the keys of the conversion table).
pub fn is_uzbek_cyrillic(c: char) -> bool {
    CharTable::global().is_cyrillic_letter(c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}
