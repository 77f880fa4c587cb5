//! Compiled-in Uzbek alphabet tables.
//!
//! Every case form has its own entry; nothing is derived with case folding.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Cyrillic letter → Latin grapheme. Targets may be two characters long
/// (digraphs). The soft sign has an empty target, which the converter treats
/// as unmapped.
pub const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "j"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "x"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sh"),
    ('ъ', "'"),
    ('ы', "i"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ў', "o'"),
    ('қ', "q"),
    ('ғ', "g'"),
    ('ҳ', "h"),
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ё', "Yo"),
    ('Ж', "J"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "Y"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "X"),
    ('Ц', "Ts"),
    ('Ч', "Ch"),
    ('Ш', "Sh"),
    ('Щ', "Sh"),
    ('Ъ', "'"),
    ('Ы', "I"),
    ('Ь', ""),
    ('Э', "E"),
    ('Ю', "Yu"),
    ('Я', "Ya"),
    ('Ў', "O'"),
    ('Қ', "Q"),
    ('Ғ', "G'"),
    ('Ҳ', "H"),
];

/// Single Latin letter → Cyrillic letter. `e` only ever reaches `е`; `э` has
/// no Latin spelling of its own.
pub const LATIN_TO_CYRILLIC: &[(char, char)] = &[
    ('a', 'а'),
    ('b', 'б'),
    ('v', 'в'),
    ('g', 'г'),
    ('d', 'д'),
    ('e', 'е'),
    ('j', 'ж'),
    ('z', 'з'),
    ('i', 'и'),
    ('y', 'й'),
    ('k', 'к'),
    ('l', 'л'),
    ('m', 'м'),
    ('n', 'н'),
    ('o', 'о'),
    ('p', 'п'),
    ('r', 'р'),
    ('s', 'с'),
    ('t', 'т'),
    ('u', 'у'),
    ('f', 'ф'),
    ('x', 'х'),
    ('h', 'ҳ'),
    ('q', 'қ'),
    ('A', 'А'),
    ('B', 'Б'),
    ('V', 'В'),
    ('G', 'Г'),
    ('D', 'Д'),
    ('E', 'Е'),
    ('J', 'Ж'),
    ('Z', 'З'),
    ('I', 'И'),
    ('Y', 'Й'),
    ('K', 'К'),
    ('L', 'Л'),
    ('M', 'М'),
    ('N', 'Н'),
    ('O', 'О'),
    ('P', 'П'),
    ('R', 'Р'),
    ('S', 'С'),
    ('T', 'Т'),
    ('U', 'У'),
    ('F', 'Ф'),
    ('X', 'Х'),
    ('H', 'Ҳ'),
    ('Q', 'Қ'),
];

/// Latin digraphs replaced before any single-letter lookup, applied in this
/// order. Each rule rewrites the whole string before the next one runs.
pub const LATIN_COMBINATIONS: &[(&str, char)] = &[
    ("yo", 'ё'),
    ("ch", 'ч'),
    ("sh", 'ш'),
    ("ts", 'ц'),
    ("yu", 'ю'),
    ("ya", 'я'),
    ("o'", 'ў'),
    ("g'", 'ғ'),
    ("Yo", 'Ё'),
    ("Ch", 'Ч'),
    ("Sh", 'Ш'),
    ("Ts", 'Ц'),
    ("Yu", 'Ю'),
    ("Ya", 'Я'),
    ("O'", 'Ў'),
    ("G'", 'Ғ'),
];

/// Lookup maps built from the constant tables.
pub struct CharTable {
    cyrillic_to_latin: HashMap<char, &'static str>,
    latin_to_cyrillic: HashMap<char, char>,
}

impl CharTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static CharTable {
        static INSTANCE: OnceLock<CharTable> = OnceLock::new();
        INSTANCE.get_or_init(|| CharTable {
            cyrillic_to_latin: CYRILLIC_TO_LATIN.iter().copied().collect(),
            latin_to_cyrillic: LATIN_TO_CYRILLIC.iter().copied().collect(),
        })
    }

    pub fn to_latin(&self, c: char) -> Option<&'static str> {
        self.cyrillic_to_latin.get(&c).copied()
    }

    pub fn to_cyrillic(&self, c: char) -> Option<char> {
        self.latin_to_cyrillic.get(&c).copied()
    }

    /// Whether `c` is a letter of the Uzbek Cyrillic alphabet.
    pub fn is_cyrillic_letter(&self, c: char) -> bool {
        self.cyrillic_to_latin.contains_key(&c)
    }
}

/// Render the compiled tables as TOML, in the same layout the CLI exports.
pub fn export_toml() -> String {
    let mut out = String::from("[cyrillic_to_latin]\n");
    for &(cyr, lat) in CYRILLIC_TO_LATIN {
        out.push_str(&format!("\"{cyr}\" = {}\n", toml_string(lat)));
    }
    out.push_str("\n[latin_to_cyrillic]\n");
    for &(lat, cyr) in LATIN_TO_CYRILLIC {
        out.push_str(&format!("{lat} = \"{cyr}\"\n"));
    }
    out.push_str("\n# Applied in order, before single letters.\n");
    out.push_str("combinations = [\n");
    for &(lat, cyr) in LATIN_COMBINATIONS {
        out.push_str(&format!("  [{}, \"{cyr}\"],\n", toml_string(lat)));
    }
    out.push_str("]\n");
    out
}

fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}
