
use crate::Direction;

/// Words whose Cyrillic and Latin spellings convert into each other exactly.
/// Round trips are not guaranteed in general (щ, э and ъ are lossy), so
/// only this curated list is checked in both directions.
pub(super) const ROUND_TRIP_WORDS: &[(&str, &str)] = &[
    ("салом", "salom"),
    ("ўзбекча", "o'zbekcha"),
    ("ғоз", "g'oz"),
    ("шаҳар", "shahar"),
    ("Тошкент", "Toshkent"),
    ("Ўзбекистон", "O'zbekiston"),
    ("ёшлар", "yoshlar"),
    ("юлдуз", "yulduz"),
    ("қишлоқ", "qishloq"),
    ("чиройли", "chiroyli"),
    ("Ғалаба", "G'alaba"),
    ("янгилик", "yangilik"),
    ("мактаб", "maktab"),
    ("Самарқанд", "Samarqand"),
    ("хабарлар", "xabarlar"),
];

pub(super) fn both_directions() -> impl Iterator<Item = Direction> {
    Direction::ALL.into_iter()
}
