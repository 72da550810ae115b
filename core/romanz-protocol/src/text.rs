use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics: `"ţară"` becomes `"tara"`, `"naître"` becomes `"naitre"`.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Lookup key: lowercase and diacritic-free.
pub fn fold(text: &str) -> String {
    strip_accents(&text.to_lowercase())
}

pub fn has_accents(text: &str) -> bool {
    text.nfd().any(is_combining_mark)
}
