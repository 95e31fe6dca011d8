//! Whole-string scans built on the character classifier
//!
//! Empty strings are never Japanese: every `has_*` returns false for "".

use crate::core::unicode::{is_hiragana, is_japanese, is_kana, is_kanji, is_katakana};

/// Script category of a whole token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StrType {
    /// Kanji, no kana
    Kanji = 0,
    /// Kanji and kana together
    Mixed = 1,
    /// Kana, no kanji
    Kana = 2,
    /// Neither
    Other = 3,
}

pub fn has_hiragana(text: &str) -> bool {
    text.chars().any(is_hiragana)
}

pub fn has_katakana(text: &str) -> bool {
    text.chars().any(is_katakana)
}

pub fn has_kana(text: &str) -> bool {
    text.chars().any(is_kana)
}

pub fn has_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

pub fn has_japanese(text: &str) -> bool {
    text.chars().any(is_japanese)
}

/// Non-empty and made of kana only
pub fn is_all_kana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_kana)
}

/// Classify `text` in one scan
///
/// Characters that are neither kana nor kanji do not affect the result as
/// long as one Japanese character is present.
///
/// ```
/// use kuroshiro::detection::{get_str_type, StrType};
///
/// assert_eq!(get_str_type("公園"), StrType::Kanji);
/// assert_eq!(get_str_type("この公園の中で"), StrType::Mixed);
/// assert_eq!(get_str_type("こうえん"), StrType::Kana);
/// assert_eq!(get_str_type("park"), StrType::Other);
/// ```
pub fn get_str_type(text: &str) -> StrType {
    let mut saw_kanji = false;
    let mut saw_kana = false;

    for ch in text.chars() {
        if is_kanji(ch) {
            saw_kanji = true;
        } else if is_kana(ch) {
            saw_kana = true;
        }
        if saw_kanji && saw_kana {
            return StrType::Mixed;
        }
    }

    match (saw_kanji, saw_kana) {
        (true, _) => StrType::Kanji,
        (false, true) => StrType::Kana,
        (false, false) => StrType::Other,
    }
}
