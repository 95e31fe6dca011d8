//! Hiragana <-> katakana conversion by codepoint shift

use crate::core::unicode::{
    shift_char, HIRAGANA_KATAKANA_SHIFT, HIRAGANA_SHIFTABLE, KATAKANA_HIRAGANA_SHIFT,
    KATAKANA_SHIFTABLE,
};

/// Convert katakana in `input` to hiragana
/// Characters without a hiragana counterpart (ー, ヷ, latin, kanji...) are kept as is
pub fn to_hiragana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if KATAKANA_SHIFTABLE.contains(&c) {
                shift_char(c, KATAKANA_HIRAGANA_SHIFT).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert hiragana in `input` to katakana
pub fn to_katakana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if HIRAGANA_SHIFTABLE.contains(&c) {
                shift_char(c, HIRAGANA_KATAKANA_SHIFT).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
