//! Codepoint ranges and single-character classification

use std::ops::RangeInclusive;

/// Hiragana block (U+3040 ~ U+309F)
pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
/// Katakana block (U+30A0 ~ U+30FF), prolonged sound mark included
pub const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';

/// Hiragana that have a katakana counterpart at the same ordinal (ぁ ~ ゖ)
pub const HIRAGANA_SHIFTABLE: RangeInclusive<char> = '\u{3041}'..='\u{3096}';
/// Katakana that have a hiragana counterpart at the same ordinal (ァ ~ ヶ)
pub const KATAKANA_SHIFTABLE: RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';

/// CJK Unified Ideographs
pub const CJK_UNIFIED: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';
/// CJK Unified Ideographs Extension A
pub const CJK_EXTENSION_A: RangeInclusive<char> = '\u{3400}'..='\u{4DBF}';
/// CJK Unified Ideographs Extension B (outside the BMP)
pub const CJK_EXTENSION_B: RangeInclusive<char> = '\u{20000}'..='\u{2A6DF}';

/// Offset from a katakana codepoint to the matching hiragana
pub const KATAKANA_HIRAGANA_SHIFT: i32 = 0x3041 - 0x30A1;
/// Offset from a hiragana codepoint to the matching katakana
pub const HIRAGANA_KATAKANA_SHIFT: i32 = -KATAKANA_HIRAGANA_SHIFT;

/// Moraic nasal
pub const HATSUON: [char; 2] = ['ん', 'ン'];
/// Small tsu (geminate marker)
pub const SOKUON: [char; 2] = ['っ', 'ッ'];
/// Prolonged sound mark
pub const CHOONPU: char = 'ー';

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA.contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// CJK ideograph in the unified block or extension A/B
pub fn is_kanji(c: char) -> bool {
    CJK_UNIFIED.contains(&c) || CJK_EXTENSION_A.contains(&c) || CJK_EXTENSION_B.contains(&c)
}

pub fn is_japanese(c: char) -> bool {
    is_kana(c) || is_kanji(c)
}

pub fn is_sokuon(c: char) -> bool {
    SOKUON.contains(&c)
}

/// Shift a codepoint by `offset`
/// Returns None if the result is not a valid scalar value
pub fn shift_char(c: char, offset: i32) -> Option<char> {
    let code = (c as u32).checked_add_signed(offset)?;
    char::from_u32(code)
}
