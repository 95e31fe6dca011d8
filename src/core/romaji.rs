//! Kana -> romaji conversion
//!
//! Table lookup runs between ordered rewrite passes:
//! 1. Passport drops every prolonged sound mark
//! 2. Nippon/Hepburn insert `'` after ん before a vowel or y- mora
//! 3. Greedy 2-then-1 character table lookup
//! 4. Small tsu doubles the following consonant
//! 5. Passport/Hepburn spell a doubled `ch` as `tch`
//! 6. Leftover small tsu becomes `tsu`
//! 7. Passport/Hepburn assimilate `n` before m/b/p
//! 8. Nippon/Hepburn fold the long vowel marker into the vowel

use std::sync::LazyLock;

use regex::Regex;

use crate::config::RomajiSystem;
use crate::core::romaji_table::table;
use crate::core::unicode::{CHOONPU, HATSUON, SOKUON};

/// Kana that start a new syllable right after ん
#[rustfmt::skip]
const NASAL_BOUNDARY: [char; 32] = [
    'あ', 'い', 'う', 'え', 'お', 'ア', 'イ', 'ウ', 'エ', 'オ',
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ',
    'や', 'ゆ', 'よ', 'ヤ', 'ユ', 'ヨ', 'ゃ', 'ゅ', 'ょ', 'ャ', 'ュ', 'ョ',
];

static GEMINATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[っッ]([bcdfghijklmnopqrstuvwyz])").unwrap());

const LABIAL_ASSIMILATION: [(&str, &str); 3] = [("nm", "mm"), ("nb", "mb"), ("np", "mp")];

const NIPPON_LONG_VOWELS: [(&str, &str); 5] =
    [("a^", "â"), ("i^", "î"), ("u^", "û"), ("e^", "ê"), ("o^", "ô")];

const HEPBURN_LONG_VOWELS: [(&str, &str); 5] =
    [("a-", "ā"), ("i-", "ī"), ("u-", "ū"), ("e-", "ē"), ("o-", "ō")];

/// Convert kana to romaji
///
/// Characters with no romanization (latin, kanji, most punctuation) are kept.
///
/// ```
/// use kuroshiro::config::RomajiSystem;
/// use kuroshiro::to_romaji;
///
/// assert_eq!(to_romaji("サポート", RomajiSystem::Nippon), "sapôto");
/// assert_eq!(to_romaji("サポート", RomajiSystem::Passport), "sapoto");
/// assert_eq!(to_romaji("サポート", RomajiSystem::Hepburn), "sapōto");
/// ```
pub fn to_romaji(input: &str, system: RomajiSystem) -> String {
    let mut chars: Vec<char> = input.chars().collect();

    if system == RomajiSystem::Passport {
        chars.retain(|&c| c != CHOONPU);
    }

    if matches!(system, RomajiSystem::Nippon | RomajiSystem::Hepburn) {
        chars = insert_nasal_apostrophes(&chars);
    }

    let mut result = transliterate(&chars, system);

    result = GEMINATE.replace_all(&result, "${1}${1}").into_owned();

    let hepburn_like = matches!(system, RomajiSystem::Passport | RomajiSystem::Hepburn);

    if hepburn_like {
        result = result.replace("cc", "tc");
    }

    result = result.replace(SOKUON, "tsu");

    if hepburn_like {
        result = replace_all_pairs(result, &LABIAL_ASSIMILATION);
    }

    match system {
        RomajiSystem::Nippon => replace_all_pairs(result, &NIPPON_LONG_VOWELS),
        RomajiSystem::Hepburn => replace_all_pairs(result, &HEPBURN_LONG_VOWELS),
        RomajiSystem::Passport => result,
    }
}

/// Insert `'` after every ん/ン that precedes a vowel or y- kana
fn insert_nasal_apostrophes(chars: &[char]) -> Vec<char> {
    let boundaries: Vec<usize> = chars
        .windows(2)
        .enumerate()
        .filter(|(_, w)| HATSUON.contains(&w[0]) && NASAL_BOUNDARY.contains(&w[1]))
        .map(|(i, _)| i + 1)
        .collect();

    if boundaries.is_empty() {
        return chars.to_vec();
    }

    let mut output = Vec::with_capacity(chars.len() + boundaries.len());
    let mut start = 0;
    for &boundary in &boundaries {
        output.extend_from_slice(&chars[start..boundary]);
        output.push('\'');
        start = boundary;
    }
    output.extend_from_slice(&chars[start..]);
    output
}

/// Longest-match table lookup, two characters before one
fn transliterate(chars: &[char], system: RomajiSystem) -> String {
    let table = table(system);
    let mut output = String::with_capacity(chars.len() * 3);
    let mut key = String::with_capacity(8);
    let mut i = 0;

    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            key.clear();
            key.push(chars[i]);
            key.push(next);
            if let Some(romaji) = table.get(key.as_str()) {
                output.push_str(romaji);
                i += 2;
                continue;
            }
        }

        key.clear();
        key.push(chars[i]);
        match table.get(key.as_str()) {
            Some(romaji) => output.push_str(romaji),
            None => output.push(chars[i]),
        }
        i += 1;
    }

    output
}

fn replace_all_pairs(mut text: String, pairs: &[(&str, &str)]) -> String {
    for (from, to) in pairs {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    text
}
