//! Kana -> romaji lookup tables for each romanization system
//!
//! Every row lists a hiragana mora followed by its Nippon-shiki, Passport and
//! Hepburn spelling. The katakana key of each row is registered alongside the
//! hiragana one, so all three tables share exactly the same key set.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::RomajiSystem;
use crate::core::converter::to_katakana;

/// (kana, nippon, passport, hepburn)
type Row = (&'static str, &'static str, &'static str, &'static str);

#[rustfmt::skip]
const MORAE: &[Row] = &[
    // 清音
    ("あ", "a", "a", "a"),       ("い", "i", "i", "i"),       ("う", "u", "u", "u"),
    ("え", "e", "e", "e"),       ("お", "o", "o", "o"),
    ("か", "ka", "ka", "ka"),    ("き", "ki", "ki", "ki"),    ("く", "ku", "ku", "ku"),
    ("け", "ke", "ke", "ke"),    ("こ", "ko", "ko", "ko"),
    ("さ", "sa", "sa", "sa"),    ("し", "si", "shi", "shi"),  ("す", "su", "su", "su"),
    ("せ", "se", "se", "se"),    ("そ", "so", "so", "so"),
    ("た", "ta", "ta", "ta"),    ("ち", "ti", "chi", "chi"),  ("つ", "tu", "tsu", "tsu"),
    ("て", "te", "te", "te"),    ("と", "to", "to", "to"),
    ("な", "na", "na", "na"),    ("に", "ni", "ni", "ni"),    ("ぬ", "nu", "nu", "nu"),
    ("ね", "ne", "ne", "ne"),    ("の", "no", "no", "no"),
    ("は", "ha", "ha", "ha"),    ("ひ", "hi", "hi", "hi"),    ("ふ", "hu", "fu", "fu"),
    ("へ", "he", "he", "he"),    ("ほ", "ho", "ho", "ho"),
    ("ま", "ma", "ma", "ma"),    ("み", "mi", "mi", "mi"),    ("む", "mu", "mu", "mu"),
    ("め", "me", "me", "me"),    ("も", "mo", "mo", "mo"),
    ("や", "ya", "ya", "ya"),    ("ゆ", "yu", "yu", "yu"),    ("よ", "yo", "yo", "yo"),
    ("ら", "ra", "ra", "ra"),    ("り", "ri", "ri", "ri"),    ("る", "ru", "ru", "ru"),
    ("れ", "re", "re", "re"),    ("ろ", "ro", "ro", "ro"),
    ("わ", "wa", "wa", "wa"),    ("ゐ", "wi", "i", "i"),      ("ゑ", "we", "e", "e"),
    ("を", "wo", "o", "o"),
    ("ん", "n", "n", "n"),

    // 濁音・半濁音
    ("が", "ga", "ga", "ga"),    ("ぎ", "gi", "gi", "gi"),    ("ぐ", "gu", "gu", "gu"),
    ("げ", "ge", "ge", "ge"),    ("ご", "go", "go", "go"),
    ("ざ", "za", "za", "za"),    ("じ", "zi", "ji", "ji"),    ("ず", "zu", "zu", "zu"),
    ("ぜ", "ze", "ze", "ze"),    ("ぞ", "zo", "zo", "zo"),
    ("だ", "da", "da", "da"),    ("ぢ", "di", "ji", "ji"),    ("づ", "du", "zu", "zu"),
    ("で", "de", "de", "de"),    ("ど", "do", "do", "do"),
    ("ば", "ba", "ba", "ba"),    ("び", "bi", "bi", "bi"),    ("ぶ", "bu", "bu", "bu"),
    ("べ", "be", "be", "be"),    ("ぼ", "bo", "bo", "bo"),
    ("ぱ", "pa", "pa", "pa"),    ("ぴ", "pi", "pi", "pi"),    ("ぷ", "pu", "pu", "pu"),
    ("ぺ", "pe", "pe", "pe"),    ("ぽ", "po", "po", "po"),
    ("ゔ", "vu", "bu", "vu"),

    // 拗音
    ("きゃ", "kya", "kya", "kya"), ("きゅ", "kyu", "kyu", "kyu"), ("きょ", "kyo", "kyo", "kyo"),
    ("しゃ", "sya", "sha", "sha"), ("しゅ", "syu", "shu", "shu"), ("しょ", "syo", "sho", "sho"),
    ("ちゃ", "tya", "cha", "cha"), ("ちゅ", "tyu", "chu", "chu"), ("ちょ", "tyo", "cho", "cho"),
    ("にゃ", "nya", "nya", "nya"), ("にゅ", "nyu", "nyu", "nyu"), ("にょ", "nyo", "nyo", "nyo"),
    ("ひゃ", "hya", "hya", "hya"), ("ひゅ", "hyu", "hyu", "hyu"), ("ひょ", "hyo", "hyo", "hyo"),
    ("みゃ", "mya", "mya", "mya"), ("みゅ", "myu", "myu", "myu"), ("みょ", "myo", "myo", "myo"),
    ("りゃ", "rya", "rya", "rya"), ("りゅ", "ryu", "ryu", "ryu"), ("りょ", "ryo", "ryo", "ryo"),
    ("ぎゃ", "gya", "gya", "gya"), ("ぎゅ", "gyu", "gyu", "gyu"), ("ぎょ", "gyo", "gyo", "gyo"),
    ("じゃ", "zya", "ja", "ja"),   ("じゅ", "zyu", "ju", "ju"),   ("じょ", "zyo", "jo", "jo"),
    ("ぢゃ", "dya", "ja", "ja"),   ("ぢゅ", "dyu", "ju", "ju"),   ("ぢょ", "dyo", "jo", "jo"),
    ("びゃ", "bya", "bya", "bya"), ("びゅ", "byu", "byu", "byu"), ("びょ", "byo", "byo", "byo"),
    ("ぴゃ", "pya", "pya", "pya"), ("ぴゅ", "pyu", "pyu", "pyu"), ("ぴょ", "pyo", "pyo", "pyo"),
    ("くゎ", "kwa", "kwa", "kwa"), ("ぐゎ", "gwa", "gwa", "gwa"),

    // 外来音
    ("いぇ", "ye", "ye", "ye"),
    ("うぃ", "wi", "wi", "wi"),    ("うぇ", "we", "we", "we"),    ("うぉ", "wo", "wo", "wo"),
    ("ゔぁ", "va", "ba", "va"),    ("ゔぃ", "vi", "bi", "vi"),
    ("ゔぇ", "ve", "be", "ve"),    ("ゔぉ", "vo", "bo", "vo"),
    ("しぇ", "sye", "she", "she"), ("じぇ", "zye", "je", "je"),   ("ちぇ", "tye", "che", "che"),
    ("てぃ", "ti", "ti", "ti"),    ("でぃ", "di", "di", "di"),
    ("とぅ", "tu", "tu", "tu"),    ("どぅ", "du", "du", "du"),
    ("ふぁ", "fa", "fa", "fa"),    ("ふぃ", "fi", "fi", "fi"),
    ("ふぇ", "fe", "fe", "fe"),    ("ふぉ", "fo", "fo", "fo"),

    // 小書き
    ("ぁ", "a", "a", "a"),       ("ぃ", "i", "i", "i"),       ("ぅ", "u", "u", "u"),
    ("ぇ", "e", "e", "e"),       ("ぉ", "o", "o", "o"),
    ("ゃ", "ya", "ya", "ya"),    ("ゅ", "yu", "yu", "yu"),    ("ょ", "yo", "yo", "yo"),
    ("ゎ", "wa", "wa", "wa"),    ("ゕ", "ka", "ka", "ka"),    ("ゖ", "ke", "ke", "ke"),

    // 長音符: Nippon and Hepburn markers are folded into the vowel later
    ("ー", "^", "", "-"),
];

#[rustfmt::skip]
const SYMBOLS: &[(&str, &str)] = &[
    ("１", "1"), ("２", "2"), ("３", "3"), ("４", "4"), ("５", "5"),
    ("６", "6"), ("７", "7"), ("８", "8"), ("９", "9"), ("０", "0"),
    ("！", "!"), ("“", "\""), ("”", "\""), ("＃", "#"), ("＄", "$"),
    ("％", "%"), ("＆", "&"), ("’", "'"), ("（", "("), ("）", ")"),
    ("＝", "="), ("～", "~"), ("｜", "|"), ("＠", "@"), ("‘", "`"),
    ("＋", "+"), ("＊", "*"), ("；", ";"), ("：", ":"), ("＜", "<"),
    ("＞", ">"), ("、", ","), ("。", "."), ("／", "/"), ("？", "?"),
    ("＿", "_"), ("・", "･"), ("「", "\""), ("」", "\""), ("｛", "{"),
    ("｝", "}"), ("￥", "\\"), ("＾", "^"),
];

/// A single romanization table
pub type RomajiTable = HashMap<String, &'static str>;

fn build_table(column: fn(&Row) -> &'static str) -> RomajiTable {
    let mut table = HashMap::with_capacity(MORAE.len() * 2 + SYMBOLS.len());
    for row in MORAE {
        let romaji = column(row);
        table.insert(row.0.to_string(), romaji);
        table.insert(to_katakana(row.0), romaji);
    }
    for &(symbol, ascii) in SYMBOLS {
        table.insert(symbol.to_string(), ascii);
    }
    table
}

static NIPPON: LazyLock<RomajiTable> = LazyLock::new(|| build_table(|row| row.1));
static PASSPORT: LazyLock<RomajiTable> = LazyLock::new(|| build_table(|row| row.2));
static HEPBURN: LazyLock<RomajiTable> = LazyLock::new(|| build_table(|row| row.3));

/// Table for the given system
pub fn table(system: RomajiSystem) -> &'static RomajiTable {
    match system {
        RomajiSystem::Nippon => &*NIPPON,
        RomajiSystem::Passport => &*PASSPORT,
        RomajiSystem::Hepburn => &*HEPBURN,
    }
}

/// Look up a 1 or 2 character kana sequence
pub fn lookup(system: RomajiSystem, kana: &str) -> Option<&'static str> {
    table(system).get(kana).copied()
}
