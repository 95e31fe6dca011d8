//! String-level script detection

pub mod scanner;

pub use scanner::{
    get_str_type, has_hiragana, has_japanese, has_kana, has_kanji, has_katakana, is_all_kana,
    StrType,
};
