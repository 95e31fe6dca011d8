//! Character classification and transliteration engine

pub mod converter;
pub mod romaji;
pub mod romaji_table;
pub mod unicode;

pub use converter::{to_hiragana, to_katakana};
pub use romaji::to_romaji;
