//! Japanese text to hiragana, katakana and romaji
//!
//! Morphological analysis is delegated to an [`Analyzer`]. The transliteration
//! helpers ([`to_hiragana`], [`to_katakana`], [`to_romaji`]) and the script
//! detection functions work on plain strings without one.

pub mod analysis;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod kuroshiro;
pub mod notation;

pub use analysis::{patch_tokens, Analyzer, AnalyzerError, Token};
pub use config::{ConfigError, ConversionOptions, Mode, RomajiSystem, Target};
pub use crate::core::{to_hiragana, to_katakana, to_romaji};
pub use detection::{
    get_str_type, has_hiragana, has_japanese, has_kana, has_kanji, has_katakana, StrType,
};
pub use error::ConvertError;
pub use kuroshiro::Kuroshiro;
