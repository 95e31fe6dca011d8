//! Conversion entry point
//!
//! Owns one analyzer. Every conversion parses the input, patches the token
//! stream and renders it according to [`ConversionOptions`].

use crate::analysis::{patch_tokens, Analyzer, AnalyzerError, Token};
use crate::config::{ConversionOptions, Mode, Target};
use crate::core::converter::to_hiragana;
use crate::core::romaji::to_romaji;
use crate::detection::{has_japanese, has_kanji, has_katakana};
use crate::error::ConvertError;
use crate::notation::{build_notations, hiragana_keeping_katakana, render_notations};

/// Japanese text converter
pub struct Kuroshiro<A: Analyzer> {
    analyzer: A,
}

impl<A: Analyzer> Kuroshiro<A> {
    /// Initialize `analyzer` and take ownership of it
    pub fn init(mut analyzer: A) -> Result<Self, AnalyzerError> {
        analyzer.init()?;
        log::info!("analyzer initialized");
        Ok(Self { analyzer })
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Convert `text` to the target syllabary
    ///
    /// Empty input returns an empty string without touching the analyzer.
    pub fn convert(&self, text: &str, options: &ConversionOptions) -> Result<String, ConvertError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let tokens = patch_tokens(self.analyzer.parse(text)?);
        log::debug!(
            "converting {} tokens to {} ({} mode, {} romanization)",
            tokens.len(),
            options.to,
            options.mode,
            options.romaji_system
        );

        let output = match options.mode {
            Mode::Normal | Mode::Spaced => render_tokens(&tokens, options),
            Mode::Okurigana | Mode::Furigana => {
                render_notations(&build_notations(&tokens), options)
            }
        };
        Ok(output)
    }
}

/// Render tokens for normal and spaced mode
fn render_tokens(tokens: &[Token], options: &ConversionOptions) -> String {
    let separator = if options.mode == Mode::Spaced { " " } else { "" };

    tokens
        .iter()
        .map(|token| match options.to {
            Target::Katakana => token.reading_text().to_string(),
            Target::Romaji => {
                let source = if has_japanese(&token.surface_form) {
                    token.pronunciation_text()
                } else {
                    token.surface_form.as_str()
                };
                to_romaji(source, options.romaji_system)
            }
            Target::Hiragana => token_hiragana(token),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Kanji tokens read in hiragana; everything else keeps its surface form
fn token_hiragana(token: &Token) -> String {
    let surface = token.surface_form.as_str();
    if !has_kanji(surface) {
        return surface.to_string();
    }
    if has_katakana(surface) {
        hiragana_keeping_katakana(surface, token.reading_text())
    } else {
        to_hiragana(token.reading_text())
    }
}
