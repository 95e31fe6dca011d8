//! Morphological analyzer contract
//!
//! Tokenization itself lives outside this crate. Any dictionary-backed
//! tokenizer (MeCab, Kuromoji, Lindera, Vibrato...) can be plugged in by
//! implementing [`Analyzer`].

use super::token::Token;

/// Analyzer failure
#[derive(Debug)]
pub enum AnalyzerError {
    /// Dictionary or model could not be read
    Io(std::io::Error),
    /// Initialization failed
    Init(String),
    /// `parse` was called before `init` succeeded
    NotInitialized,
    /// Tokenization failed
    Parse(String),
}

impl std::fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerError::Io(e) => write!(f, "analyzer i/o error: {}", e),
            AnalyzerError::Init(s) => write!(f, "analyzer initialization failed: {}", s),
            AnalyzerError::NotInitialized => write!(f, "analyzer is not initialized"),
            AnalyzerError::Parse(s) => write!(f, "analyzer failed to parse text: {}", s),
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(e: std::io::Error) -> Self {
        AnalyzerError::Io(e)
    }
}

/// Splits text into morphemes
pub trait Analyzer {
    /// One-time setup such as loading a dictionary
    fn init(&mut self) -> Result<(), AnalyzerError> {
        Ok(())
    }

    /// Tokenize `text`; concatenated surface forms should reproduce it
    fn parse(&self, text: &str) -> Result<Vec<Token>, AnalyzerError>;
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn init(&mut self) -> Result<(), AnalyzerError> {
        (**self).init()
    }

    fn parse(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        (**self).parse(text)
    }
}
