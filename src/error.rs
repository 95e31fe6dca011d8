//! Conversion errors

use crate::analysis::AnalyzerError;
use crate::config::ConfigError;

/// Failure while converting text
#[derive(Debug)]
pub enum ConvertError {
    /// Options were rejected
    Config(ConfigError),
    /// The analyzer could not tokenize the input
    Analyzer(AnalyzerError),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Config(e) => write!(f, "configuration error: {}", e),
            ConvertError::Analyzer(e) => write!(f, "analysis error: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Config(e) => Some(e),
            ConvertError::Analyzer(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ConvertError {
    fn from(e: ConfigError) -> Self {
        ConvertError::Config(e)
    }
}

impl From<AnalyzerError> for ConvertError {
    fn from(e: AnalyzerError) -> Self {
        ConvertError::Analyzer(e)
    }
}
