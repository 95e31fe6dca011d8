//! Analyzer contract, token model and token patching

mod analyzer;
mod patcher;
mod token;

pub use analyzer::{Analyzer, AnalyzerError};
pub use patcher::patch_tokens;
pub use token::{Token, POS_ADJECTIVE, POS_AUXILIARY_VERB, POS_VERB};
