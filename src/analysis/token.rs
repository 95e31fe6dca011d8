//! Morpheme token produced by an analyzer

use serde::{Deserialize, Serialize};

/// 動詞
pub const POS_VERB: &str = "動詞";
/// 助動詞
pub const POS_AUXILIARY_VERB: &str = "助動詞";
/// 形容詞
pub const POS_ADJECTIVE: &str = "形容詞";

/// One morpheme
///
/// `reading` is expected in katakana and `pronunciation` may differ from it
/// for long vowels (e.g. reading トウキョウ, pronunciation トーキョー).
/// Both are optional; [`patch_tokens`](crate::analysis::patch_tokens) fills
/// in a reading for every token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub surface_form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

impl Token {
    pub fn new(surface_form: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            ..Self::default()
        }
    }

    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Reading, or the surface form when there is none
    pub fn reading_text(&self) -> &str {
        non_empty(&self.reading).unwrap_or(&self.surface_form)
    }

    /// Pronunciation, falling back to the reading
    pub fn pronunciation_text(&self) -> &str {
        non_empty(&self.pronunciation).unwrap_or_else(|| self.reading_text())
    }

    pub fn has_pos(&self, pos: &str) -> bool {
        self.pos.as_deref() == Some(pos)
    }
}

/// Empty strings count as missing
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
