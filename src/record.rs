//! Input and output record types for the normalization pipeline.

use serde::{Deserialize, Serialize};

use crate::language::LanguageTag;

/// One unit of raw input text to be normalized.
///
/// Created by the caller's data source, consumed once per
/// [`normalize`](crate::Pipeline::normalize) call, never retained by the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDocument {
    /// The raw text, exactly as it arrived from the source.
    pub text: String,
}

impl From<String> for RawDocument {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for RawDocument {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

/// The normalized output triple for one document.
///
/// Owned by the caller once returned; the pipeline holds no reference to it.
/// For a fixed configuration and deterministic capabilities, normalizing the
/// same [`RawDocument`] twice yields equal records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// The surviving tokens, lowercased, corrected, lemmatized, and joined
    /// with single spaces. May be empty.
    pub clean_text: String,

    /// Emoji characters from the raw text in original left-to-right order,
    /// not deduplicated. May be empty.
    pub emojis: String,

    /// The detected language, or the fallback tag when detection was skipped
    /// or failed. Always present.
    pub language: LanguageTag,
}
