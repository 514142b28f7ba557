//! Language classification with a hard fallback contract.
//!
//! Detection on short or noisy text is unreliable, so the classifier applies
//! two policies before trusting any detector:
//!
//! - stripped texts at or below the configured character threshold skip
//!   detection entirely and take the fallback tag;
//! - a detector that cannot determine the language maps to the fallback tag.
//!
//! The classifier never propagates a failure to the caller. That contract is
//! visible in the types: [`LanguageDetector::detect`] returns an `Option`,
//! and [`classify`] returns a plain [`LanguageTag`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected language, branching the downstream cleaning rules.
///
/// `English` doubles as the fallback tag: the default cleaning rules are the
/// English ones, and detection that is skipped or fails lands on the same
/// variant as genuinely detected English. `Other` carries the detector's
/// language code and selects the broader non-English character rules; no
/// stage branches on the code itself.
///
/// Serializes as a plain string (`"en"` or the code) so records stay
/// friendly to downstream analysis glue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageTag {
    /// English, which is also the fallback/default-rules tag.
    English,
    /// Any other detected language, carrying its ISO-639-style code.
    Other(String),
}

impl LanguageTag {
    /// The tag used when detection is skipped or fails.
    pub const fn fallback() -> Self {
        LanguageTag::English
    }

    /// The tag's language code (`"en"` for English).
    pub fn code(&self) -> &str {
        match self {
            LanguageTag::English => "en",
            LanguageTag::Other(code) => code,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for LanguageTag {
    fn from(code: String) -> Self {
        match code.as_str() {
            "en" | "eng" => LanguageTag::English,
            _ => LanguageTag::Other(code),
        }
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.code().to_string()
    }
}

/// A pluggable language detection capability.
///
/// `None` means "cannot determine"; the classifier maps it to the fallback
/// tag. Implementations must be safe to share across threads, as every
/// concurrent pipeline invocation reads the same detector.
pub trait LanguageDetector: Send + Sync {
    /// Detects the dominant language of `text`, or `None` if undeterminable.
    fn detect(&self, text: &str) -> Option<LanguageTag>;
}

/// Default detector backed by the trigram-based `whatlang` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<LanguageTag> {
        whatlang::detect(text).map(|info| match info.lang() {
            whatlang::Lang::Eng => LanguageTag::English,
            lang => LanguageTag::Other(lang.code().to_string()),
        })
    }
}

/// Classifies stripped text, applying the short-text and failure fallbacks.
///
/// Texts of `threshold` characters or fewer never reach the detector.
pub(crate) fn classify<D: LanguageDetector>(
    detector: &D,
    stripped: &str,
    threshold: usize,
) -> LanguageTag {
    if stripped.chars().count() <= threshold {
        return LanguageTag::fallback();
    }
    detector.detect(stripped).unwrap_or_else(LanguageTag::fallback)
}
