//! Lemmatization capability.

use rust_stemmers::{Algorithm, Stemmer};

/// A pluggable lemmatization capability.
///
/// Assumed total: every input maps to some base form, worst case itself.
pub trait Lemmatizer: Send + Sync {
    /// Reduces `token` to its base form.
    fn lemmatize(&self, token: &str) -> String;
}

/// Default lemmatizer backed by the Snowball English stemmer.
///
/// Stemming is cruder than dictionary lemmatization ("studies" becomes
/// "studi", not "study"), but it is deterministic, dependency-light, and
/// collapses inflected forms well enough for frequency analysis. Callers
/// wanting dictionary-grade lemmas plug in their own [`Lemmatizer`].
pub struct StemLemmatizer {
    stemmer: Stemmer,
}

impl StemLemmatizer {
    /// Builds the English stemmer.
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for StemLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer for StemLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}
