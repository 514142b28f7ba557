//! Spelling correction capability.
//!
//! Correction is a best-effort collaborator: a miss is not an error. The
//! `Option` return makes the "keep the original token" contract explicit in
//! the type instead of hiding it behind a caught exception.

use fxhash::FxHashSet;

/// A pluggable spelling correction capability.
///
/// `None` means "no suggestion"; the token normalizer keeps the original
/// token in that case. Implementations must be shareable across threads.
pub trait SpellCorrector: Send + Sync {
    /// Suggests a corrected spelling for `token`, or `None` for no suggestion.
    fn correct(&self, token: &str) -> Option<String>;
}

/// A corrector that never suggests anything.
///
/// This is the default: every correction is a miss and the original token
/// flows through unchanged. Plug in [`EditDistanceCorrector`] (or your own
/// implementation) when a vocabulary is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCorrector;

impl SpellCorrector for NoopCorrector {
    fn correct(&self, _token: &str) -> Option<String> {
        None
    }
}

/// Vocabulary-driven corrector using Levenshtein edit distance.
///
/// A token already in the vocabulary corrects to itself. Otherwise the
/// closest vocabulary word within `max_distance` edits wins; ties break on
/// the lexicographically smallest candidate so results are deterministic
/// regardless of set iteration order.
#[derive(Debug, Clone)]
pub struct EditDistanceCorrector {
    vocabulary: FxHashSet<String>,
    max_distance: usize,
}

impl EditDistanceCorrector {
    /// Builds a corrector from a vocabulary with the default edit distance of 2.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: words.into_iter().map(Into::into).collect(),
            max_distance: 2,
        }
    }

    /// Overrides the maximum edit distance.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }
}

impl SpellCorrector for EditDistanceCorrector {
    fn correct(&self, token: &str) -> Option<String> {
        if self.vocabulary.contains(token) {
            return Some(token.to_string());
        }

        let mut best: Option<(usize, &str)> = None;
        for word in &self.vocabulary {
            let distance = strsim::levenshtein(token, word);
            if distance > self.max_distance {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_distance, best_word)) => {
                    distance < best_distance
                        || (distance == best_distance && word.as_str() < best_word)
                }
            };
            if better {
                best = Some((distance, word));
            }
        }
        best.map(|(_, word)| word.to_string())
    }
}
