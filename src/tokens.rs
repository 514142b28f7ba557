//! Token normalization: lowercase, split, filter, correct, lemmatize.

use fxhash::FxHashSet;

use crate::lemma::Lemmatizer;
use crate::spell::SpellCorrector;

/// Loads the fixed English stopword list into a hash set.
///
/// Built once per pipeline and shared read-only across invocations. The same
/// set is applied to every language branch, a deliberate cross-language
/// approximation carried over from the original cleaning behavior.
pub fn english_stopwords() -> FxHashSet<String> {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect()
}

/// Runs the token-level stages over filtered text.
///
/// Steps, in order: lowercase the whole string, split on whitespace, keep a
/// token only if its character count exceeds `min_token_chars` and it is not
/// a stopword, then spell-correct (a miss keeps the original) and lemmatize
/// each survivor. Returns the ordered token list; the caller joins it for
/// the canonical `clean_text`.
pub(crate) fn normalize_tokens<C, L>(
    filtered: &str,
    stopwords: &FxHashSet<String>,
    min_token_chars: usize,
    corrector: &C,
    lemmatizer: &L,
) -> Vec<String>
where
    C: SpellCorrector,
    L: Lemmatizer,
{
    let lowered = filtered.to_lowercase();
    let mut tokens = Vec::new();
    for word in lowered.split_whitespace() {
        if word.chars().count() <= min_token_chars || stopwords.contains(word) {
            continue;
        }
        let corrected = corrector
            .correct(word)
            .unwrap_or_else(|| word.to_string());
        tokens.push(lemmatizer.lemmatize(&corrected));
    }
    tokens
}
