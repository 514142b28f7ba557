//! Language-conditioned lexical filtering and contraction expansion.
//!
//! The cleaning rules branch on the [`LanguageTag`] variant rather than on
//! scattered string comparisons, so adding a rule set for a new language
//! touches only this module.

use crate::language::LanguageTag;

/// Ordered contraction expansions for the English branch.
///
/// The order is significant: each replacement operates on the result of the
/// previous one, and targets can be substrings of one another (`" ur "` must
/// run before `" u "`). These are blunt substring replacements, not
/// word-boundary aware: `"im"` matches inside longer words too. That is the
/// accepted behavior; changing it would silently shift token frequencies.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("im", "i am"),
    ("dont", "do not"),
    ("cant", "cannot"),
    ("wont", "will not"),
    (" ur ", " your "),
    (" u ", " you "),
];

/// Filters `text` down to the characters the language branch allows, then
/// expands contractions on the English branch.
///
/// - [`LanguageTag::English`] (the fallback/default branch): keep ASCII
///   letters and whitespace only, then apply [`CONTRACTIONS`] in order.
/// - [`LanguageTag::Other`]: keep word characters (alphanumeric or `_`) and
///   whitespace, admitting non-ASCII letters and digits.
///
/// Always returns a (possibly empty) string; no error conditions.
pub fn filter_lexical(text: &str, language: &LanguageTag) -> String {
    match language {
        LanguageTag::English => {
            let kept: String = text
                .chars()
                .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
                .collect();
            expand_contractions(&kept)
        }
        LanguageTag::Other(_) => text
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect(),
    }
}

/// Applies [`CONTRACTIONS`] as sequential literal replacements.
pub fn expand_contractions(text: &str) -> String {
    let mut expanded = text.to_string();
    for (pattern, replacement) in CONTRACTIONS {
        if expanded.contains(pattern) {
            expanded = expanded.replace(pattern, replacement);
        }
    }
    expanded
}
