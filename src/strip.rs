//! Structural stripping of URLs, @mentions, and #hashtags.
//!
//! These runs carry no lexical signal for frequency analysis, so they are
//! removed wholesale before language detection. Surrounding whitespace and
//! punctuation are left untouched; later stages tolerate the extra
//! whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme-prefixed or `www`-prefixed token runs.
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").expect("valid regex"));

/// `@token` and `#token` runs.
static HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+|#\w+").expect("valid regex"));

/// Removes URL-shaped substrings and @mention/#hashtag runs from `text`.
///
/// The two patterns cannot overlap, so removal order does not matter. No
/// error conditions; stripping everything away yields an empty (or
/// whitespace-only) string, which is a valid output.
pub fn strip_structural(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    HANDLE_RE.replace_all(&without_urls, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_scheme_urls() {
        assert_eq!(
            strip_structural("check http://x.co/abc now"),
            "check  now"
        );
        assert_eq!(
            strip_structural("see https://example.com/path?q=1"),
            "see "
        );
    }

    #[test]
    fn removes_www_urls() {
        assert_eq!(strip_structural("go to www.example.com ok"), "go to  ok");
    }

    #[test]
    fn removes_mentions_and_hashtags() {
        assert_eq!(
            strip_structural("@alice said #great things to @bob"),
            " said  things to "
        );
    }

    #[test]
    fn bare_at_and_hash_are_kept() {
        // A lone marker with no word characters after it is not a token run.
        assert_eq!(strip_structural("a @ b # c"), "a @ b # c");
    }

    #[test]
    fn prose_untouched() {
        assert_eq!(
            strip_structural("nothing structural in here!"),
            "nothing structural in here!"
        );
    }
}
