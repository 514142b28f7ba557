//! Emoji extraction.
//!
//! Emoji are affect signals in their own right, so they are pulled out of the
//! *original* raw text before any stripping or filtering touches it, so an
//! emoji embedded anywhere in the stream is captured regardless of what the
//! later stages remove.

/// A pluggable per-character emoji classification capability.
///
/// The contract is deliberately per-`char`: multi-codepoint sequences (ZWJ
/// families, flags) come out as their component scalars. Variation selectors
/// and the ZWJ itself classify as emoji so such sequences survive
/// contiguously in the extracted output.
pub trait EmojiClassifier: Send + Sync {
    /// Whether `ch` is an emoji scalar. Total; never fails.
    fn is_emoji(&self, ch: char) -> bool;
}

/// Default classifier over the Unicode emoji code-point blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeRangeClassifier;

impl EmojiClassifier for UnicodeRangeClassifier {
    fn is_emoji(&self, ch: char) -> bool {
        let code = ch as u32;
        matches!(
            code,
            0x1F300..=0x1F9FF // Misc pictographs, emoticons, transport, supplemental
                | 0x1FA00..=0x1FAFF // Symbols and Pictographs Extended-A
                | 0x2600..=0x26FF // Miscellaneous Symbols
                | 0x2700..=0x27BF // Dingbats
                | 0x1F1E6..=0x1F1FF // Regional indicators (flags)
                | 0xFE00..=0xFE0F // Variation selectors
                | 0x200D // Zero-width joiner
                | 0x20E3 // Combining enclosing keycap
        )
    }
}

/// Extracts the emoji subsequence of `text` in original left-to-right order.
///
/// Not deduplicated; an empty result is a valid output for text with no
/// emoji, not an error.
pub fn extract_emojis<E: EmojiClassifier>(text: &str, classifier: &E) -> String {
    text.chars().filter(|c| classifier.is_emoji(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_original_order() {
        let out = extract_emojis("fire 🔥 then gem 💎 then fire 🔥", &UnicodeRangeClassifier);
        assert_eq!(out, "🔥💎🔥");
    }

    #[test]
    fn adjacent_emoji_not_deduplicated() {
        let out = extract_emojis("so good 😍😍", &UnicodeRangeClassifier);
        assert_eq!(out, "😍😍");
    }

    #[test]
    fn no_emoji_yields_empty() {
        let out = extract_emojis("plain ascii text, 100% emoji-free", &UnicodeRangeClassifier);
        assert_eq!(out, "");
    }

    #[test]
    fn ordinary_unicode_is_not_emoji() {
        let out = extract_emojis("café こんにちは привет", &UnicodeRangeClassifier);
        assert_eq!(out, "");
    }

    #[test]
    fn zwj_sequence_components_survive_contiguously() {
        // Family emoji: four people joined by ZWJs.
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let out = extract_emojis(family, &UnicodeRangeClassifier);
        assert_eq!(out, family);
    }
}
