//! Tweet normalization pipeline.
//!
//! This crate normalizes short, noisy social-media text into a clean token
//! stream suitable for downstream frequency analysis, while separately
//! preserving emoji as affect signals.
//!
//! ## What we do
//!
//! - Emoji extraction from the original raw text, in order
//! - Structural stripping of URLs, @mentions, and #hashtags
//! - Language classification with a short-text + failure fallback
//! - Language-conditioned character filtering and English contraction
//!   expansion
//! - Token normalization: lowercase, length and stopword filters, spelling
//!   correction, lemmatization
//!
//! The result of one [`Pipeline::normalize`] call is a [`NormalizedRecord`]
//! triple: clean text, emoji sequence, language tag.
//!
//! ## Failure absorption guarantee
//!
//! Nothing inside `normalize` is fatal. An undetectable language becomes the
//! fallback tag, a missing spelling suggestion keeps the original token, and
//! empty or garbage input yields an empty record. Degraded output quality is
//! the only user-visible failure mode; a batch never aborts on one bad
//! document.
//!
//! ## Pure per-document computation
//!
//! No I/O, no clock calls, no cross-document state. Same text + same config
//! + deterministic capabilities = same record, on any machine, in any order,
//! on any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use tweetnorm::{NormalizeConfig, Pipeline, RawDocument};
//!
//! let pipeline = Pipeline::new(NormalizeConfig::default()).unwrap();
//! let record = pipeline.normalize(&RawDocument::from("short 😍"));
//!
//! assert_eq!(record.emojis, "😍");
//! assert_eq!(record.language.code(), "en");
//! ```
//!
//! Dataset loading, label balancing, frequency counting, and rendering are
//! caller-owned glue: this crate consumes raw document records and produces
//! normalized records, nothing more.

mod config;
mod emoji;
mod error;
mod filter;
mod language;
mod lemma;
mod pipeline;
mod record;
mod spell;
mod strip;
mod tokens;

pub use crate::config::NormalizeConfig;
pub use crate::emoji::{extract_emojis, EmojiClassifier, UnicodeRangeClassifier};
pub use crate::error::ConfigError;
pub use crate::filter::{expand_contractions, filter_lexical, CONTRACTIONS};
pub use crate::language::{LanguageDetector, LanguageTag, WhatlangDetector};
pub use crate::lemma::{Lemmatizer, StemLemmatizer};
pub use crate::pipeline::Pipeline;
pub use crate::record::{NormalizedRecord, RawDocument};
pub use crate::spell::{EditDistanceCorrector, NoopCorrector, SpellCorrector};
pub use crate::strip::strip_structural;
pub use crate::tokens::english_stopwords;
