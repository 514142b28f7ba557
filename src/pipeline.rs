//! Pipeline orchestration.
//!
//! [`Pipeline`] holds the configuration plus the four capabilities and runs
//! the per-document stage sequence. Statically composed: the struct is
//! generic over its capability types, so a pipeline built from concrete
//! implementations monomorphizes with no dynamic dispatch.

use std::time::Instant;

use fxhash::FxHashSet;
use tracing::{debug, Level};

use crate::config::NormalizeConfig;
use crate::emoji::{extract_emojis, EmojiClassifier, UnicodeRangeClassifier};
use crate::error::ConfigError;
use crate::filter::filter_lexical;
use crate::language::{classify, LanguageDetector, WhatlangDetector};
use crate::lemma::{Lemmatizer, StemLemmatizer};
use crate::record::{NormalizedRecord, RawDocument};
use crate::spell::{NoopCorrector, SpellCorrector};
use crate::strip::strip_structural;
use crate::tokens::{english_stopwords, normalize_tokens};

/// The per-document normalization pipeline.
///
/// Stateless across documents: each [`normalize`](Self::normalize) call is a
/// pure function of the input text, the configuration, and the (read-only)
/// capabilities, so one pipeline can serve any number of concurrent callers.
///
/// # Example
///
/// ```rust
/// use tweetnorm::{NormalizeConfig, Pipeline, RawDocument};
///
/// let pipeline = Pipeline::new(NormalizeConfig::default()).unwrap();
/// let record = pipeline.normalize(&RawDocument::from("ok"));
///
/// // Too short for detection: fallback tag, nothing survives the filters.
/// assert_eq!(record.language.code(), "en");
/// assert_eq!(record.clean_text, "");
/// ```
pub struct Pipeline<
    D = WhatlangDetector,
    C = NoopCorrector,
    L = StemLemmatizer,
    E = UnicodeRangeClassifier,
> {
    cfg: NormalizeConfig,
    detector: D,
    corrector: C,
    lemmatizer: L,
    emoji: E,
    stopwords: FxHashSet<String>,
}

impl Pipeline {
    /// Builds a pipeline with the default capabilities: whatlang detection,
    /// no spelling correction, Snowball English stemming, and Unicode-range
    /// emoji classification.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(cfg: NormalizeConfig) -> Result<Self, ConfigError> {
        Self::with_capabilities(
            cfg,
            WhatlangDetector,
            NoopCorrector,
            StemLemmatizer::english(),
            UnicodeRangeClassifier,
        )
    }
}

impl<D, C, L, E> Pipeline<D, C, L, E>
where
    D: LanguageDetector,
    C: SpellCorrector,
    L: Lemmatizer,
    E: EmojiClassifier,
{
    /// Builds a pipeline from explicit capability implementations.
    ///
    /// The English stopword set is loaded once here and shared by every
    /// subsequent invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn with_capabilities(
        cfg: NormalizeConfig,
        detector: D,
        corrector: C,
        lemmatizer: L,
        emoji: E,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            stopwords: english_stopwords(),
            cfg,
            detector,
            corrector,
            lemmatizer,
            emoji,
        })
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &NormalizeConfig {
        &self.cfg
    }

    /// Normalizes one raw document into its output triple.
    ///
    /// Stage order: emoji extraction on the raw text, structural stripping
    /// on the raw text, language classification on the stripped text,
    /// lexical filtering on stripped text + tag, token normalization on the
    /// filtered text. Infallible: collaborator failures are absorbed where
    /// they occur, and empty input yields an empty record, not an error.
    pub fn normalize(&self, doc: &RawDocument) -> NormalizedRecord {
        let start = Instant::now();
        let span = tracing::span!(Level::DEBUG, "pipeline.normalize", raw_len = doc.text.len());
        let _guard = span.enter();

        let emojis = extract_emojis(&doc.text, &self.emoji);
        let stripped = strip_structural(&doc.text);
        let language = classify(&self.detector, &stripped, self.cfg.short_text_threshold);
        let filtered = filter_lexical(&stripped, &language);
        let tokens = normalize_tokens(
            &filtered,
            &self.stopwords,
            self.cfg.min_token_chars,
            &self.corrector,
            &self.lemmatizer,
        );

        let elapsed_micros = start.elapsed().as_micros();
        debug!(
            language = %language,
            token_count = tokens.len(),
            emoji_count = emojis.chars().count(),
            elapsed_micros,
            "normalize_done"
        );

        NormalizedRecord {
            clean_text: tokens.join(" "),
            emojis,
            language,
        }
    }

    /// Normalizes a batch of documents, preserving input order.
    ///
    /// Documents are independent, so with the `parallel` feature this fans
    /// out over rayon; outputs still pair with inputs by index.
    #[cfg(feature = "parallel")]
    pub fn normalize_batch(&self, docs: &[RawDocument]) -> Vec<NormalizedRecord> {
        use rayon::prelude::*;
        docs.par_iter().map(|doc| self.normalize(doc)).collect()
    }

    /// Normalizes a batch of documents, preserving input order.
    #[cfg(not(feature = "parallel"))]
    pub fn normalize_batch(&self, docs: &[RawDocument]) -> Vec<NormalizedRecord> {
        docs.iter().map(|doc| self.normalize(doc)).collect()
    }
}
