//! Configuration types for the normalization pipeline.
//!
//! This module defines [`NormalizeConfig`], which controls the decision
//! thresholds of the pipeline. It is intended to be cheap to clone and easy
//! to deserialize from external configuration formats such as JSON, TOML, or
//! YAML.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change to normalization
//! behavior (even bug fixes) must be accompanied by a version bump so that
//! downstream frequency analysis can tell which normalization produced a
//! given record. Version 0 is reserved and rejected.
//!
//! # Quick start
//!
//! ```rust
//! use tweetnorm::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.short_text_threshold, 10);
//! assert_eq!(config.min_token_chars, 3);
//!
//! // Always validate at startup
//! config.validate().expect("valid configuration");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Runtime configuration for the normalization pipeline.
///
/// For a given `version`, the configuration produces identical output across
/// machines, operating systems, and locales: the pipeline never consults a
/// clock, the filesystem, or the environment.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "short_text_threshold": 10,
///   "min_token_chars": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization configuration.
    ///
    /// Must be >= 1; version 0 is reserved and rejected by [`validate`](Self::validate).
    pub version: u32,

    /// Stripped texts at or below this many characters skip language
    /// detection entirely and take the fallback tag.
    ///
    /// Short strings are unreliable for any detector; triggering it wastes
    /// effort and hurts correctness. Default: 10.
    pub short_text_threshold: usize,

    /// Tokens must be strictly longer than this many characters to survive
    /// the token filter.
    ///
    /// Default: 3, i.e. only tokens of four or more characters are kept.
    pub min_token_chars: usize,
}

impl NormalizeConfig {
    /// Checks the configuration for reserved or inconsistent values.
    ///
    /// Call this at startup; [`Pipeline::new`](crate::Pipeline::new) also
    /// calls it and refuses to build from an invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if `version` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            short_text_threshold: 10,
            min_token_chars: 3,
        }
    }
}
