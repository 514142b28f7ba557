//! Error types produced by this crate.
//!
//! The normalization path itself is infallible by contract: collaborator
//! failures (undetectable language, missing spelling suggestion) are absorbed
//! at the point of use and degrade output quality instead of surfacing here.
//! The only errors a caller can see are configuration errors raised at
//! pipeline construction time.

use thiserror::Error;

/// Errors raised when validating a [`NormalizeConfig`](crate::NormalizeConfig).
///
/// All variants are cloneable and comparable to keep error handling and
/// testing precise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration is internally inconsistent or uses reserved values.
    ///
    /// The message describes the specific violation, e.g. a `version` of 0
    /// (version 0 is reserved and always rejected).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
