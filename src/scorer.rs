//! Guess-model scoring: guesses, entropy bits and dictionary hits.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::estimator::{default_estimator, Dictionary, GuessEstimator};

/// Dictionary matches ranked at or above this count as a hit.
pub const DICTIONARY_RANK_LIMIT: usize = 10_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Estimator returned an invalid guess count: {0}")]
    InvalidGuessCount(f64),
}

/// Guess-model view of a password.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthEstimate {
    pub guesses: f64,
    /// `log2(guesses)`
    pub entropy_bits: f64,
    pub dictionary_hit: bool,
}

/// Scores `password` with `estimator`.
///
/// # Errors
/// `ScoreError::InvalidGuessCount` if the estimator reports fewer than one
/// guess (or a non-finite count), for which entropy is undefined.
pub fn score(password: &SecretString, estimator: &dyn GuessEstimator) -> Result<StrengthEstimate, ScoreError> {
    let report = estimator.estimate(password.expose_secret());

    if !(report.guesses.is_finite() && report.guesses >= 1.0) {
        #[cfg(feature = "tracing")]
        tracing::error!("Estimator returned invalid guess count: {}", report.guesses);
        return Err(ScoreError::InvalidGuessCount(report.guesses));
    }

    let dictionary_hit = report.sequence.iter().any(|m| {
        matches!(m.dictionary, Dictionary::Passwords | Dictionary::English)
            && m.rank <= DICTIONARY_RANK_LIMIT
    });

    Ok(StrengthEstimate {
        guesses: report.guesses,
        entropy_bits: report.guesses.log2(),
        dictionary_hit,
    })
}

/// Scores `password` with [`default_estimator`].
pub fn score_default(password: &SecretString) -> Result<StrengthEstimate, ScoreError> {
    score(password, default_estimator())
}
