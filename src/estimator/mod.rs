//! Guess-count estimators
//!
//! An estimator turns a password into an estimated number of attacker
//! guesses plus the dictionary matches it found along the way. The scorer
//! only depends on the [`GuessEstimator`] trait, so estimators can be swapped.

mod leaked_list;
#[cfg(feature = "zxcvbn")]
mod zxcvbn_model;

pub use leaked_list::LeakedListEstimator;
#[cfg(feature = "zxcvbn")]
pub use zxcvbn_model::ZxcvbnEstimator;

/// Word list a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dictionary {
    Passwords,
    English,
    UserInputs,
    Other,
}

/// A segment of the password found in a ranked dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMatch {
    pub dictionary: Dictionary,
    /// 1-based rank within the dictionary (1 = most common).
    pub rank: usize,
}

/// Raw estimator output.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessReport {
    /// Estimated guesses; at least 1 for a well-behaved estimator.
    pub guesses: f64,
    pub sequence: Vec<DictionaryMatch>,
}

/// Estimates how many guesses an attacker needs for a password.
pub trait GuessEstimator: Send + Sync {
    fn estimate(&self, password: &str) -> GuessReport;
}

#[cfg(feature = "zxcvbn")]
static DEFAULT_ESTIMATOR: ZxcvbnEstimator = ZxcvbnEstimator::new();

#[cfg(not(feature = "zxcvbn"))]
static DEFAULT_ESTIMATOR: LeakedListEstimator = LeakedListEstimator;

/// The estimator used by [`crate::score_default`]: zxcvbn when the feature
/// is enabled, the leaked-list estimator otherwise.
pub fn default_estimator() -> &'static dyn GuessEstimator {
    &DEFAULT_ESTIMATOR
}
