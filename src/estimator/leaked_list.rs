//! Estimator backed by the leaked-password list.

use super::{Dictionary, DictionaryMatch, GuessEstimator, GuessReport};
use crate::brute_force::{CharacterPoolProfile, MAX_LOG_COMBOS};
use crate::leaked::leaked_rank;

const MIN_TOKEN_LEN: usize = 4;
const MAX_TOKEN_LEN: usize = 32;

/// Ranks exact leaked passwords by list position and falls back to
/// brute force for everything the list does not cover.
///
/// The longest leaked substring (4 to 32 chars) is charged at its rank;
/// the remaining characters are charged at the brute-force pool size.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeakedListEstimator;

impl LeakedListEstimator {
    /// Longest leaked substring as `(char length, rank)`, best rank on ties.
    fn longest_leaked_token(chars: &[char]) -> Option<(usize, usize)> {
        let longest = chars.len().min(MAX_TOKEN_LEN);
        (MIN_TOKEN_LEN..=longest).rev().find_map(|len| {
            chars
                .windows(len)
                .filter_map(|w| leaked_rank(&w.iter().collect::<String>()))
                .min()
                .map(|rank| (len, rank))
        })
    }
}

impl GuessEstimator for LeakedListEstimator {
    fn estimate(&self, password: &str) -> GuessReport {
        if let Some(rank) = leaked_rank(password) {
            return GuessReport {
                guesses: rank as f64,
                sequence: vec![DictionaryMatch { dictionary: Dictionary::Passwords, rank }],
            };
        }

        let chars: Vec<char> = password.chars().collect();
        let ln_pool = f64::from(CharacterPoolProfile::of(password).pool_size()).ln();

        let (log_guesses, sequence) = match Self::longest_leaked_token(&chars) {
            Some((len, rank)) => (
                (rank as f64).ln() + (chars.len() - len) as f64 * ln_pool,
                vec![DictionaryMatch { dictionary: Dictionary::Passwords, rank }],
            ),
            None => (chars.len() as f64 * ln_pool, Vec::new()),
        };

        let guesses = if log_guesses > MAX_LOG_COMBOS {
            f64::MAX
        } else {
            log_guesses.exp().max(1.0)
        };

        GuessReport { guesses, sequence }
    }
}
