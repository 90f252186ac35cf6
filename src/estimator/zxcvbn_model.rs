//! Estimator backed by the `zxcvbn` crate.

use zxcvbn::matching::patterns::MatchPattern;

use super::{Dictionary, DictionaryMatch, GuessEstimator, GuessReport};

/// zxcvbn guess model, optionally penalizing user-specific words
/// (username, email parts).
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnEstimator {
    user_inputs: Vec<String>,
}

impl ZxcvbnEstimator {
    pub const fn new() -> Self {
        Self { user_inputs: Vec::new() }
    }

    pub fn with_user_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Maps zxcvbn's dictionary kind by its `Debug` name; the enum itself is
/// not exported by the crate.
fn dictionary_of(kind: &str) -> Dictionary {
    match kind {
        "Passwords" => Dictionary::Passwords,
        "English" => Dictionary::English,
        "UserInputs" => Dictionary::UserInputs,
        _ => Dictionary::Other,
    }
}

impl GuessEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> GuessReport {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs);

        let sequence = entropy
            .sequence()
            .iter()
            .filter_map(|m| match &m.pattern {
                MatchPattern::Dictionary(d) => Some(DictionaryMatch {
                    dictionary: dictionary_of(&format!("{:?}", d.dictionary_name)),
                    rank: d.rank,
                }),
                _ => None,
            })
            .collect();

        GuessReport {
            guesses: (entropy.guesses() as f64).max(1.0),
            sequence,
        }
    }
}
