//! Brute-force crack time estimation.
//!
//! Models an attacker enumerating every string over the character pool the
//! password appears to draw from, finding it on average halfway through.

use secrecy::{ExposeSecret, SecretString};

use crate::error::RangeError;

const LOWER_POOL: u32 = 26;
const UPPER_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 32;

/// Natural-log ceiling of the keyspace; `exp` of anything larger overflows `f64`.
pub const MAX_LOG_COMBOS: f64 = 709.0;

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterPoolProfile {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharacterPoolProfile {
    pub fn of(password: &str) -> Self {
        Self {
            has_lower: password.chars().any(|c| c.is_lowercase()),
            has_upper: password.chars().any(|c| c.is_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| !c.is_alphanumeric()),
        }
    }

    /// Number of symbols per position. Never below 26.
    pub fn pool_size(&self) -> u32 {
        let size: u32 = [
            (self.has_lower, LOWER_POOL),
            (self.has_upper, UPPER_POOL),
            (self.has_digit, DIGIT_POOL),
            (self.has_symbol, SYMBOL_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum();

        if size == 0 { LOWER_POOL } else { size }
    }
}

/// Estimated time to crack, or `Overflow` when the keyspace exceeds `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrackTime {
    Seconds(f64),
    Overflow,
}

impl CrackTime {
    pub fn is_overflow(&self) -> bool {
        matches!(self, CrackTime::Overflow)
    }

    /// Seconds as a float, with `Overflow` mapped to infinity (for charting).
    pub fn as_secs_f64(&self) -> f64 {
        match self {
            CrackTime::Seconds(s) => *s,
            CrackTime::Overflow => f64::INFINITY,
        }
    }
}

/// Attack scenarios shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackScenario {
    /// Rate-limited login form, 10k guesses/s.
    OnlineThrottled,
    /// Offline GPU rig against leaked hashes, 1B guesses/s.
    OfflineGpu,
}

impl AttackScenario {
    pub const ALL: [AttackScenario; 2] = [AttackScenario::OfflineGpu, AttackScenario::OnlineThrottled];

    pub fn guess_rate(&self) -> f64 {
        match self {
            AttackScenario::OnlineThrottled => 1e4,
            AttackScenario::OfflineGpu => 1e9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttackScenario::OnlineThrottled => "Online 10 k/s",
            AttackScenario::OfflineGpu => "Offline GPU",
        }
    }
}

/// Average brute-force crack time for `password` at `guess_rate` guesses per second.
///
/// # Errors
/// `RangeError::GuessRate` if the rate is not a positive finite number.
pub fn estimate_crack_seconds(password: &SecretString, guess_rate: f64) -> Result<CrackTime, RangeError> {
    if !(guess_rate.is_finite() && guess_rate > 0.0) {
        return Err(RangeError::GuessRate(guess_rate));
    }
    Ok(crack_time_at(password.expose_secret(), guess_rate))
}

/// `guess_rate` must already be positive and finite.
fn crack_time_at(pwd: &str, guess_rate: f64) -> CrackTime {
    let pool = CharacterPoolProfile::of(pwd).pool_size();
    let log_combos = pwd.chars().count() as f64 * f64::from(pool).ln();

    if log_combos > MAX_LOG_COMBOS {
        return CrackTime::Overflow;
    }

    // Rates below 1 guess/s can overflow here too
    let seconds = log_combos.exp() / guess_rate / 2.0;
    if seconds.is_finite() {
        CrackTime::Seconds(seconds)
    } else {
        CrackTime::Overflow
    }
}

/// Crack times for every `AttackScenario`, offline first.
pub fn crack_times(password: &SecretString) -> Vec<(AttackScenario, CrackTime)> {
    let pwd = password.expose_secret();
    AttackScenario::ALL
        .iter()
        .map(|scenario| (*scenario, crack_time_at(pwd, scenario.guess_rate())))
        .collect()
}
