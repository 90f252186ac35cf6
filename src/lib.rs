//! Password risk estimation library
//!
//! Estimates how long a password survives brute-force and guess-model
//! attacks, and how many accounts fall when passwords are reused or
//! stuffed from breach dumps. Intended for educational simulators.
//!
//! # Features
//!
//! - `async` (default): Enables async assessment with cancellation support
//! - `zxcvbn` (default): zxcvbn-backed guess estimator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_LEAKED_LIST_PATH`: Custom path to the leaked-password list
//!   (default: `./assets/top_100k.txt`; a built-in list is used if missing)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_risk::{estimate_crack_seconds, format_duration, reuse_exposure, score_default};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let strength = score_default(&password).expect("estimator returned guesses >= 1");
//! println!("Entropy: {:.1} bits", strength.entropy_bits);
//!
//! let offline = estimate_crack_seconds(&password, 1e9).expect("positive guess rate");
//! println!("Offline GPU: {}", format_duration(offline));
//!
//! let exposure = reuse_exposure(5, 0.15).expect("valid range");
//! println!("{}/{} accounts", exposure.accounts_compromised, exposure.accounts_total);
//! ```

// Internal modules
mod assessment;
mod brute_force;
mod duration;
mod error;
mod generator;
mod leaked;
mod scorer;

pub mod estimator;
pub mod exposure;

// Public API
pub use assessment::{assess_password, AssessError, PasswordAssessment, NO_HIT_TIP};
pub use brute_force::{
    crack_times, estimate_crack_seconds, AttackScenario, CharacterPoolProfile, CrackTime, MAX_LOG_COMBOS,
};
pub use duration::{format_duration, format_duration_with, DurationFormat, YearScale, OVERFLOW_DISPLAY};
pub use error::RangeError;
pub use exposure::{reuse_exposure, stuffing_wave, ExposureEstimate, StuffingWaveResult};
pub use generator::{generate_strong_password, GeneratorError, DEFAULT_LENGTH};
pub use leaked::{
    get_leaked_list_path, init_leaked_list, init_leaked_list_from_path, is_leaked, leaked_list_len,
    leaked_rank, LeakedListError, FALLBACK_PASSWORDS,
};
pub use scorer::{score, score_default, ScoreError, StrengthEstimate, DICTIONARY_RANK_LIMIT};

#[cfg(feature = "async")]
pub use assessment::assess_password_tx;
