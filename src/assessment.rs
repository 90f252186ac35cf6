//! Password assessment - combines the guess model with brute-force crack times.

use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::brute_force::{estimate_crack_seconds, AttackScenario, CrackTime};
use crate::duration::format_duration;
use crate::error::RangeError;
use crate::estimator::GuessEstimator;
use crate::scorer::{score, ScoreError, StrengthEstimate};

/// Shown when the password is not a dictionary hit.
pub const NO_HIT_TIP: &str = "Try `Password1` or `qwerty` to watch an instant failure.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessError {
    #[error("Assessment cancelled")]
    Cancelled,
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Everything the strength tester shows for one password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAssessment {
    pub strength: StrengthEstimate,
    pub offline: CrackTime,
    pub online: CrackTime,
    pub offline_display: String,
    pub online_display: String,
    pub tip: Option<&'static str>,
}

/// Assesses `password` against `estimator` and both attack scenarios.
///
/// # Arguments
/// * `password` - The password to assess
/// * `estimator` - Guess model used for the strength estimate
/// * `token` - Optional cancellation token (async feature only)
pub fn assess_password(
    password: &SecretString,
    estimator: &dyn GuessEstimator,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<PasswordAssessment, AssessError> {
    #[cfg(feature = "async")]
    let check_cancelled = || match &token {
        Some(t) if t.is_cancelled() => Err(AssessError::Cancelled),
        _ => Ok(()),
    };

    #[cfg(feature = "async")]
    check_cancelled()?;
    let strength = score(password, estimator)?;

    #[cfg(feature = "async")]
    check_cancelled()?;
    let offline = estimate_crack_seconds(password, AttackScenario::OfflineGpu.guess_rate())?;
    let online = estimate_crack_seconds(password, AttackScenario::OnlineThrottled.guess_rate())?;

    Ok(PasswordAssessment {
        strength,
        offline,
        online,
        offline_display: format_duration(offline),
        online_display: format_duration(online),
        tip: (!strength.dictionary_hit).then_some(NO_HIT_TIP),
    })
}

/// Async version that debounces input and sends the result via channel.
#[cfg(feature = "async")]
pub async fn assess_password_tx(
    password: &SecretString,
    estimator: &dyn GuessEstimator,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordAssessment, AssessError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("assessment is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let assessment = assess_password(password, estimator, Some(token));

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::LeakedListEstimator;
    use crate::leaked::setup_leaked_list_for_testing;
    use serial_test::serial;

    fn assess(pwd: &str) -> Result<PasswordAssessment, AssessError> {
        let pwd = SecretString::new(pwd.to_string().into());

        #[cfg(feature = "async")]
        let assessment = assess_password(&pwd, &LeakedListEstimator, None);

        #[cfg(not(feature = "async"))]
        let assessment = assess_password(&pwd, &LeakedListEstimator);

        assessment
    }

    #[test]
    #[serial]
    fn test_assess_common_password() {
        setup_leaked_list_for_testing(&["password", "123456", "qwerty", "admin"]);
        let assessment = assess("qwerty").unwrap();

        assert!(assessment.strength.dictionary_hit);
        assert_eq!(assessment.tip, None);
        // 26^6 / 1e9 / 2 ~ 0.15 s
        assert_eq!(assessment.offline_display, "0.2 s");
        assert!(assessment.online.as_secs_f64() > assessment.offline.as_secs_f64());
    }

    #[test]
    #[serial]
    fn test_assess_strong_password() {
        setup_leaked_list_for_testing(&["password", "123456", "qwerty", "admin"]);
        let assessment = assess("Zx9#Lm2$Qv7&Tr4!").unwrap();

        assert!(assessment.strength.entropy_bits > 60.0);
        assert_eq!(assessment.tip, Some(NO_HIT_TIP));
        assert!(assessment.offline_display.ends_with(" y"));
    }

    #[test]
    #[serial]
    fn test_assess_overflowing_password() {
        setup_leaked_list_for_testing(&["password"]);
        let assessment = assess(&"aB3!".repeat(50)).unwrap();

        assert_eq!(assessment.offline, CrackTime::Overflow);
        assert_eq!(assessment.online_display, "> 1 M years");
    }

    #[test]
    #[serial]
    fn test_assess_empty_password() {
        setup_leaked_list_for_testing(&["password"]);
        let assessment = assess("").unwrap();

        assert_eq!(assessment.strength.entropy_bits, 0.0);
        assert_eq!(assessment.offline, CrackTime::Seconds(0.5e-9));
    }
}
