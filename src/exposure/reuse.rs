//! Reuse blast radius - accounts lost when a shared password leaks.

use super::ExposureResult;
use crate::error::{check_probability, RangeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureEstimate {
    pub accounts_total: u32,
    pub accounts_compromised: u32,
}

impl ExposureEstimate {
    /// Compromised share in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.accounts_compromised) / f64::from(self.accounts_total)
    }
}

/// Expected accounts exposed when `accounts` services share one password and
/// each is breached with probability `breach_probability`.
///
/// `ceil(n * (1 - (1 - p)^n))`, rounded up for a conservative display.
pub fn reuse_exposure(accounts: u32, breach_probability: f64) -> ExposureResult<ExposureEstimate> {
    if accounts == 0 {
        return Err(RangeError::ZeroAccounts);
    }
    let p = check_probability("breach_probability", breach_probability)?;

    let n = f64::from(accounts);
    // 1 - (1 - p)^n, kept exact for tiny p
    let any_breach = -(n * (-p).ln_1p()).exp_m1();
    let compromised = (n * any_breach).ceil() as u32;

    Ok(ExposureEstimate {
        accounts_total: accounts,
        accounts_compromised: compromised.min(accounts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::{DEFAULT_BREACH_PROBABILITY, DEFAULT_SHARED_ACCOUNTS};

    fn compromised(accounts: u32, p: f64) -> u32 {
        reuse_exposure(accounts, p).unwrap().accounts_compromised
    }

    #[test]
    fn test_single_account() {
        assert_eq!(compromised(1, 0.0), 0);
        assert_eq!(compromised(1, 0.01), 1);
        assert_eq!(compromised(1, 0.5), 1);
        assert_eq!(compromised(1, 1.0), 1);
    }

    #[test]
    fn test_tiny_probability_still_exposes_one() {
        assert_eq!(compromised(1, 1e-17), 1);
        assert_eq!(compromised(1, f64::MIN_POSITIVE), 1);
        assert_eq!(compromised(20, 1e-12), 1);
    }

    #[test]
    fn test_certain_breach_loses_everything() {
        for accounts in 1..=50 {
            assert_eq!(compromised(accounts, 1.0), accounts);
        }
    }

    #[test]
    fn test_no_breach_loses_nothing() {
        assert_eq!(compromised(20, 0.0), 0);
    }

    #[test]
    fn test_defaults() {
        // 5 * (1 - 0.85^5) = 2.78
        let estimate = reuse_exposure(DEFAULT_SHARED_ACCOUNTS, DEFAULT_BREACH_PROBABILITY).unwrap();
        assert_eq!(estimate.accounts_compromised, 3);
        assert_eq!(estimate.accounts_total, 5);
        assert!((estimate.fraction() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_never_exceeds_total() {
        for accounts in 1..=20 {
            for pct in 0..=100 {
                let estimate = reuse_exposure(accounts, pct as f64 / 100.0).unwrap();
                assert!(estimate.accounts_compromised <= estimate.accounts_total);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(reuse_exposure(0, 0.5), Err(RangeError::ZeroAccounts));
        assert!(matches!(
            reuse_exposure(3, 1.5),
            Err(RangeError::Probability { name: "breach_probability", .. })
        ));
        assert!(reuse_exposure(3, -0.1).is_err());
    }
}
