//! Credential exposure calculators
//!
//! Each calculator is a pure function of its inputs.

mod reuse;
mod stuffing;

pub use reuse::{reuse_exposure, ExposureEstimate};
pub use stuffing::{stuffing_wave, StuffingWaveResult};

/// Result type for exposure calculators.
pub type ExposureResult<T> = Result<T, crate::error::RangeError>;

/// Default number of accounts sharing one password.
pub const DEFAULT_SHARED_ACCOUNTS: u32 = 5;
/// Default yearly breach probability per service.
pub const DEFAULT_BREACH_PROBABILITY: f64 = 0.15;
/// Default organization size for a stuffing wave.
pub const DEFAULT_EMPLOYEES: u32 = 250;
/// Default share of staff reusing passwords.
pub const DEFAULT_REUSE_RATE: f64 = 0.3;
/// Default share of staff already present in a breach.
pub const DEFAULT_BREACH_RATE: f64 = 0.1;
