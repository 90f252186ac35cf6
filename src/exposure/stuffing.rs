//! Credential-stuffing wave across an organization.

use super::ExposureResult;
use crate::error::{check_probability, RangeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StuffingWaveResult {
    pub employees: u32,
    /// Staff whose credentials already sit in a breach dump.
    pub breached: u64,
    /// Staff reusing passwords across services.
    pub reused: u64,
    /// Union of the two populations.
    pub compromised: u64,
}

/// Estimates accounts falling to one stuffing wave.
///
/// Inclusion-exclusion over the breached and reusing populations, with
/// `reuse_rate` standing in for the share of breached staff who also reuse.
/// Every count is floored.
pub fn stuffing_wave(employees: u32, reuse_rate: f64, breach_rate: f64) -> ExposureResult<StuffingWaveResult> {
    if employees == 0 {
        return Err(RangeError::ZeroEmployees);
    }
    let reuse_rate = check_probability("reuse_rate", reuse_rate)?;
    let breach_rate = check_probability("breach_rate", breach_rate)?;

    let staff = f64::from(employees);
    let breached = (staff * breach_rate).floor() as u64;
    let reused = (staff * reuse_rate).floor() as u64;
    let overlap = (breached as f64 * reuse_rate).floor() as u64;

    Ok(StuffingWaveResult {
        employees,
        breached,
        reused,
        compromised: breached + reused - overlap,
    })
}
