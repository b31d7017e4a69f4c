//! Height request validation
//!
//! Requests arrive in centimetres from the host and must fall inside the
//! closed travel range: 62 and 127 are accepted, 61.9 and 127.1 are not.

use crate::config::TravelRange;

/// Rejected height request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestError {
    /// Value falls outside the travel range (reported truncated)
    OutOfRange { cm: i32 },
}

/// Accepted height request
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestOutcome {
    /// Controller armed toward the target
    Armed { target_mm: f64 },
    /// Desk already reports exactly this height; nothing to do
    AlreadyThere,
}

/// Check a requested height and convert it to millimetres
pub fn validate_height_request(cm: f64, travel: &TravelRange) -> Result<f64, RequestError> {
    // NaN fails both comparisons
    if !(cm >= travel.min_cm as f64 && cm <= travel.max_cm as f64) {
        return Err(RequestError::OutOfRange { cm: cm as i32 });
    }
    Ok(cm * 10.0)
}
