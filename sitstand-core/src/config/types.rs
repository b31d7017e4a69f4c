//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical travel range in whole centimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TravelRange {
    /// Lowest accepted target (cm)
    pub min_cm: i32,
    /// Highest accepted target (cm)
    pub max_cm: i32,
}

impl Default for TravelRange {
    fn default() -> Self {
        // Three-stage frame: 24.5" to 50" without the top
        Self {
            min_cm: 62,
            max_cm: 127,
        }
    }
}

/// Desk bridge configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeskConfig {
    /// Accepted target heights
    pub travel: TravelRange,
    /// Stop seeking once this close to the target (mm)
    ///
    /// The controller ramps the motor down on release, so the desk coasts
    /// a few millimetres past the point where the button is let go.
    pub tolerance_mm: f64,
    /// Give up on a seek after this long (ms); `None` seeks forever
    pub max_seek_ms: Option<u32>,
    /// Control loop period (ms)
    pub tick_interval_ms: u32,
    /// Motor controller UART baud rate
    pub motor_baudrate: u32,
    /// Per-byte wait bound on the motor UART (ms)
    pub byte_timeout_ms: u32,
    /// Host link UART baud rate
    pub host_baudrate: u32,
    /// How long a preset combination is held (ms)
    pub preset_hold_ms: u32,
    /// How long the memory combination is held (ms)
    pub memory_hold_ms: u32,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            travel: TravelRange::default(),
            tolerance_mm: 10.0,
            max_seek_ms: None,
            tick_interval_ms: 16,
            motor_baudrate: 9600,
            byte_timeout_ms: 100,
            host_baudrate: 115_200,
            // The stock remote pulls a line for ~150ms per press
            preset_hold_ms: 150,
            memory_hold_ms: 100,
        }
    }
}

/// Configuration validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `travel.min_cm` is above `travel.max_cm`
    InvertedTravel,
    /// Tolerance is zero, negative or NaN
    InvalidTolerance,
    /// A period, timeout or baud rate is zero
    ZeroDuration,
}

impl DeskConfig {
    /// Check the configuration for values the control loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.travel.min_cm > self.travel.max_cm {
            return Err(ConfigError::InvertedTravel);
        }
        if !(self.tolerance_mm > 0.0) {
            return Err(ConfigError::InvalidTolerance);
        }
        if self.tick_interval_ms == 0
            || self.byte_timeout_ms == 0
            || self.motor_baudrate == 0
            || self.host_baudrate == 0
            || self.max_seek_ms == Some(0)
        {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(DeskConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_travel() {
        let config = DeskConfig {
            travel: TravelRange {
                min_cm: 100,
                max_cm: 90,
            },
            ..DeskConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvertedTravel));
    }

    #[test]
    fn test_bad_tolerance() {
        for tolerance_mm in [0.0, -1.0, f64::NAN] {
            let config = DeskConfig {
                tolerance_mm,
                ..DeskConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidTolerance));
        }
    }

    #[test]
    fn test_zero_durations() {
        let config = DeskConfig {
            tick_interval_ms: 0,
            ..DeskConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));

        let config = DeskConfig {
            max_seek_ms: Some(0),
            ..DeskConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));
    }
}
