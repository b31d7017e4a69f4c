//! Height report decoding
//!
//! The controller reports height in tenths of whatever unit the desk is set
//! to display, and offers no way to ask which one that is. The two ranges
//! do not overlap on a three-stage frame (inches ≈ 240–530, millimetres
//! ≈ 650–1290), so the unit is inferred from the magnitude.

/// Raw values below this are tenths of an inch
///
/// Empirical boundary between the two observed ranges, not a protocol
/// constant. Readings between 530 and 650 have never been seen.
pub const INCH_THRESHOLD: u16 = 600;

/// Millimetres per tenth of an inch
const MM_PER_TENTH_INCH: f64 = 2.54;

/// Unit the controller appears to be reporting in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeightUnit {
    /// Tenths of an inch (407 → 40.7")
    TenthsOfInch,
    /// Millimetres, passed through unchanged
    Millimeters,
}

impl HeightUnit {
    /// Infer the unit from a raw reading
    pub fn infer(raw_units: u16) -> Self {
        if raw_units < INCH_THRESHOLD {
            HeightUnit::TenthsOfInch
        } else {
            HeightUnit::Millimeters
        }
    }
}

/// Last known desk height
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeightReading {
    /// Value as sent by the controller
    pub raw_units: u16,
    /// Converted height in millimetres
    pub mm: f64,
}

impl HeightReading {
    /// Convert a raw reading
    pub fn from_raw(raw_units: u16) -> Self {
        let mm = match HeightUnit::infer(raw_units) {
            HeightUnit::TenthsOfInch => raw_units as f64 * MM_PER_TENTH_INCH,
            HeightUnit::Millimeters => raw_units as f64,
        };
        Self { raw_units, mm }
    }

    /// Decode from height report parameters
    ///
    /// `params[0]` is the high byte, `params[1]` the low byte. A third byte
    /// is always present on real desks but its meaning is unknown.
    pub fn from_params(params: &[u8]) -> Option<Self> {
        match params {
            [hi, lo, ..] => Some(Self::from_raw(u16::from_be_bytes([*hi, *lo]))),
            _ => None,
        }
    }

    /// Unit inferred for this reading
    pub fn unit(&self) -> HeightUnit {
        HeightUnit::infer(self.raw_units)
    }

    /// Height in metres, as published to the host
    pub fn metres(&self) -> f64 {
        self.mm * 0.001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    #[test]
    fn test_decode_inches() {
        let reading = HeightReading::from_params(&[0x01, 0x97, 0x03]).unwrap();
        assert_eq!(reading.raw_units, 407);
        assert_eq!(reading.unit(), HeightUnit::TenthsOfInch);
        assert!(approx(reading.mm, 1033.78));
    }

    #[test]
    fn test_decode_millimetres() {
        // 0x03 0x20 = 800
        let reading = HeightReading::from_params(&[0x03, 0x20]).unwrap();
        assert_eq!(reading.raw_units, 800);
        assert_eq!(reading.unit(), HeightUnit::Millimeters);
        assert!(approx(reading.mm, 800.0));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(approx(HeightReading::from_raw(599).mm, 599.0 * 2.54));
        assert!(approx(HeightReading::from_raw(600).mm, 600.0));
    }

    #[test]
    fn test_short_params() {
        assert_eq!(HeightReading::from_params(&[0x01]), None);
        assert_eq!(HeightReading::from_params(&[]), None);
    }

    #[test]
    fn test_metres() {
        let reading = HeightReading::from_raw(407);
        assert!(approx(reading.metres(), 1.03378));
    }
}
