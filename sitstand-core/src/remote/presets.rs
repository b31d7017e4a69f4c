//! Preset and memory button combinations
//!
//! The stock remote has no dedicated preset lines. Presets are chords of
//! the four lines held briefly; the controller then drives to the stored
//! height on its own.

use super::panel::{Line, LineMask};

/// Stored height slot on the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    One,
    Two,
    Three,
    Four,
}

/// Preset number outside 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetError(pub u8);

impl TryFrom<u8> for Preset {
    type Error = PresetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Preset::One),
            2 => Ok(Preset::Two),
            3 => Ok(Preset::Three),
            4 => Ok(Preset::Four),
            other => Err(PresetError(other)),
        }
    }
}

impl Preset {
    /// Preset number as shown on the remote
    pub fn number(&self) -> u8 {
        match self {
            Preset::One => 1,
            Preset::Two => 2,
            Preset::Three => 3,
            Preset::Four => 4,
        }
    }

    /// Lines that make up this preset's chord
    pub fn lines(&self) -> LineMask {
        match self {
            Preset::One => LineMask::NONE.with(Line::Down).with(Line::Up),
            Preset::Two => LineMask::NONE.with(Line::Preset),
            Preset::Three => LineMask::NONE.with(Line::Preset).with(Line::Down),
            Preset::Four => LineMask::NONE.with(Line::Preset).with(Line::Up),
        }
    }

    /// Timed press for this preset
    pub fn button_macro(&self, hold_ms: u32) -> ButtonMacro {
        ButtonMacro {
            lines: self.lines(),
            hold_ms,
        }
    }
}

/// A chord of lines held for a fixed time, then released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMacro {
    /// Lines pressed together
    pub lines: LineMask,
    /// Hold time (ms)
    pub hold_ms: u32,
}

impl ButtonMacro {
    /// The "M" button, used to store the current height into a preset
    pub fn memory(hold_ms: u32) -> Self {
        Self {
            lines: LineMask::NONE.with(Line::Memory).with(Line::Down),
            hold_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_numbers() {
        for n in 1..=4u8 {
            assert_eq!(Preset::try_from(n).unwrap().number(), n);
        }
        assert_eq!(Preset::try_from(0), Err(PresetError(0)));
        assert_eq!(Preset::try_from(5), Err(PresetError(5)));
    }

    #[test]
    fn test_preset_chords() {
        let three = Preset::Three.lines();
        assert!(three.contains(Line::Preset));
        assert!(three.contains(Line::Down));
        assert!(!three.contains(Line::Up));
        assert!(!three.contains(Line::Memory));

        let one = Preset::One.lines();
        assert!(one.contains(Line::Down) && one.contains(Line::Up));
    }

    #[test]
    fn test_memory_macro() {
        let m = ButtonMacro::memory(100);
        assert_eq!(m.hold_ms, 100);
        assert!(m.lines.contains(Line::Memory));
        assert!(m.lines.contains(Line::Down));
    }
}
