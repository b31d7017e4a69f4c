//! Four-line remote panel

use crate::control::Drive;
use crate::traits::RemoteLine;

/// Remote button lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// `hc0`, lowers the desk
    Down,
    /// `hc1`, raises the desk
    Up,
    /// `hc2`, preset modifier
    Preset,
    /// `hc3`, memory modifier
    Memory,
}

impl Line {
    /// Every line, in `hc0`..`hc3` order
    pub const ALL: [Line; 4] = [Line::Down, Line::Up, Line::Preset, Line::Memory];

    const fn bit(self) -> u8 {
        match self {
            Line::Down => 1 << 0,
            Line::Up => 1 << 1,
            Line::Preset => 1 << 2,
            Line::Memory => 1 << 3,
        }
    }
}

/// Set of lines pressed together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineMask(u8);

impl LineMask {
    /// No lines
    pub const NONE: LineMask = LineMask(0);

    /// Add a line to the set
    pub const fn with(self, line: Line) -> Self {
        LineMask(self.0 | line.bit())
    }

    /// Check if a line is in the set
    pub const fn contains(&self, line: Line) -> bool {
        self.0 & line.bit() != 0
    }

    /// Check if the set is empty
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<Line> for LineMask {
    fn from(line: Line) -> Self {
        LineMask::NONE.with(line)
    }
}

/// Something that can press the remote's lines
pub trait Remote {
    /// Press or release a single line
    fn set_line(&mut self, line: Line, pressed: bool);

    /// Check if a single line is pressed
    fn is_line_pressed(&self, line: Line) -> bool;

    /// Press every line in `mask`, leaving the others alone
    fn press(&mut self, mask: LineMask) {
        for line in Line::ALL {
            if mask.contains(line) {
                self.set_line(line, true);
            }
        }
    }

    /// Release every line in `mask`, leaving the others alone
    fn release(&mut self, mask: LineMask) {
        for line in Line::ALL {
            if mask.contains(line) {
                self.set_line(line, false);
            }
        }
    }

    /// Release every line
    fn release_all(&mut self) {
        for line in Line::ALL {
            self.set_line(line, false);
        }
    }

    /// Drive the travel lines for a control decision
    ///
    /// Up and down are never pressed together.
    fn apply(&mut self, drive: Drive) {
        match drive {
            Drive::Release => self.release_all(),
            Drive::Extend => {
                self.set_line(Line::Down, false);
                self.set_line(Line::Up, true);
            }
            Drive::Retract => {
                self.set_line(Line::Up, false);
                self.set_line(Line::Down, true);
            }
        }
    }

    /// Lines currently pressed
    fn pressed(&self) -> LineMask {
        Line::ALL
            .iter()
            .filter(|&&line| self.is_line_pressed(line))
            .fold(LineMask::NONE, |mask, &line| mask.with(line))
    }
}

/// The four remote lines
///
/// Boards that don't wire a line use [`Unconnected`](crate::traits::Unconnected)
/// for it.
pub struct Panel<D, U, P, M> {
    down: D,
    up: U,
    preset: P,
    memory: M,
}

impl<D, U, P, M> Panel<D, U, P, M>
where
    D: RemoteLine,
    U: RemoteLine,
    P: RemoteLine,
    M: RemoteLine,
{
    /// Create a panel with every line released
    pub fn new(down: D, up: U, preset: P, memory: M) -> Self {
        let mut panel = Self {
            down,
            up,
            preset,
            memory,
        };
        panel.release_all();
        panel
    }

    /// Give the lines back
    pub fn into_inner(self) -> (D, U, P, M) {
        (self.down, self.up, self.preset, self.memory)
    }
}

impl<D, U, P, M> Remote for Panel<D, U, P, M>
where
    D: RemoteLine,
    U: RemoteLine,
    P: RemoteLine,
    M: RemoteLine,
{
    fn set_line(&mut self, line: Line, pressed: bool) {
        match line {
            Line::Down => self.down.set_pressed(pressed),
            Line::Up => self.up.set_pressed(pressed),
            Line::Preset => self.preset.set_pressed(pressed),
            Line::Memory => self.memory.set_pressed(pressed),
        }
    }

    fn is_line_pressed(&self, line: Line) -> bool {
        match line {
            Line::Down => self.down.is_pressed(),
            Line::Up => self.up.is_pressed(),
            Line::Preset => self.preset.is_pressed(),
            Line::Memory => self.memory.is_pressed(),
        }
    }
}
