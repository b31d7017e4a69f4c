//! Host command parsing

use heapless::Vec;

use crate::remote::{Preset, PresetError};

/// Longest accepted command line, excluding the newline
pub const MAX_LINE_LEN: usize = 32;

/// Command from the host
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Move to a height in centimetres
    Height(f64),
    /// Press a preset chord
    Preset(Preset),
    /// Press the memory chord
    Memory,
    /// Cancel any move
    Stop,
    /// Send the wake packet
    Wake,
    /// Send a zero byte
    Null,
    /// Report state
    Status,
}

/// Why a line was not understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostParseError {
    /// Blank line
    Empty,
    /// First word is not a command
    UnknownCommand,
    /// Command needs an argument
    MissingArgument,
    /// Argument is not a number
    BadNumber,
    /// Preset number outside 1-4
    InvalidPreset(u8),
    /// Extra words after the command
    TrailingInput,
    /// Line exceeded [`MAX_LINE_LEN`] or was not UTF-8
    BadLine,
}

impl From<PresetError> for HostParseError {
    fn from(e: PresetError) -> Self {
        HostParseError::InvalidPreset(e.0)
    }
}

impl HostCommand {
    /// Parse one line, without its line ending
    pub fn parse(line: &str) -> Result<Self, HostParseError> {
        let mut words = line.split_ascii_whitespace();
        let name = words.next().ok_or(HostParseError::Empty)?;

        let command = match name {
            "height" => {
                let cm = words
                    .next()
                    .ok_or(HostParseError::MissingArgument)?
                    .parse::<f64>()
                    .map_err(|_| HostParseError::BadNumber)?;
                HostCommand::Height(cm)
            }
            "preset" => {
                let n = words
                    .next()
                    .ok_or(HostParseError::MissingArgument)?
                    .parse::<u8>()
                    .map_err(|_| HostParseError::BadNumber)?;
                HostCommand::Preset(Preset::try_from(n)?)
            }
            "memory" => HostCommand::Memory,
            "stop" => HostCommand::Stop,
            "wake" => HostCommand::Wake,
            "null" => HostCommand::Null,
            "status" => HostCommand::Status,
            _ => return Err(HostParseError::UnknownCommand),
        };

        if words.next().is_some() {
            return Err(HostParseError::TrailingInput);
        }
        Ok(command)
    }
}

/// Assembles command lines from a byte stream
#[derive(Debug, Default)]
pub struct LineBuffer {
    line: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single byte
    ///
    /// Returns a parse result when a newline completes a line. Blank lines
    /// are skipped. An overlong line is dropped whole and reported once.
    pub fn push(&mut self, byte: u8) -> Option<Result<HostCommand, HostParseError>> {
        match byte {
            b'\n' => {
                let result = if self.overflowed {
                    Some(Err(HostParseError::BadLine))
                } else {
                    match core::str::from_utf8(&self.line) {
                        Ok(text) => match HostCommand::parse(text) {
                            Err(HostParseError::Empty) => None,
                            other => Some(other),
                        },
                        Err(_) => Some(Err(HostParseError::BadLine)),
                    }
                };
                self.line.clear();
                self.overflowed = false;
                result
            }
            b'\r' => None,
            _ => {
                if self.line.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}
