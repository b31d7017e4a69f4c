//! Message types for the CB2C protocol
//!
//! Only a handful of commands matter to the bridge:
//! - Controller → Remote: height report
//! - Remote → Controller: wake (sent pre-encoded, see [`WAKE_PACKET`])
//!
//! Everything else the controller says is accepted and ignored.

use crate::frame::Frame;
use crate::height::HeightReading;

/// Address the remote uses when talking to the controller
pub const REMOTE_ADDRESS: [u8; 2] = [0xF1, 0xF1];

/// Address the controller uses when talking to the remote
pub const CONTROLLER_ADDRESS: [u8; 2] = [0xF2, 0xF2];

// Command IDs: Controller → Remote
pub const CMD_HEIGHT: u8 = 0x01;

// Command IDs: Remote → Controller
pub const CMD_WAKE: u8 = 0x29;

/// Wake packet, pre-encoded
pub const WAKE_PACKET: [u8; 6] = [
    REMOTE_ADDRESS[0],
    REMOTE_ADDRESS[1],
    CMD_WAKE,
    0x00,     // no params
    CMD_WAKE, // 0x29 + 0x00
    0x7E,
];

/// A lone zero byte; some controllers wake on any line activity
pub const NULL_PACKET: [u8; 1] = [0x00];

/// Messages from the controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorMessage {
    /// Current desk height
    Height(HeightReading),
    /// Valid frame with a command we don't interpret
    Unknown { command: u8 },
}

impl MotorMessage {
    /// Interpret a validated frame
    ///
    /// A height report with fewer than two parameters carries no height
    /// and is treated like an unknown command.
    pub fn from_frame(frame: &Frame) -> Self {
        match frame.command {
            CMD_HEIGHT => match HeightReading::from_params(&frame.params) {
                Some(reading) => MotorMessage::Height(reading),
                None => MotorMessage::Unknown {
                    command: frame.command,
                },
            },
            command => MotorMessage::Unknown { command },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_frame_matches_packet() {
        let encoded = Frame::empty(REMOTE_ADDRESS, CMD_WAKE).encode_to_vec().unwrap();
        assert_eq!(encoded.as_slice(), &WAKE_PACKET);
    }

    #[test]
    fn test_height_message() {
        let frame = Frame::new(CONTROLLER_ADDRESS, CMD_HEIGHT, &[0x01, 0x97, 0x03]).unwrap();
        match MotorMessage::from_frame(&frame) {
            MotorMessage::Height(reading) => assert_eq!(reading.raw_units, 407),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command() {
        let frame = Frame::new(CONTROLLER_ADDRESS, 0x05, &[0x10]).unwrap();
        assert_eq!(
            MotorMessage::from_frame(&frame),
            MotorMessage::Unknown { command: 0x05 }
        );
    }

    #[test]
    fn test_truncated_height_report() {
        let frame = Frame::new(CONTROLLER_ADDRESS, CMD_HEIGHT, &[0x01]).unwrap();
        assert_eq!(
            MotorMessage::from_frame(&frame),
            MotorMessage::Unknown { command: CMD_HEIGHT }
        );
    }
}
