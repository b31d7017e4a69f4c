//! Frame encoding and decoding for the CB2C protocol.
//!
//! Frame format:
//! - ADDRESS (2 bytes): sender address, repeated (0xF1F1 remote, 0xF2F2 controller)
//! - COMMAND (1 byte): message type identifier
//! - PARAM_LEN (1 byte): number of parameter bytes (0-3)
//! - PARAMS (0-3 bytes): command-specific data
//! - CHECKSUM (1 byte): low 8 bits of the sum of COMMAND, PARAM_LEN and PARAMS
//! - TERMINATOR (1 byte): 0x7E end of message

use heapless::Vec;

/// End of message byte
pub const FRAME_TERMINATOR: u8 = 0x7E;

/// Longest frame the controller sends (ADDRESS + COMMAND + PARAM_LEN + 3 PARAMS + CHECKSUM + EOM)
pub const MAX_FRAME_LEN: usize = 9;

/// ADDRESS + COMMAND + PARAM_LEN
pub const HEADER_LEN: usize = 4;

/// Maximum number of parameter bytes that fit in a frame
pub const MAX_PARAMS: usize = MAX_FRAME_LEN - HEADER_LEN - 2;

/// Offset of PARAM_LEN within a frame
const PARAM_LEN_INDEX: usize = 3;

/// Offset of COMMAND within a frame; the checksum starts here
const COMMAND_INDEX: usize = 2;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// PARAM_LEN places the checksum outside the maximum frame
    ParamsTooLong,
    /// Checksum mismatch
    InvalidChecksum,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Checksum over COMMAND, PARAM_LEN and PARAMS
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// A validated or constructed frame
///
/// Decoding always builds a fresh value; nothing is carried over from a
/// previous block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Sender address bytes (not enforced on receive)
    pub address: [u8; 2],
    /// Command identifier
    pub command: u8,
    /// Parameter bytes
    pub params: Vec<u8, MAX_PARAMS>,
}

impl Frame {
    /// Create a new frame with the given command and parameters
    pub fn new(address: [u8; 2], command: u8, params: &[u8]) -> Result<Self, FrameError> {
        let mut param_vec = Vec::new();
        param_vec
            .extend_from_slice(params)
            .map_err(|_| FrameError::ParamsTooLong)?;

        Ok(Self {
            address,
            command,
            params: param_vec,
        })
    }

    /// Create a frame with no parameters
    pub fn empty(address: [u8; 2], command: u8) -> Self {
        Self {
            address,
            command,
            params: Vec::new(),
        }
    }

    /// Number of parameter bytes
    pub fn param_len(&self) -> u8 {
        self.params.len() as u8
    }

    /// Checksum byte this frame carries on the wire
    pub fn checksum(&self) -> u8 {
        checksum(&self.params).wrapping_add(self.command).wrapping_add(self.param_len())
    }

    /// Total bytes on the wire, terminator included
    pub fn wire_len(&self) -> usize {
        HEADER_LEN + self.params.len() + 2
    }

    /// Validate a block read straight after a terminator
    ///
    /// The block is always `MAX_FRAME_LEN` bytes; bytes past this frame's
    /// terminator belong to whatever followed it and are ignored.
    pub fn decode(block: &[u8; MAX_FRAME_LEN]) -> Result<Self, FrameError> {
        let param_len = block[PARAM_LEN_INDEX] as usize;
        let checksum_index = HEADER_LEN + param_len;

        // Reject before touching the checksum so a bogus length can never
        // index past the block.
        if checksum_index + 2 > MAX_FRAME_LEN {
            return Err(FrameError::ParamsTooLong);
        }

        if checksum(&block[COMMAND_INDEX..checksum_index]) != block[checksum_index] {
            return Err(FrameError::InvalidChecksum);
        }

        Self::new(
            [block[0], block[1]],
            block[COMMAND_INDEX],
            &block[HEADER_LEN..checksum_index],
        )
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.wire_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let checksum_index = HEADER_LEN + self.params.len();
        buffer[0] = self.address[0];
        buffer[1] = self.address[1];
        buffer[COMMAND_INDEX] = self.command;
        buffer[PARAM_LEN_INDEX] = self.param_len();
        buffer[HEADER_LEN..checksum_index].copy_from_slice(&self.params);
        buffer[checksum_index] = self.checksum();
        buffer[checksum_index + 1] = FRAME_TERMINATOR;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_LEN>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_LEN];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}
