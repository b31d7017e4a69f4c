//! Frame reader
//!
//! The controller streams frames back to back. Each call does one short
//! scan: a stray byte is dropped and the call returns; a terminator means
//! the next bytes start a fresh frame, so one full block is read and
//! validated. The transport does the buffering between calls.

use sitstand_hal::{ReadError, SerialRx};
use sitstand_protocol::{Frame, FrameError, FRAME_TERMINATOR, MAX_FRAME_LEN};

/// Why a poll produced no frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkFault {
    /// Block read did not complete within the transport's bound
    Timeout,
    /// UART reported an error
    Bus,
    /// Block failed checksum validation
    Checksum,
    /// PARAM_LEN does not fit in a frame
    Malformed,
}

impl From<FrameError> for LinkFault {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::InvalidChecksum => LinkFault::Checksum,
            FrameError::ParamsTooLong | FrameError::BufferTooSmall => LinkFault::Malformed,
        }
    }
}

impl<E> From<ReadError<E>> for LinkFault {
    fn from(e: ReadError<E>) -> Self {
        match e {
            ReadError::Timeout { .. } => LinkFault::Timeout,
            ReadError::Bus(_) => LinkFault::Bus,
        }
    }
}

/// Attempt to read one frame
///
/// Returns `Ok(None)` when a stray byte was dropped. With nothing buffered
/// at all the block read is still attempted, since the controller may be
/// part way through sending. The block read yields while it waits.
pub async fn poll_frame<R: SerialRx>(rx: &mut R) -> Result<Option<Frame>, LinkFault> {
    if let Some(byte) = rx.peek_byte().map_err(ReadError::Bus)? {
        rx.read_byte().map_err(ReadError::Bus)?;
        if byte != FRAME_TERMINATOR {
            // Tail of a frame we already handled
            return Ok(None);
        }
    }

    let mut block = [0u8; MAX_FRAME_LEN];
    rx.read_exact_timeout(&mut block).await?;
    Ok(Some(Frame::decode(&block)?))
}
