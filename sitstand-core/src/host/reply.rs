//! Host replies

use core::fmt::{self, Write};

use sitstand_protocol::HeightReading;

use crate::control::{Motion, MotionEvent, RequestError};
use crate::link::LinkStatus;

use super::command::HostParseError;

/// Longest reply line, newline included
pub const MAX_REPLY_LEN: usize = 192;

/// Line sent back to the host
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostReply {
    /// Published on every height report, in metres
    Height(HeightReading),
    /// Command accepted
    Ok,
    /// Command refused
    Error(&'static str),
    /// A seek finished
    Motion(MotionEvent),
    /// Answer to `status`
    Status { motion: Motion, link: LinkStatus },
}

impl From<HostParseError> for HostReply {
    fn from(e: HostParseError) -> Self {
        HostReply::Error(match e {
            HostParseError::Empty => "empty",
            HostParseError::UnknownCommand => "unknown command",
            HostParseError::MissingArgument => "missing argument",
            HostParseError::BadNumber => "bad number",
            HostParseError::InvalidPreset(_) => "invalid preset",
            HostParseError::TrailingInput => "trailing input",
            HostParseError::BadLine => "bad line",
        })
    }
}

impl From<RequestError> for HostReply {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::OutOfRange { .. } => HostReply::Error("out of range"),
        }
    }
}

impl HostReply {
    /// Write the reply followed by a newline
    pub fn write_line<W: Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            // Four decimals keeps mm resolution
            HostReply::Height(reading) => write!(w, "height {:.4}", reading.metres())?,
            HostReply::Ok => w.write_str("ok")?,
            HostReply::Error(reason) => write!(w, "err {}", reason)?,
            HostReply::Motion(MotionEvent::Arrived { height_mm, .. }) => {
                write!(w, "arrived {:.1}", height_mm)?
            }
            HostReply::Motion(MotionEvent::TimedOut { target_mm }) => {
                write!(w, "timeout {:.1}", target_mm)?
            }
            HostReply::Status { motion, link } => {
                match motion {
                    Motion::Idle => w.write_str("status idle")?,
                    Motion::Seeking { target_mm } => write!(w, "status seeking {:.1}", target_mm)?,
                }
                w.write_str(if link.is_warning() { " warning" } else { " ok" })?;
                write!(
                    w,
                    " frames {} skipped {} timeouts {} checksum {} malformed {} bus {}",
                    link.frames,
                    link.skipped_bytes,
                    link.timeouts,
                    link.checksum_errors,
                    link.malformed,
                    link.bus_errors
                )?;
            }
        }
        w.write_char('\n')
    }
}
