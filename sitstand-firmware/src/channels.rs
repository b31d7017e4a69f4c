//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use sitstand_core::host::{HostCommand, HostReply};

/// Channel capacity for host commands
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Channel capacity for replies to the host
const REPLY_CHANNEL_SIZE: usize = 8;

/// Parsed host commands, drained by the desk task at the start of each tick
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, HostCommand, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Lines for the host UART
pub static REPLY_CHANNEL: Channel<CriticalSectionRawMutex, HostReply, REPLY_CHANNEL_SIZE> =
    Channel::new();
