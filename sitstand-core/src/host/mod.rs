//! Host command protocol
//!
//! The home-automation host talks to the bridge over a plain text UART
//! link, one command per line:
//!
//! ```text
//! height 72.5     move to 72.5 cm
//! preset 2        press preset 2
//! memory          press M
//! stop            cancel any move, release all lines
//! wake            send the wake packet to the controller
//! null            send a lone zero byte to the controller
//! status          report motion and link state
//! ```
//!
//! Replies are single lines as well; see [`HostReply`].

pub mod command;
pub mod reply;

pub use command::{HostCommand, HostParseError, LineBuffer, MAX_LINE_LEN};
pub use reply::{HostReply, MAX_REPLY_LEN};
