//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod desk;
pub mod host_rx;
pub mod host_tx;
pub mod tick;

pub use desk::desk_task;
pub use host_rx::host_rx_task;
pub use host_tx::host_tx_task;
pub use tick::tick_task;
