//! Host UART receive task
//!
//! Assembles command lines and queues them for the desk task.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use sitstand_core::host::{HostReply, LineBuffer};

use crate::channels::{COMMAND_CHANNEL, REPLY_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Host RX task - receives and parses command lines
#[embassy_executor::task]
pub async fn host_rx_task(mut rx: BufferedUartRx) {
    info!("Host RX task started");

    let mut lines = LineBuffer::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                for &byte in &buf[..n] {
                    match lines.push(byte) {
                        Some(Ok(command)) => {
                            debug!("Host command: {:?}", command);
                            // Backpressure: wait for the desk task rather than drop
                            COMMAND_CHANNEL.send(command).await;
                        }
                        Some(Err(e)) => {
                            warn!("Bad host line: {:?}", e);
                            if REPLY_CHANNEL.try_send(HostReply::from(e)).is_err() {
                                warn!("Reply channel full, dropping error");
                            }
                        }
                        None => {}
                    }
                }
            }
            Err(e) => {
                warn!("Host UART read error: {:?}", e);
            }
        }
    }
}
