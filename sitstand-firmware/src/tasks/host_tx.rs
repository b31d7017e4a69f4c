//! Host UART transmit task

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use heapless::String;

use sitstand_core::host::MAX_REPLY_LEN;

use crate::channels::REPLY_CHANNEL;

/// Host TX task - writes queued replies as text lines
#[embassy_executor::task]
pub async fn host_tx_task(mut tx: BufferedUartTx) {
    info!("Host TX task started");

    let mut line: String<MAX_REPLY_LEN> = String::new();

    loop {
        let reply = REPLY_CHANNEL.receive().await;

        line.clear();
        if reply.write_line(&mut line).is_err() {
            warn!("Reply too long: {:?}", reply);
            continue;
        }

        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("Failed to send reply: {:?}", e);
        }
    }
}
