//! Buffered UART adapters
//!
//! The interrupt-driven buffered UART does the byte collection between
//! control ticks. These wrappers add the one-byte lookahead and the
//! per-byte deadline the frame reader expects.

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx, Error};
use embassy_time::{with_timeout, Duration};
use embedded_io::{ReadReady, Write};
use sitstand_hal::{ReadError, SerialRx, UartConfig, UartTx};

/// Receive half with peek and bounded block reads
pub struct BufferedSerial {
    rx: BufferedUartRx,
    /// Byte taken from the ring buffer by `peek_byte` but not consumed
    peeked: Option<u8>,
    byte_timeout: Duration,
}

impl BufferedSerial {
    /// Wrap the receive half of a buffered UART
    pub fn new(rx: BufferedUartRx, config: &UartConfig) -> Self {
        Self {
            rx,
            peeked: None,
            byte_timeout: Duration::from_millis(config.byte_timeout_ms as u64),
        }
    }

    /// Take one byte if the ring buffer has one, without waiting
    fn try_fetch(&mut self) -> Result<Option<u8>, Error> {
        if let Some(byte) = self.peeked.take() {
            return Ok(Some(byte));
        }
        if !self.rx.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match embedded_io::Read::read(&mut self.rx, &mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

impl SerialRx for BufferedSerial {
    type Error = Error;

    fn peek_byte(&mut self) -> Result<Option<u8>, Error> {
        if self.peeked.is_none() {
            self.peeked = self.try_fetch()?;
        }
        Ok(self.peeked)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        self.try_fetch()
    }

    async fn read_exact_timeout(&mut self, buf: &mut [u8]) -> Result<(), ReadError<Error>> {
        for (received, slot) in buf.iter_mut().enumerate() {
            if let Some(byte) = self.peeked.take() {
                *slot = byte;
                continue;
            }

            let mut byte = [0u8; 1];
            let read = embedded_io_async::Read::read(&mut self.rx, &mut byte);
            match with_timeout(self.byte_timeout, read).await {
                Ok(Ok(1)) => *slot = byte[0],
                Ok(Ok(_)) | Err(_) => return Err(ReadError::Timeout { received }),
                Ok(Err(e)) => return Err(ReadError::Bus(e)),
            }
        }
        Ok(())
    }
}

/// Transmit half with blocking writes
pub struct BufferedSerialTx {
    tx: BufferedUartTx,
}

impl BufferedSerialTx {
    /// Wrap the transmit half of a buffered UART
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for BufferedSerialTx {
    type Error = Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Error> {
        self.tx.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Write::flush(&mut self.tx)
    }
}
