//! UART serial communication abstractions
//!
//! The motor controller streams frames continuously and gives no flow
//! control, so the receive side is modelled as a byte source that can be
//! peeked without consuming, plus an async block read with a bounded wait.

/// Failure of a bounded block read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The wait bound elapsed before the buffer was filled
    Timeout {
        /// Bytes that did arrive before the deadline
        received: usize,
    },
    /// The peripheral reported an error
    Bus(E),
}

/// UART receiver
///
/// Peeks and single-byte reads never wait. The block read waits for bytes
/// without holding the executor, up to the implementation's per-byte bound.
#[allow(async_fn_in_trait)]
pub trait SerialRx {
    /// Error type reported by the peripheral
    type Error;

    /// Look at the next byte without consuming it
    ///
    /// Returns `Ok(None)` when no byte is buffered.
    fn peek_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Consume the next byte if one is buffered
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Fill `buf` completely
    ///
    /// Waits at most the per-byte bound for each byte.
    async fn read_exact_timeout(&mut self, buf: &mut [u8]) -> Result<(), ReadError<Self::Error>>;
}

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Per-byte wait bound for block reads, in milliseconds
    pub byte_timeout_ms: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            // The CB2C controller and its remote talk at 9600 8N1
            baudrate: 9600,
            byte_timeout_ms: 100,
        }
    }
}
