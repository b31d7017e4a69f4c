//! GPIO outputs

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use sitstand_hal::OutputPin;

/// Push-pull output driving one remote line
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output at `initial` level
    pub fn new(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
