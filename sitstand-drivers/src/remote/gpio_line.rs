//! GPIO remote line
//!
//! The stock remote pulls a line to ground to press it and leaves it
//! high otherwise. Boards that drive the lines through a transistor see
//! the opposite polarity, so the level is configurable.

use sitstand_core::traits::RemoteLine;
use sitstand_hal::OutputPin;

/// Remote button line driven by a GPIO pin
pub struct GpioLine<P> {
    pin: P,
    /// If true, pressed = pin HIGH
    inverted: bool,
    /// Current logical state (true = pressed)
    pressed: bool,
}

impl<P: OutputPin> GpioLine<P> {
    /// Create a new line, released
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the line is pressed when the pin is HIGH
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut line = Self {
            pin,
            inverted,
            pressed: false,
        };
        line.set_pressed(false);
        line
    }

    /// Create a line wired straight to the remote connector
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a line driven through an inverting stage
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Give back the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> RemoteLine for GpioLine<P> {
    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
        // Direct: pressed → low. Inverted: pressed → high.
        self.pin.set_state(pressed == self.inverted);
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }
}
