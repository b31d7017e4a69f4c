//! Remote line drivers

pub mod gpio_line;
pub mod macros;

pub use gpio_line::GpioLine;
pub use macros::run_macro;
