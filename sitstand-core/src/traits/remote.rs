//! Remote button line trait

/// One button line on the wired remote
///
/// A line is either pressed (the remote pulls it low) or released (left
/// floating high). Implementations own the electrical detail.
pub trait RemoteLine {
    /// Press or release the line
    fn set_pressed(&mut self, pressed: bool);

    /// Check if the line is currently pressed
    fn is_pressed(&self) -> bool;
}

/// A line that is not wired on this board
///
/// Presses are dropped and it always reads as released, so control code
/// can drive every line without checking which ones exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Unconnected;

impl RemoteLine for Unconnected {
    fn set_pressed(&mut self, _pressed: bool) {}

    fn is_pressed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconnected_never_pressed() {
        let mut line = Unconnected;
        line.set_pressed(true);
        assert!(!line.is_pressed());
    }
}
