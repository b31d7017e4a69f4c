//! Timed button chords
//!
//! Presets and the memory button are short holds of several lines at
//! once. The controller acts on the chord after release, so the exact
//! hold time matters less than releasing every line afterwards.

use embedded_hal_async::delay::DelayNs;
use sitstand_core::remote::{ButtonMacro, Remote};

/// Press a chord, hold it, release it
///
/// Any line held before the call is released first so the controller
/// sees only the chord. Yields to the executor during the hold.
pub async fn run_macro<R, D>(remote: &mut R, chord: ButtonMacro, delay: &mut D)
where
    R: Remote + ?Sized,
    D: DelayNs,
{
    remote.release_all();
    remote.press(chord.lines);
    delay.delay_ms(chord.hold_ms).await;
    remote.release_all();
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embassy_futures::block_on;
    use sitstand_core::remote::{Line, LineMask, Preset};

    /// Remote that publishes its pressed lines after every change
    struct RecordingRemote<'a> {
        lines: [bool; 4],
        shared: &'a Cell<LineMask>,
    }

    impl<'a> RecordingRemote<'a> {
        fn new(shared: &'a Cell<LineMask>) -> Self {
            Self {
                lines: [false; 4],
                shared,
            }
        }
    }

    impl Remote for RecordingRemote<'_> {
        fn set_line(&mut self, line: Line, pressed: bool) {
            self.lines[line as usize] = pressed;
            self.shared.set(self.pressed());
        }

        fn is_line_pressed(&self, line: Line) -> bool {
            self.lines[line as usize]
        }
    }

    /// Delay that adds up requested time and notes what was held
    struct MockDelay<'a> {
        total_ns: u64,
        shared: &'a Cell<LineMask>,
        held: LineMask,
    }

    impl<'a> MockDelay<'a> {
        fn new(shared: &'a Cell<LineMask>) -> Self {
            Self {
                total_ns: 0,
                shared,
                held: LineMask::NONE,
            }
        }
    }

    impl DelayNs for MockDelay<'_> {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
            self.held = self.shared.get();
        }
    }

    #[test]
    fn test_preset_macro_holds_then_releases() {
        let shared = Cell::new(LineMask::NONE);
        let mut remote = RecordingRemote::new(&shared);
        let mut delay = MockDelay::new(&shared);

        block_on(run_macro(&mut remote, Preset::Four.button_macro(150), &mut delay));

        assert_eq!(delay.total_ns, 150_000_000);
        assert_eq!(delay.held, Preset::Four.lines());
        assert_eq!(remote.pressed(), LineMask::NONE);
    }

    #[test]
    fn test_held_lines_cleared_before_chord() {
        let shared = Cell::new(LineMask::NONE);
        let mut remote = RecordingRemote::new(&shared);
        remote.press(LineMask::from(Line::Up));
        let mut delay = MockDelay::new(&shared);

        let memory = ButtonMacro::memory(100);
        block_on(run_macro(&mut remote, memory, &mut delay));

        assert_eq!(delay.total_ns, 100_000_000);
        assert_eq!(delay.held, memory.lines);
        assert!(!delay.held.contains(Line::Up));
        assert!(remote.pressed().is_empty());
    }
}
