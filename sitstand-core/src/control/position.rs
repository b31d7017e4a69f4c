//! Position controller
//!
//! Typical usage pattern:
//!
//! ```ignore
//! controller.request_move(1050.0, now_ms);
//!
//! loop {
//!     let decision = controller.evaluate(current_mm, now_ms);
//!     remote.apply(decision.drive);
//! }
//! ```

/// What the travel lines should do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    /// All lines released
    Release,
    /// Hold "up"
    Extend,
    /// Hold "down"
    Retract,
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    /// No target
    Idle,
    /// Moving toward a target (mm)
    Seeking { target_mm: f64 },
}

/// Notable transitions back to idle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionEvent {
    /// Height came within tolerance of the target
    Arrived { target_mm: f64, height_mm: f64 },
    /// Seek ran longer than the configured limit
    TimedOut { target_mm: f64 },
}

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decision {
    pub drive: Drive,
    pub event: Option<MotionEvent>,
}

/// Bang-bang height controller
///
/// Only holds the target. The current height is passed in on every
/// evaluation and never stored here.
#[derive(Debug, Clone)]
pub struct PositionController {
    motion: Motion,
    /// Deadband in mm, "close enough" to target
    tolerance_mm: f64,
    max_seek_ms: Option<u32>,
    /// Tick time the current seek started
    started_ms: u32,
}

impl PositionController {
    /// Create an idle controller
    pub fn new(tolerance_mm: f64, max_seek_ms: Option<u32>) -> Self {
        Self {
            motion: Motion::Idle,
            tolerance_mm,
            max_seek_ms,
            started_ms: 0,
        }
    }

    /// Current state
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Pending target, if any
    pub fn target_mm(&self) -> Option<f64> {
        match self.motion {
            Motion::Idle => None,
            Motion::Seeking { target_mm } => Some(target_mm),
        }
    }

    /// Start seeking toward `target_mm`, replacing any previous target
    pub fn request_move(&mut self, target_mm: f64, now_ms: u32) {
        self.motion = Motion::Seeking { target_mm };
        self.started_ms = now_ms;
    }

    /// Drop the target
    ///
    /// Returns true if a seek was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_seeking = matches!(self.motion, Motion::Seeking { .. });
        self.motion = Motion::Idle;
        was_seeking
    }

    /// Decide the line state for this tick
    pub fn evaluate(&mut self, current_mm: f64, now_ms: u32) -> Decision {
        let target_mm = match self.motion {
            Motion::Idle => {
                return Decision {
                    drive: Drive::Release,
                    event: None,
                }
            }
            Motion::Seeking { target_mm } => target_mm,
        };

        let delta = target_mm - current_mm;
        if delta > -self.tolerance_mm && delta < self.tolerance_mm {
            self.motion = Motion::Idle;
            return Decision {
                drive: Drive::Release,
                event: Some(MotionEvent::Arrived {
                    target_mm,
                    height_mm: current_mm,
                }),
            };
        }

        if let Some(max_seek_ms) = self.max_seek_ms {
            if now_ms.wrapping_sub(self.started_ms) >= max_seek_ms {
                self.motion = Motion::Idle;
                return Decision {
                    drive: Drive::Release,
                    event: Some(MotionEvent::TimedOut { target_mm }),
                };
            }
        }

        let drive = if delta > 0.0 {
            Drive::Extend
        } else {
            Drive::Retract
        };
        Decision { drive, event: None }
    }
}
