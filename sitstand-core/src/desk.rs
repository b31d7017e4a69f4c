//! Per-tick orchestration
//!
//! [`Desk`] owns everything that persists between ticks: the last known
//! height, the controller's target, the remote lines and link health. The
//! firmware calls [`Desk::tick`] on a fixed period and forwards host
//! requests to the other methods between ticks.

use sitstand_hal::SerialRx;
use sitstand_protocol::{Frame, HeightReading, MotorMessage};

use crate::config::DeskConfig;
use crate::control::{
    validate_height_request, Decision, Drive, Motion, PositionController, RequestError,
    RequestOutcome,
};
use crate::link::{poll_frame, LinkFault, LinkStatus};
use crate::remote::Remote;

/// What the frame reader produced this tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ingest {
    /// A stray byte was dropped
    Nothing,
    /// A valid frame arrived
    Message(MotorMessage),
    /// The poll failed; height is stale
    Fault(LinkFault),
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub ingest: Ingest,
    pub decision: Decision,
}

impl TickReport {
    /// Height decoded this tick, if any
    pub fn height(&self) -> Option<HeightReading> {
        match self.ingest {
            Ingest::Message(MotorMessage::Height(reading)) => Some(reading),
            _ => None,
        }
    }
}

/// Desk bridge state
pub struct Desk<P> {
    config: DeskConfig,
    remote: P,
    controller: PositionController,
    height: Option<HeightReading>,
    link: LinkStatus,
}

impl<P: Remote> Desk<P> {
    /// Create an idle desk with every remote line released
    pub fn new(config: DeskConfig, mut remote: P) -> Self {
        remote.release_all();
        Self {
            controller: PositionController::new(config.tolerance_mm, config.max_seek_ms),
            config,
            remote,
            height: None,
            link: LinkStatus::new(),
        }
    }

    /// Run one control cycle
    ///
    /// Reads at most one frame, then always evaluates the controller, so a
    /// seek keeps going through timeouts and garbage on the line.
    pub async fn tick<R: SerialRx>(&mut self, rx: &mut R, now_ms: u32) -> TickReport {
        let polled = poll_frame(rx).await;
        let ingest = self.ingest(polled);
        let decision = self.evaluate(now_ms);
        TickReport { ingest, decision }
    }

    /// Take in the result of one frame poll
    pub fn ingest(&mut self, polled: Result<Option<Frame>, LinkFault>) -> Ingest {
        match polled {
            Ok(Some(frame)) => {
                self.link.record_frame();
                let message = MotorMessage::from_frame(&frame);
                if let MotorMessage::Height(reading) = message {
                    self.height = Some(reading);
                }
                Ingest::Message(message)
            }
            Ok(None) => {
                self.link.record_skip();
                Ingest::Nothing
            }
            Err(fault) => {
                self.link.record_fault(fault);
                Ingest::Fault(fault)
            }
        }
    }

    /// Evaluate the controller against the last known height and drive the lines
    pub fn evaluate(&mut self, now_ms: u32) -> Decision {
        let decision = self.controller.evaluate(self.current_mm(), now_ms);
        self.remote.apply(decision.drive);
        decision
    }

    /// Ask for a new height in centimetres
    ///
    /// Replaces any pending target. A target equal to the current height
    /// changes nothing.
    pub fn request_height_cm(
        &mut self,
        cm: f64,
        now_ms: u32,
    ) -> Result<RequestOutcome, RequestError> {
        let target_mm = validate_height_request(cm, &self.config.travel)?;

        if target_mm == self.current_mm() {
            return Ok(RequestOutcome::AlreadyThere);
        }

        // Let go of the old direction before the next tick picks one
        self.remote.apply(Drive::Release);
        self.controller.request_move(target_mm, now_ms);
        Ok(RequestOutcome::Armed { target_mm })
    }

    /// Stop any seek and release every line
    ///
    /// Returns true if a seek was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_seeking = self.controller.cancel();
        self.remote.release_all();
        was_seeking
    }

    /// Stop any seek and hand over the remote for a timed press
    pub fn manual(&mut self) -> &mut P {
        self.cancel();
        &mut self.remote
    }

    /// Last decoded height
    pub fn height(&self) -> Option<HeightReading> {
        self.height
    }

    /// Last decoded height in mm, 0 before the first report
    pub fn current_mm(&self) -> f64 {
        self.height.map_or(0.0, |reading| reading.mm)
    }

    /// Controller state
    pub fn motion(&self) -> Motion {
        self.controller.motion()
    }

    /// Link health
    pub fn link(&self) -> &LinkStatus {
        &self.link
    }

    /// Active configuration
    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Remote lines
    pub fn remote(&self) -> &P {
        &self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::MotionEvent;
    use crate::link::reader::tests::ScriptedSerial;
    use crate::remote::panel::tests::{mock_panel, MockPanel};
    use crate::remote::{Line, LineMask};
    use sitstand_protocol::messages::{CMD_HEIGHT, CONTROLLER_ADDRESS};
    use embassy_futures::block_on;

    fn tick(desk: &mut Desk<MockPanel>, rx: &mut ScriptedSerial, now_ms: u32) -> TickReport {
        block_on(desk.tick(rx, now_ms))
    }

    fn desk() -> Desk<MockPanel> {
        Desk::new(DeskConfig::default(), mock_panel())
    }

    /// Terminator followed by a height report, as the reader expects it
    fn feed_height(rx: &mut ScriptedSerial, raw: u16) {
        let [hi, lo] = raw.to_be_bytes();
        let frame = Frame::new(CONTROLLER_ADDRESS, CMD_HEIGHT, &[hi, lo, 0x00]).unwrap();
        rx.feed(&[0x7E]);
        rx.feed(&frame.encode_to_vec().unwrap());
    }

    fn desk_at(raw: u16) -> (Desk<MockPanel>, ScriptedSerial) {
        let mut desk = desk();
        let mut rx = ScriptedSerial::new(&[]);
        feed_height(&mut rx, raw);
        let report = tick(&mut desk, &mut rx, 0);
        assert!(report.height().is_some());
        (desk, rx)
    }

    #[test]
    fn test_starts_idle_with_lines_released() {
        let desk = desk();
        assert_eq!(desk.motion(), Motion::Idle);
        assert_eq!(desk.height(), None);
        assert_eq!(desk.current_mm(), 0.0);
        assert!(desk.remote().pressed().is_empty());
    }

    #[test]
    fn test_height_report_updates_height() {
        let (desk, _) = desk_at(1000);
        assert_eq!(desk.current_mm(), 1000.0);
        assert_eq!(desk.link().frames, 1);
        assert!(!desk.link().is_warning());
    }

    #[test]
    fn test_request_extends_then_arrives() {
        let (mut desk, mut rx) = desk_at(1000);

        let outcome = desk.request_height_cm(105.0, 16).unwrap();
        assert_eq!(outcome, RequestOutcome::Armed { target_mm: 1050.0 });

        // No new data: the seek runs on stale height
        let report = tick(&mut desk, &mut rx, 32);
        assert_eq!(report.ingest, Ingest::Fault(LinkFault::Timeout));
        assert_eq!(report.decision.drive, Drive::Extend);
        assert_eq!(desk.remote().pressed(), LineMask::from(Line::Up));
        assert!(desk.link().is_warning());

        feed_height(&mut rx, 1045);
        let report = tick(&mut desk, &mut rx, 48);
        assert_eq!(report.decision.drive, Drive::Release);
        assert_eq!(
            report.decision.event,
            Some(MotionEvent::Arrived {
                target_mm: 1050.0,
                height_mm: 1045.0
            })
        );
        assert_eq!(desk.motion(), Motion::Idle);
        assert!(desk.remote().pressed().is_empty());
        assert!(!desk.link().is_warning());
    }

    #[test]
    fn test_request_retracts() {
        let (mut desk, mut rx) = desk_at(1000);
        desk.request_height_cm(95.0, 0).unwrap();
        tick(&mut desk, &mut rx, 16);
        assert_eq!(desk.remote().pressed(), LineMask::from(Line::Down));
    }

    #[test]
    fn test_checksum_error_keeps_state() {
        let (mut desk, mut rx) = desk_at(1000);
        desk.request_height_cm(110.0, 0).unwrap();

        rx.feed(&[0x7E, 0xF2, 0xF2, 0x01, 0x03, 0x01, 0x97, 0x03, 0x00, 0x7E]);
        let report = tick(&mut desk, &mut rx, 16);
        assert_eq!(report.ingest, Ingest::Fault(LinkFault::Checksum));
        assert_eq!(report.decision.drive, Drive::Extend);
        assert_eq!(desk.current_mm(), 1000.0);
        assert_eq!(desk.motion(), Motion::Seeking { target_mm: 1100.0 });
        assert_eq!(desk.link().checksum_errors, 1);
    }

    #[test]
    fn test_same_height_is_noop() {
        let (mut desk, mut rx) = desk_at(1000);
        assert_eq!(
            desk.request_height_cm(100.0, 0),
            Ok(RequestOutcome::AlreadyThere)
        );
        assert_eq!(desk.motion(), Motion::Idle);
        tick(&mut desk, &mut rx, 16);
        assert!(desk.remote().pressed().is_empty());
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let (mut desk, _) = desk_at(1000);
        desk.request_height_cm(80.0, 0).unwrap();
        assert_eq!(
            desk.request_height_cm(130.0, 0),
            Err(RequestError::OutOfRange { cm: 130 })
        );
        assert_eq!(desk.motion(), Motion::Seeking { target_mm: 800.0 });
    }

    #[test]
    fn test_new_target_reverses_cleanly() {
        let (mut desk, mut rx) = desk_at(1000);
        desk.request_height_cm(120.0, 0).unwrap();
        tick(&mut desk, &mut rx, 16);
        assert_eq!(desk.remote().pressed(), LineMask::from(Line::Up));

        desk.request_height_cm(70.0, 32).unwrap();
        assert!(desk.remote().pressed().is_empty());
        tick(&mut desk, &mut rx, 48);
        assert_eq!(desk.remote().pressed(), LineMask::from(Line::Down));
    }

    #[test]
    fn test_cancel_releases_everything() {
        let (mut desk, mut rx) = desk_at(1000);
        desk.request_height_cm(120.0, 0).unwrap();
        tick(&mut desk, &mut rx, 16);

        assert!(desk.cancel());
        assert_eq!(desk.motion(), Motion::Idle);
        assert!(desk.remote().pressed().is_empty());

        tick(&mut desk, &mut rx, 32);
        assert!(desk.remote().pressed().is_empty());
    }

    #[test]
    fn test_manual_cancels_seek() {
        let (mut desk, mut rx) = desk_at(1000);
        desk.request_height_cm(120.0, 0).unwrap();
        tick(&mut desk, &mut rx, 16);

        let remote = desk.manual();
        assert!(remote.pressed().is_empty());
        remote.press(LineMask::from(Line::Preset));
        assert_eq!(desk.motion(), Motion::Idle);
    }

    #[test]
    fn test_inch_report_converted() {
        let (desk, _) = desk_at(407);
        let reading = desk.height().unwrap();
        assert_eq!(reading.raw_units, 407);
        let d = desk.current_mm() - 1033.78;
        assert!(d < 1e-9 && d > -1e-9);
    }

    #[test]
    fn test_unknown_command_ignored() {
        let (mut desk, mut rx) = desk_at(1000);
        let frame = Frame::new(CONTROLLER_ADDRESS, 0x05, &[0x01]).unwrap();
        rx.feed(&[0x7E]);
        rx.feed(&frame.encode_to_vec().unwrap());
        // Pad so the 9-byte block read completes
        rx.feed(&[0x00, 0x00, 0x00]);

        let report = tick(&mut desk, &mut rx, 16);
        assert_eq!(
            report.ingest,
            Ingest::Message(MotorMessage::Unknown { command: 0x05 })
        );
        assert_eq!(desk.current_mm(), 1000.0);
    }

    #[test]
    fn test_ingest_then_evaluate() {
        let mut desk = desk();
        let frame = Frame::new(CONTROLLER_ADDRESS, CMD_HEIGHT, &[0x03, 0xE8, 0x00]).unwrap();
        assert!(matches!(desk.ingest(Ok(Some(frame))), Ingest::Message(_)));
        assert_eq!(desk.current_mm(), 1000.0);

        desk.request_height_cm(95.0, 0).unwrap();
        assert_eq!(desk.ingest(Err(LinkFault::Bus)), Ingest::Fault(LinkFault::Bus));
        assert_eq!(desk.evaluate(16).drive, Drive::Retract);
        assert_eq!(desk.link().bus_errors, 1);
        assert!(desk.link().is_warning());
    }

    #[test]
    fn test_idle_bus_tick_yields_and_keeps_seeking() {
        let (mut desk, _) = desk_at(1000);
        desk.request_height_cm(110.0, 0).unwrap();
        let mut rx = ScriptedSerial::new(&[]);
        rx.slow = true;

        let mut fut = core::pin::pin!(desk.tick(&mut rx, 16));
        // Waiting on a silent bus hands control back to the executor
        assert!(embassy_futures::poll_once(fut.as_mut()).is_pending());
        let report = block_on(fut);
        assert_eq!(report.ingest, Ingest::Fault(LinkFault::Timeout));
        assert_eq!(report.decision.drive, Drive::Extend);
    }
}
