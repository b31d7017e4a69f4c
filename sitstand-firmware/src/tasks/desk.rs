//! Desk control task
//!
//! Owns the motor UART and the remote lines. On every tick it first
//! applies queued host commands, then reads at most one frame and lets
//! the position controller drive the lines.

use defmt::*;
use embassy_time::Delay;

use sitstand_core::control::{MotionEvent, RequestOutcome};
use sitstand_core::host::{HostCommand, HostReply};
use sitstand_core::link::LinkFault;
use sitstand_core::remote::{ButtonMacro, Panel};
use sitstand_core::{Desk, Ingest};
use sitstand_drivers::remote::{run_macro, GpioLine};
use sitstand_hal::UartTx;
use sitstand_hal_rp2040::{BufferedSerial, BufferedSerialTx, RpOutput};
use sitstand_protocol::{MotorMessage, NULL_PACKET, WAKE_PACKET};

use super::tick::TICK_SIGNAL;
use crate::channels::{COMMAND_CHANNEL, REPLY_CHANNEL};

type Line = GpioLine<RpOutput<'static>>;

/// The four remote lines as wired on this board
pub type DeskPanel = Panel<Line, Line, Line, Line>;

/// Desk task - runs the control loop
#[embassy_executor::task]
pub async fn desk_task(
    mut desk: Desk<DeskPanel>,
    mut motor_rx: BufferedSerial,
    mut motor_tx: BufferedSerialTx,
) {
    info!("Desk task started, all lines released");

    let mut delay = Delay;

    loop {
        let now_ms = TICK_SIGNAL.wait().await;

        while let Ok(command) = COMMAND_CHANNEL.try_receive() {
            let reply = handle_command(&mut desk, &mut motor_tx, &mut delay, command, now_ms).await;
            send_reply(reply);
        }

        // Yields while the block read waits on the motor UART
        let report = desk.tick(&mut motor_rx, now_ms).await;

        match report.ingest {
            Ingest::Message(MotorMessage::Height(reading)) => {
                debug!("Height: {} mm (raw {})", reading.mm, reading.raw_units);
                if REPLY_CHANNEL.try_send(HostReply::Height(reading)).is_err() {
                    trace!("Reply channel full, dropping height");
                }
            }
            Ingest::Message(MotorMessage::Unknown { command }) => {
                trace!("Ignoring command 0x{:02x}", command);
            }
            Ingest::Nothing => {}
            Ingest::Fault(LinkFault::Timeout) => trace!("Motor read timed out"),
            Ingest::Fault(LinkFault::Checksum) => warn!("Motor frame checksum mismatch"),
            Ingest::Fault(LinkFault::Malformed) => warn!("Malformed motor frame"),
            Ingest::Fault(LinkFault::Bus) => warn!("Motor UART error"),
        }

        if let Some(event) = report.decision.event {
            match event {
                MotionEvent::Arrived {
                    target_mm,
                    height_mm,
                } => info!("Arrived at {} mm (target {} mm)", height_mm, target_mm),
                MotionEvent::TimedOut { target_mm } => {
                    warn!("Gave up seeking {} mm, lines released", target_mm)
                }
            }
            send_reply(HostReply::Motion(event));
        }
    }
}

/// Apply one host command between ticks
async fn handle_command(
    desk: &mut Desk<DeskPanel>,
    motor_tx: &mut BufferedSerialTx,
    delay: &mut Delay,
    command: HostCommand,
    now_ms: u32,
) -> HostReply {
    match command {
        HostCommand::Height(cm) => match desk.request_height_cm(cm, now_ms) {
            Ok(RequestOutcome::Armed { target_mm }) => {
                info!("Moving from {} mm to {} mm", desk.current_mm(), target_mm);
                HostReply::Ok
            }
            Ok(RequestOutcome::AlreadyThere) => {
                info!("Already at {} mm", desk.current_mm());
                HostReply::Ok
            }
            Err(e) => {
                error!("Height request rejected: {:?}", e);
                HostReply::from(e)
            }
        },
        HostCommand::Preset(preset) => {
            info!("Preset {}", preset.number());
            let chord = preset.button_macro(desk.config().preset_hold_ms);
            run_macro(desk.manual(), chord, delay).await;
            HostReply::Ok
        }
        HostCommand::Memory => {
            info!("Memory button");
            let chord = ButtonMacro::memory(desk.config().memory_hold_ms);
            run_macro(desk.manual(), chord, delay).await;
            HostReply::Ok
        }
        HostCommand::Stop => {
            if desk.cancel() {
                info!("Seek cancelled at {} mm", desk.current_mm());
            }
            HostReply::Ok
        }
        HostCommand::Wake => {
            info!("Sending wake packet");
            write_motor(motor_tx, &WAKE_PACKET)
        }
        HostCommand::Null => {
            info!("Sending null packet");
            write_motor(motor_tx, &NULL_PACKET)
        }
        HostCommand::Status => HostReply::Status {
            motion: desk.motion(),
            link: *desk.link(),
        },
    }
}

fn write_motor(motor_tx: &mut BufferedSerialTx, bytes: &[u8]) -> HostReply {
    match motor_tx.write_blocking(bytes).and_then(|()| motor_tx.flush()) {
        Ok(()) => HostReply::Ok,
        Err(e) => {
            warn!("Motor UART write failed: {:?}", e);
            HostReply::Error("uart")
        }
    }
}

fn send_reply(reply: HostReply) {
    if REPLY_CHANNEL.try_send(reply).is_err() {
        warn!("Reply channel full, dropping {:?}", reply);
    }
}
