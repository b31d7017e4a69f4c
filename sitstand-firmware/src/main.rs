//! Sit-stand desk bridge firmware
//!
//! Sits between a CB2C desk controller and its wired remote. Listens to
//! the controller's height reports on one UART, takes target heights and
//! button commands from a host on another, and presses the remote's lines
//! to move the desk.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{AnyPin, Level};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_rp::Peri;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sitstand_core::remote::Panel;
use sitstand_core::Desk;
use sitstand_drivers::remote::GpioLine;
use sitstand_hal::UartConfig as LinkConfig;
use sitstand_hal_rp2040::{BufferedSerial, BufferedSerialTx, RpOutput};

use crate::config::{dump_config, DESK_CONFIG};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
static MOTOR_TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static MOTOR_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static HOST_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static HOST_RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Desk bridge firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = DESK_CONFIG;
    dump_config(&config);

    // Remote lines idle high until pressed; start released
    let line = |pin: Peri<'static, AnyPin>| GpioLine::new_active_low(RpOutput::new(pin, Level::High));
    let panel = Panel::new(
        line(Peri::<AnyPin>::from(p.PIN_2)),
        line(Peri::<AnyPin>::from(p.PIN_3)),
        line(Peri::<AnyPin>::from(p.PIN_6)),
        line(Peri::<AnyPin>::from(p.PIN_7)),
    );
    let desk = Desk::new(config, panel);
    info!("Remote lines released");

    // Motor controller link on UART0
    let motor_uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.motor_baudrate;
        cfg
    };
    let motor_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, motor_uart_config);
    let motor_uart = motor_uart.into_buffered(
        Irqs,
        MOTOR_TX_BUF.init([0u8; 64]),
        MOTOR_RX_BUF.init([0u8; 256]),
    );
    let (motor_tx, motor_rx) = motor_uart.split();
    let link_config = LinkConfig {
        baudrate: config.motor_baudrate,
        byte_timeout_ms: config.byte_timeout_ms,
    };
    let motor_rx = BufferedSerial::new(motor_rx, &link_config);
    let motor_tx = BufferedSerialTx::new(motor_tx);
    info!("Motor UART initialized");

    // Host link on UART1
    let host_uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.host_baudrate;
        cfg
    };
    let host_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, host_uart_config);
    let host_uart = host_uart.into_buffered(
        Irqs,
        HOST_TX_BUF.init([0u8; 256]),
        HOST_RX_BUF.init([0u8; 64]),
    );
    let (host_tx, host_rx) = host_uart.split();
    info!("Host UART initialized");

    spawner.spawn(tasks::tick_task(config.tick_interval_ms)).unwrap();
    spawner.spawn(tasks::host_rx_task(host_rx)).unwrap();
    spawner.spawn(tasks::host_tx_task(host_tx)).unwrap();
    spawner
        .spawn(tasks::desk_task(desk, motor_rx, motor_tx))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
