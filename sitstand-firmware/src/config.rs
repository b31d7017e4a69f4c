//! Compiled-in configuration
//!
//! `build.rs` validates desk.toml and turns it into [`DESK_CONFIG`].

use defmt::*;
use sitstand_core::config::{DeskConfig, TravelRange};

include!(concat!(env!("OUT_DIR"), "/desk_config.rs"));

/// Log the active configuration and board wiring
pub fn dump_config(config: &DeskConfig) {
    let TravelRange { min_cm, max_cm } = config.travel;
    info!("Desk bridge configuration:");
    info!("  travel: {} cm .. {} cm", min_cm, max_cm);
    info!("  tolerance: {} mm", config.tolerance_mm);
    match config.max_seek_ms {
        Some(ms) => info!("  seek timeout: {} ms", ms),
        None => info!("  seek timeout: none"),
    }
    info!("  tick: {} ms", config.tick_interval_ms);
    info!(
        "  motor UART0 (TX GPIO0, RX GPIO1): {} baud, {} ms byte timeout",
        config.motor_baudrate, config.byte_timeout_ms
    );
    info!("  host UART1 (TX GPIO4, RX GPIO5): {} baud", config.host_baudrate);
    info!("  lines: hc0 GPIO2, hc1 GPIO3, hc2 GPIO6, hc3 GPIO7 (active low)");
    info!(
        "  hold: preset {} ms, memory {} ms",
        config.preset_hold_ms, config.memory_hold_ms
    );
}
