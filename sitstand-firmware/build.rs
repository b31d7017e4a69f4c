//! Build script for sitstand-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates desk.toml, then emits it as a `DeskConfig` const

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sitstand_core::config::{ConfigError, DeskConfig};

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Turn desk.toml into `$OUT_DIR/desk_config.rs`
fn generate_config() {
    println!("cargo:rerun-if-changed=desk.toml");

    let config_path = Path::new("desk.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: desk.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a desk.toml configuration file.           ║\n\
            ║  Please create one in the sitstand-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read desk.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: DeskConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid desk.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: desk.toml failed validation                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(describe(e))
        );
    }

    // Debug output of plain structs is valid Rust literal syntax
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let generated = format!("pub const DESK_CONFIG: DeskConfig = {:?};\n", config);
    fs::write(out_dir.join("desk_config.rs"), generated).unwrap();

    println!("cargo:warning=desk.toml validated successfully");
}

/// Human-readable reason for a validation failure
fn describe(e: ConfigError) -> &'static str {
    match e {
        ConfigError::InvertedTravel => "travel.min_cm is above travel.max_cm",
        ConfigError::InvalidTolerance => "tolerance_mm must be a positive number",
        ConfigError::ZeroDuration => "periods, timeouts and baud rates must be non-zero",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
