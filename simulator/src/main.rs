//! Weather Display Simulator for desktop platforms.
//!
//! Runs the page menu in an embedded-graphics-simulator window with a fake
//! weather station.
//!
//! # Usage
//!
//! ```text
//! simulator [BASE_PATH] [--live]
//! ```
//!
//! Icons are read from `BASE_PATH/icons/*.bmp` (default: current directory).
//! Without `--live`, shutdown and reboot are only logged.
//!
//! # Key Controls
//!
//! - **C**: Click
//! - **N**: Next top-level page
//! - **S**: Select the next entry inside an open menu
//! - **Q**: Quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod screen;
mod station;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};
use weather_display::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, UPDATE_INTERVAL};
use weather_display::{IconStore, Menu, Peripherals};

use crate::screen::{SimPower, SimScreen};
use crate::station::FakeStation;

/// Command line options.
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Weather station display simulator", long_about = None)]
struct Options {
    /// Directory holding `icons/*.bmp`
    #[arg(value_name = "BASE_PATH", default_value = ".")]
    base_path: PathBuf,

    /// Run the real shutdown/reboot commands instead of logging them
    #[arg(long)]
    live: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    info!(
        "Icons from {}, power actions {}",
        options.base_path.display(),
        if options.live { "LIVE" } else { "dry run" }
    );

    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let window = Window::new("Weather Station Sim", &output_settings);

    let mut peripherals = Peripherals::new(
        SimScreen::new(display, window),
        SimPower::new(options.live),
        IconStore::new(&options.base_path),
    );

    if let Err(e) = run(&mut peripherals) {
        error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

fn run(peripherals: &mut Peripherals<SimScreen, SimPower>) -> Result<()> {
    let station = FakeStation::new();
    let mut menu = Menu::new();
    let mut redraw = true;
    let mut last_update = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in peripherals.screen.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => {
                            menu.click(peripherals).context("click failed")?;
                            redraw = true;
                        }
                        Keycode::N => {
                            menu.next_page();
                            redraw = true;
                        }
                        Keycode::S => redraw |= menu.select_next_child(),
                        Keycode::Q => return Ok(()),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if peripherals.power.performed() {
            info!("Power action performed, leaving menu");
            return Ok(());
        }

        if redraw || last_update.elapsed() >= UPDATE_INTERVAL {
            menu.update(&station.snapshot(), peripherals)
                .context("update failed")?;
            redraw = false;
            last_update = Instant::now();
        }

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_options_definition() { Options::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_from(["simulator"]).unwrap();
        assert_eq!(options.base_path, PathBuf::from("."));
        assert!(!options.live);
    }

    #[test]
    fn test_base_path_and_live() {
        let options = Options::try_parse_from(["simulator", "/opt/weather", "--live"]).unwrap();
        assert_eq!(options.base_path, PathBuf::from("/opt/weather"));
        assert!(options.live);
    }

    #[test]
    fn test_mistyped_flag_is_rejected() {
        assert!(Options::try_parse_from(["simulator", "--lvie"]).is_err());
        assert!(Options::try_parse_from(["simulator", "-l"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Options::try_parse_from(["simulator", "a", "b"]).is_err());
    }
}
