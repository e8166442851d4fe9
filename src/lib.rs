//! Weather display library - page menu for a weather station's small screen.
//!
//! This library contains everything the device and the desktop simulator share:
//!
//! - [`pages`]: The page tree (current weather, min/max forecast, settings)
//! - [`menu`]: Top-level carousel that drives the page tree
//! - [`screen`]: The `Screen` trait pages draw through, plus bitmaps
//! - [`render`]: `Screen` implementation for any embedded-graphics target
//! - [`weather`]: Read-only weather snapshot consumed by the pages
//! - [`icons`]: Icon bitmap lookup under `<base>/icons/`
//! - [`power`]: Host shutdown/reboot commands
//! - [`animations`]: Loading dots shown before a power action
//!
//! # Driving the menu
//!
//! ```ignore
//! let mut menu = Menu::new();
//! let mut peripherals = Peripherals::new(screen, SystemPower, IconStore::new("/opt/weather"));
//!
//! loop {
//!     let snapshot = station.snapshot();
//!     menu.update(&snapshot, &mut peripherals)?;
//!     if button_pressed {
//!         menu.click(&mut peripherals)?;
//!     }
//! }
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod error;
pub mod format;
pub mod icons;
pub mod menu;
pub mod pages;
pub mod power;
pub mod render;
pub mod screen;
pub mod styles;
pub mod weather;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use error::{Error, Result};
pub use icons::IconStore;
pub use menu::Menu;
pub use pages::{ContainerState, Navigation, Page, Peripherals};
pub use power::{DryRunPower, PowerAction, PowerControl, SystemPower};
pub use render::EgScreen;
pub use screen::{Bitmap, Screen};
pub use weather::{ForecastExtrema, ForecastRecord, OutsideWeather, TemperatureUnit, WeatherSnapshot};
