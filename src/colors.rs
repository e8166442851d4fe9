//! Color constants for the weather display.
//!
//! Standard colors come from the `RgbColor` trait constants so they map to
//! exact Rgb565 extremes; the accent colors are application-specific.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Background of every page.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Orange accent for the outside temperature.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Light blue accent for the inside temperature.
pub const SKY: Rgb565 = Rgb565::new(12, 44, 31);

/// Dark gray for labels and placeholders.
/// RGB565: (12, 24, 12) - roughly 40% brightness.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);
