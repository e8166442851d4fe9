//! Application configuration constants.
//!
//! Layout values are pre-computed as `const` so the renderer never recalculates
//! positions per frame. Runtime inputs (icon base path, live power control) are
//! supplied by the driver when it builds [`crate::Peripherals`].

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (1.44" ST7735 panel: 128x128)
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 128;

// =============================================================================
// Assets
// =============================================================================

/// Directory under the base path holding all bitmaps.
pub const ICON_DIR: &str = "icons";

/// File extension of icon bitmaps.
pub const ICON_EXTENSION: &str = "bmp";

/// Name of the settings cogwheel bitmap.
pub const COG_ICON: &str = "cog";

/// Number of leading characters of a weather icon code used as the file name.
/// Day and night variants ("10d", "10n") share one bitmap.
pub const ICON_CODE_LEN: usize = 2;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Pause between loading animation frames before a power action.
pub const LOADING_STEP: Duration = Duration::from_millis(200);

/// Target frame time for drivers polling input (~30 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// Interval between redraws of the current page.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(1);

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Horizontal center of the outside temperature (left half).
pub const OUTSIDE_X: i32 = (SCREEN_WIDTH / 4) as i32;

/// Horizontal center of the inside temperature (right half).
pub const INSIDE_X: i32 = (SCREEN_WIDTH * 3 / 4) as i32;

/// Baseline of the temperature values on the current weather page.
pub const TEMPERATURE_Y: i32 = SCREEN_HEIGHT as i32 - 20;

/// Baseline of the small "OUT"/"IN" labels above the temperatures.
pub const TEMPERATURE_LABEL_Y: i32 = TEMPERATURE_Y - 26;

/// Vertical space reserved for the weather icon above the temperatures.
pub const ICON_AREA_HEIGHT: u32 = SCREEN_HEIGHT / 2;

/// Baseline of the top line in top/bottom layout.
pub const TOP_LINE_Y: i32 = CENTER_Y - 12;

/// Baseline of the bottom line in top/bottom layout.
pub const BOTTOM_LINE_Y: i32 = CENTER_Y + 28;

const _: () = assert!(TOP_LINE_Y < BOTTOM_LINE_Y);
const _: () = assert!(TEMPERATURE_LABEL_Y > ICON_AREA_HEIGHT as i32 - 10);
