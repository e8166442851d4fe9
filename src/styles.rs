//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const` so draw calls reference them
//! directly instead of rebuilding a style on every redraw.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{GRAY, ORANGE, SKY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for every value on the display.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small gray labels ("OUT", "IN").
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Outside temperature value (`ProFont` 24pt, orange).
pub const OUTSIDE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, ORANGE);

/// Inside temperature value (`ProFont` 24pt, light blue).
pub const INSIDE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, SKY);

/// Top/bottom lines on the min/max pages (`ProFont` 18pt fits "Max:-12" in 128px).
pub const LINE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Menu labels and loading dots (10x20 pixels).
pub const TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
