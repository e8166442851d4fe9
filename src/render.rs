//! [`Screen`] implementation for embedded-graphics draw targets.
//!
//! Works with any `DrawTarget<Color = Rgb565>`: the simulator window, a
//! SPI panel driver, or an in-memory frame buffer. Every primitive clears the
//! target first, so a page redraw never leaves stale pixels behind.
//!
//! # Layouts (128x128)
//!
//! ```text
//! display()            display_top_bottom()    display_bitmap() / display_text()
//! ┌──────────────┐     ┌──────────────┐        ┌──────────────┐
//! │    [icon]    │     │    Min:3     │        │              │
//! │  OUT     IN  │     │              │        │   [bitmap]   │
//! │  22      19  │     │    Max:19    │        │   or  TEXT   │
//! └──────────────┘     └──────────────┘        └──────────────┘
//! ```

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::{
    BOTTOM_LINE_Y,
    CENTER_X,
    CENTER_Y,
    ICON_AREA_HEIGHT,
    INSIDE_X,
    OUTSIDE_X,
    TEMPERATURE_LABEL_Y,
    TEMPERATURE_Y,
    TOP_LINE_Y,
};
use crate::error::{Error, Result};
use crate::screen::{Bitmap, Screen};
use crate::styles::{CENTERED, INSIDE_STYLE, LABEL_STYLE, LINE_STYLE, OUTSIDE_STYLE, TEXT_STYLE};

/// Drawn in place of a missing temperature.
const PLACEHOLDER: &str = "--";

const ICON_CENTER: Point = Point::new(CENTER_X, (ICON_AREA_HEIGHT / 2) as i32);
const SCREEN_CENTER: Point = Point::new(CENTER_X, CENTER_Y);

/// Baseline for single-line text so the glyphs sit around the vertical center.
const TEXT_Y: i32 = CENTER_Y + 6;

/// A [`Screen`] drawing onto an embedded-graphics target.
pub struct EgScreen<D> {
    target: D,
}

impl<D> EgScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub const fn new(target: D) -> Self { Self { target } }

    /// The underlying target, e.g. to flush a simulator window.
    pub const fn target(&self) -> &D { &self.target }

    fn clear(&mut self) -> Result<()> { self.target.clear(BLACK).map_err(|_| draw_error("clear")) }

    fn text(
        &mut self,
        text: &str,
        position: Point,
        style: MonoTextStyle<'static, Rgb565>,
    ) -> Result<()> {
        Text::with_text_style(text, position, style, CENTERED)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| draw_error("text"))
    }

    fn bitmap(
        &mut self,
        bitmap: &Bitmap,
        center: Point,
    ) -> Result<()> {
        let bmp = bitmap.bmp()?;
        let size = bmp.bounding_box().size;
        let top_left = center - Point::new((size.width / 2) as i32, (size.height / 2) as i32);
        Image::new(&bmp, top_left)
            .draw(&mut self.target)
            .map_err(|_| draw_error("bitmap"))
    }
}

fn draw_error(primitive: &str) -> Error { Error::Display(format!("failed to draw {primitive}")) }

impl<D> Screen for EgScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn display(
        &mut self,
        outside: Option<&str>,
        inside: Option<&str>,
        icon: Option<&Bitmap>,
    ) -> Result<()> {
        self.clear()?;
        if let Some(icon) = icon {
            self.bitmap(icon, ICON_CENTER)?;
        }
        self.text("OUT", Point::new(OUTSIDE_X, TEMPERATURE_LABEL_Y), LABEL_STYLE)?;
        self.text("IN", Point::new(INSIDE_X, TEMPERATURE_LABEL_Y), LABEL_STYLE)?;
        self.text(
            outside.unwrap_or(PLACEHOLDER),
            Point::new(OUTSIDE_X, TEMPERATURE_Y),
            OUTSIDE_STYLE,
        )?;
        self.text(
            inside.unwrap_or(PLACEHOLDER),
            Point::new(INSIDE_X, TEMPERATURE_Y),
            INSIDE_STYLE,
        )
    }

    fn display_top_bottom(
        &mut self,
        top: &str,
        bottom: &str,
    ) -> Result<()> {
        self.clear()?;
        self.text(top, Point::new(CENTER_X, TOP_LINE_Y), LINE_STYLE)?;
        self.text(bottom, Point::new(CENTER_X, BOTTOM_LINE_Y), LINE_STYLE)
    }

    fn display_bitmap(
        &mut self,
        bitmap: &Bitmap,
    ) -> Result<()> {
        self.clear()?;
        self.bitmap(bitmap, SCREEN_CENTER)
    }

    fn display_text(
        &mut self,
        text: &str,
    ) -> Result<()> {
        self.clear()?;
        if text.is_empty() {
            return Ok(());
        }
        self.text(text, Point::new(CENTER_X, TEXT_Y), TEXT_STYLE)
    }
}
