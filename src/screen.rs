//! Drawing surface the pages render through.
//!
//! Pages never touch pixels directly: they call one of the four [`Screen`]
//! primitives and the implementation decides the layout. [`crate::EgScreen`]
//! draws onto embedded-graphics targets; tests record the calls instead.

use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::Rgb565;
use tinybmp::Bmp;

use crate::error::{Error, Result};

/// A validated BMP file held in memory.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitmap {
    name: String,
    source: PathBuf,
    data: Vec<u8>,
}

impl Bitmap {
    /// Validate raw BMP bytes.
    ///
    /// `name` is the icon name ("10", "cog"), `source` where the bytes came from.
    pub fn from_bytes(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        data: Vec<u8>,
    ) -> Result<Self> {
        let bitmap = Self {
            name: name.into(),
            source: source.into(),
            data,
        };
        bitmap.bmp()?;
        Ok(bitmap)
    }

    /// Icon name this bitmap was loaded as.
    pub fn name(&self) -> &str { &self.name }

    /// File the bitmap was read from.
    pub fn source(&self) -> &Path { &self.source }

    /// Decoded view for drawing.
    pub fn bmp(&self) -> Result<Bmp<'_, Rgb565>> {
        Bmp::from_slice(&self.data).map_err(|e| Error::InvalidBitmap {
            path: self.source.clone(),
            reason: format!("{e:?}"),
        })
    }
}

/// Primitive draw operations of the display.
///
/// Every call replaces the whole screen content.
pub trait Screen {
    /// Outside and inside temperature with an optional weather icon.
    /// `None` values are drawn as placeholders.
    fn display(
        &mut self,
        outside: Option<&str>,
        inside: Option<&str>,
        icon: Option<&Bitmap>,
    ) -> Result<()>;

    /// Two short lines, one above the other.
    fn display_top_bottom(
        &mut self,
        top: &str,
        bottom: &str,
    ) -> Result<()>;

    /// A full-screen bitmap, centred.
    fn display_bitmap(
        &mut self,
        bitmap: &Bitmap,
    ) -> Result<()>;

    /// A single centred line of text. An empty string clears the screen.
    fn display_text(
        &mut self,
        text: &str,
    ) -> Result<()>;
}
