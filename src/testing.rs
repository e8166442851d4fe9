//! Test doubles and fixtures shared by the unit tests.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::icons::IconStore;
use crate::pages::Peripherals;
use crate::power::DryRunPower;
use crate::screen::{Bitmap, Screen};

/// One recorded screen call. Bitmaps are recorded by icon name.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Call {
    Display {
        outside: Option<String>,
        inside: Option<String>,
        icon: Option<String>,
    },
    TopBottom(String, String),
    Bitmap(String),
    Text(String),
}

impl Call {
    pub fn text(text: &str) -> Self { Self::Text(text.into()) }

    pub fn top_bottom(
        top: &str,
        bottom: &str,
    ) -> Self {
        Self::TopBottom(top.into(), bottom.into())
    }

    pub fn display(
        outside: Option<&str>,
        inside: Option<&str>,
        icon: Option<&str>,
    ) -> Self {
        Self::Display {
            outside: outside.map(Into::into),
            inside: inside.map(Into::into),
            icon: icon.map(Into::into),
        }
    }
}

/// Screen that remembers every call.
#[derive(Default, Debug)]
pub struct RecordingScreen {
    pub calls: Vec<Call>,
}

impl RecordingScreen {
    pub fn last(&self) -> Option<&Call> { self.calls.last() }
}

impl Screen for RecordingScreen {
    fn display(
        &mut self,
        outside: Option<&str>,
        inside: Option<&str>,
        icon: Option<&Bitmap>,
    ) -> Result<()> {
        self.calls.push(Call::display(outside, inside, icon.map(Bitmap::name)));
        Ok(())
    }

    fn display_top_bottom(
        &mut self,
        top: &str,
        bottom: &str,
    ) -> Result<()> {
        self.calls.push(Call::top_bottom(top, bottom));
        Ok(())
    }

    fn display_bitmap(
        &mut self,
        bitmap: &Bitmap,
    ) -> Result<()> {
        self.calls.push(Call::Bitmap(bitmap.name().into()));
        Ok(())
    }

    fn display_text(
        &mut self,
        text: &str,
    ) -> Result<()> {
        self.calls.push(Call::text(text));
        Ok(())
    }
}

/// Screen whose every draw fails.
#[derive(Default, Debug)]
pub struct BrokenScreen;

impl Screen for BrokenScreen {
    fn display(
        &mut self,
        _outside: Option<&str>,
        _inside: Option<&str>,
        _icon: Option<&Bitmap>,
    ) -> Result<()> {
        Err(Error::Display("panel not responding".into()))
    }

    fn display_top_bottom(
        &mut self,
        _top: &str,
        _bottom: &str,
    ) -> Result<()> {
        Err(Error::Display("panel not responding".into()))
    }

    fn display_bitmap(
        &mut self,
        _bitmap: &Bitmap,
    ) -> Result<()> {
        Err(Error::Display("panel not responding".into()))
    }

    fn display_text(
        &mut self,
        _text: &str,
    ) -> Result<()> {
        Err(Error::Display("panel not responding".into()))
    }
}

/// A 1x1 24-bit BMP (54 byte header + one padded pixel row).
pub fn bmp_bytes() -> Vec<u8> {
    let mut data = Vec::with_capacity(58);
    // File header
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&58u32.to_le_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&54u32.to_le_bytes());
    // BITMAPINFOHEADER
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&1i32.to_le_bytes());
    data.extend_from_slice(&1i32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&4u32.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    // Pixel row: BGR + padding
    data.extend_from_slice(&[0xFF, 0x80, 0x00, 0x00]);
    data
}

/// Temporary base directory with `icons/<name>.bmp` for each name.
pub fn icon_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let icons = dir.path().join("icons");
    fs::create_dir_all(&icons).unwrap();
    for name in names {
        fs::write(icons.join(format!("{name}.bmp")), bmp_bytes()).unwrap();
    }
    dir
}

/// Recording peripherals with no animation delay.
pub fn peripherals(icons: &TempDir) -> Peripherals<RecordingScreen, DryRunPower> {
    Peripherals::new(RecordingScreen::default(), DryRunPower::new(), IconStore::new(icons.path()))
        .with_loading_step(Duration::ZERO)
}
