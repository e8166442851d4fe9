//! Icon bitmap lookup.
//!
//! All artwork lives in `<base>/icons/<name>.bmp`. Weather icons are keyed by
//! the first two characters of the service's icon code so day and night
//! variants ("10d", "10n") share a file.

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::config::{COG_ICON, ICON_CODE_LEN, ICON_DIR, ICON_EXTENSION};
use crate::error::{Error, Result};
use crate::screen::Bitmap;

/// Resolves icon names to files under a base directory and loads them.
#[derive(Clone, Debug)]
pub struct IconStore {
    base_path: PathBuf,
}

impl IconStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// File name stem for a weather icon code ("10d" -> "10").
    ///
    /// Codes shorter than two characters are used whole.
    pub fn weather_icon_name(code: &str) -> &str {
        match code.char_indices().nth(ICON_CODE_LEN) {
            Some((end, _)) => &code[..end],
            None => code,
        }
    }

    /// Path of the bitmap called `name`.
    pub fn path_for(
        &self,
        name: &str,
    ) -> PathBuf {
        self.base_path.join(ICON_DIR).join(format!("{name}.{ICON_EXTENSION}"))
    }

    /// Read and validate the bitmap called `name`.
    pub fn load(
        &self,
        name: &str,
    ) -> Result<Bitmap> {
        let path = self.path_for(name);
        debug!("Loading bitmap {}", path.display());
        let data = fs::read(&path).map_err(|source| Error::ResourceNotFound {
            path: path.clone(),
            source,
        })?;
        Bitmap::from_bytes(name, path, data)
    }

    /// Bitmap for a weather icon code.
    pub fn weather_icon(
        &self,
        code: &str,
    ) -> Result<Bitmap> {
        self.load(Self::weather_icon_name(code))
    }

    /// The settings cogwheel.
    pub fn cog(&self) -> Result<Bitmap> { self.load(COG_ICON) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::icon_dir;

    #[test]
    fn test_weather_icon_name() {
        assert_eq!(IconStore::weather_icon_name("10d"), "10");
        assert_eq!(IconStore::weather_icon_name("01n"), "01");
        assert_eq!(IconStore::weather_icon_name("50"), "50");
        assert_eq!(IconStore::weather_icon_name("9"), "9");
        assert_eq!(IconStore::weather_icon_name(""), "");
    }

    #[test]
    fn test_path_for() {
        let store = IconStore::new("/opt/weather");
        assert_eq!(store.path_for("10"), PathBuf::from("/opt/weather/icons/10.bmp"));
        assert_eq!(store.path_for("cog"), PathBuf::from("/opt/weather/icons/cog.bmp"));
    }

    #[test]
    fn test_load_weather_icon() {
        let dir = icon_dir(&["10"]);
        let store = IconStore::new(dir.path());
        let bitmap = store.weather_icon("10d").unwrap();
        assert_eq!(bitmap.name(), "10");
        assert_eq!(bitmap.source(), dir.path().join("icons/10.bmp"));
    }

    #[test]
    fn test_missing_icon_is_resource_not_found() {
        let dir = icon_dir(&[]);
        let store = IconStore::new(dir.path());
        let err = store.cog().unwrap_err();
        assert!(matches!(err, Error::ResourceNotFound { ref path, .. } if path.ends_with("icons/cog.bmp")));
    }

    #[test]
    fn test_corrupt_icon_is_invalid_bitmap() {
        let dir = icon_dir(&[]);
        fs::write(dir.path().join("icons/cog.bmp"), b"BM garbage").unwrap();
        let store = IconStore::new(dir.path());
        assert!(matches!(store.cog(), Err(Error::InvalidBitmap { .. })));
    }
}
