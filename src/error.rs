//! Error kinds surfaced by the page tree.
//!
//! Missing weather data is not an error: pages render placeholder text for it.
//! Resource errors on optional artwork are degraded by the pages themselves;
//! display and power failures propagate to the driver.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bitmap file missing or unreadable.
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File exists but does not decode as a BMP.
    #[error("invalid bitmap {}: {reason}", path.display())]
    InvalidBitmap { path: PathBuf, reason: String },

    /// The screen failed to draw.
    #[error("display failure: {0}")]
    Display(String),

    /// Privileged command could not be started.
    #[error("failed to run `{command}`")]
    PowerCommand {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Privileged command ran but reported failure.
    #[error("`{command}` exited with {status}")]
    PowerCommandStatus { command: String, status: ExitStatus },
}

impl Error {
    /// True for errors caused by missing or broken artwork on disk.
    pub const fn is_resource(&self) -> bool { matches!(self, Self::ResourceNotFound { .. } | Self::InvalidBitmap { .. }) }
}
