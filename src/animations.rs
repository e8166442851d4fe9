//! Loading animation shown before a power action.
//!
//! Four growing dot frames, each held for one step, then a blank screen:
//!
//! ```text
//! "."  ->  ".."  ->  "..."  ->  "...."  ->  ""
//! ```
//!
//! The animation blocks the calling thread. It only runs right before the host
//! goes down, so nothing else needs the thread in the meantime.

use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::screen::Screen;

/// Dot frames, each followed by one step pause.
pub const LOADING_FRAMES: [&str; 4] = [".", "..", "...", "...."];

/// Play the loading dots, then clear the screen.
pub fn play_loading<S>(
    screen: &mut S,
    step: Duration,
) -> Result<()>
where
    S: Screen + ?Sized,
{
    for frame in LOADING_FRAMES {
        screen.display_text(frame)?;
        if !step.is_zero() {
            thread::sleep(step);
        }
    }
    screen.display_text("")
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::testing::{Call, RecordingScreen};

    #[test]
    fn test_frame_order() {
        let mut screen = RecordingScreen::default();
        play_loading(&mut screen, Duration::ZERO).unwrap();
        assert_eq!(
            screen.calls,
            vec![
                Call::text("."),
                Call::text(".."),
                Call::text("..."),
                Call::text("...."),
                Call::text(""),
            ]
        );
    }

    #[test]
    fn test_pauses_between_frames() {
        let mut screen = RecordingScreen::default();
        let start = Instant::now();
        play_loading(&mut screen, Duration::from_millis(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
