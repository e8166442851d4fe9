//! Text formatting for values shown on the display.
//!
//! All strings are fixed-capacity `heapless::String`s; the longest value the
//! pages produce is "Max:-273" which fits in [`TEXT_CAPACITY`].

use core::fmt::{Display, Write};

use chrono::{DateTime, Local, TimeZone};
use heapless::String;

/// Capacity of every formatted display string.
pub const TEXT_CAPACITY: usize = 16;

/// Placeholder shown when a timestamp cannot be represented.
pub const UNKNOWN_HOUR: &str = "--:--";

/// Fixed-capacity display text.
pub type Text = String<TEXT_CAPACITY>;

/// Round a temperature to a whole number for display.
///
/// Ties round to even (2.5 -> "2", 3.5 -> "4") and negative values that
/// round to zero print as "0", never "-0".
pub fn temperature(value: f32) -> Text {
    let mut text = Text::new();
    let _ = write!(text, "{}", value.round_ties_even() as i32);
    text
}

/// Rounded temperature behind a label, e.g. `"Min:3"`.
pub fn labelled_temperature(
    label: &str,
    value: f32,
) -> Text {
    let mut text = Text::new();
    let _ = write!(text, "{label}:{}", value.round_ties_even() as i32);
    text
}

/// `HH:MM` of a unix timestamp in the host's local time zone.
pub fn hour(timestamp: i64) -> Text { hour_in(timestamp, &Local) }

/// `HH:MM` of a unix timestamp in the given time zone.
pub fn hour_in<Tz>(
    timestamp: i64,
    tz: &Tz,
) -> Text
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut text = Text::new();
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => {
            let _ = write!(text, "{}", utc.with_timezone(tz).format("%H:%M"));
        }
        None => {
            let _ = text.push_str(UNKNOWN_HOUR);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_temperature_rounding() {
        assert_eq!(temperature(21.6).as_str(), "22");
        assert_eq!(temperature(3.2).as_str(), "3");
        assert_eq!(temperature(18.7).as_str(), "19");
        assert_eq!(temperature(-4.6).as_str(), "-5");
    }

    #[test]
    fn test_temperature_ties_round_to_even() {
        assert_eq!(temperature(2.5).as_str(), "2");
        assert_eq!(temperature(3.5).as_str(), "4");
        assert_eq!(temperature(-0.5).as_str(), "0");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(temperature(-0.4).as_str(), "0");
    }

    #[test]
    fn test_labelled_temperature() {
        assert_eq!(labelled_temperature("Min", 3.2).as_str(), "Min:3");
        assert_eq!(labelled_temperature("Max", -12.7).as_str(), "Max:-13");
    }

    #[test]
    fn test_hour_in_utc() {
        // 2024-05-01 06:15:00 UTC
        assert_eq!(hour_in(1_714_544_100, &Utc).as_str(), "06:15");
    }

    #[test]
    fn test_hour_in_offset_zone() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        // 2024-05-01 13:42:00 UTC is 15:42 in UTC+2
        assert_eq!(hour_in(1_714_570_920, &cest).as_str(), "15:42");
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_eq!(hour_in(i64::MAX, &Utc).as_str(), UNKNOWN_HOUR);
    }
}
