//! Forecast pages: today's min/max temperature and the hours they occur.

use crate::error::Result;
use crate::format;
use crate::screen::Screen;
use crate::weather::{TemperatureUnit, WeatherSnapshot};

/// Shown on the bottom line when no forecast is available.
const ERROR_TEXT: &str = "error";

/// Main view of the min/max container.
pub(super) fn update_extrema<S>(
    weather: &WeatherSnapshot,
    screen: &mut S,
) -> Result<()>
where
    S: Screen,
{
    match (weather.coldest(), weather.hottest()) {
        (Some(coldest), Some(hottest)) => {
            let min = format::labelled_temperature("Min", coldest.temperature(TemperatureUnit::Celsius));
            let max = format::labelled_temperature("Max", hottest.temperature(TemperatureUnit::Celsius));
            screen.display_top_bottom(&min, &max)
        }
        _ => screen.display_top_bottom("Min Max", ERROR_TEXT),
    }
}

/// Hours (local time) of the coldest and hottest forecast entries.
pub(super) fn update_hours<S>(
    weather: &WeatherSnapshot,
    screen: &mut S,
) -> Result<()>
where
    S: Screen,
{
    match (weather.coldest(), weather.hottest()) {
        (Some(coldest), Some(hottest)) => {
            let min_hour = format::hour(coldest.reference_time());
            let max_hour = format::hour(hottest.reference_time());
            screen.display_top_bottom(&min_hour, &max_hour)
        }
        _ => screen.display_top_bottom("Hours", ERROR_TEXT),
    }
}
