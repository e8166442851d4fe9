//! Current weather page: outside and inside temperature plus the weather icon.

use log::{debug, warn};

use super::Peripherals;
use crate::error::Result;
use crate::format;
use crate::power::PowerControl;
use crate::screen::Screen;
use crate::weather::WeatherSnapshot;

pub(super) fn update<S, P>(
    weather: &WeatherSnapshot,
    peripherals: &mut Peripherals<S, P>,
) -> Result<()>
where
    S: Screen,
    P: PowerControl,
{
    let mut outside_text = None;
    let mut icon = None;

    // The observation time flags whether outside data has been fetched
    if weather.weather_hour().is_some() {
        outside_text = weather.outside_temperature().map(format::temperature);
        if let Some(code) = weather.icon() {
            // A missing icon only loses the picture, the temperatures still show
            icon = match peripherals.icons.weather_icon(code) {
                Ok(bitmap) => Some(bitmap),
                Err(e) if e.is_resource() => {
                    warn!("No icon for weather code {code:?}: {e}");
                    None
                }
                Err(e) => return Err(e),
            };
        }
    }

    let inside_text = weather.inside_temperature.map(format::temperature);

    peripherals
        .screen
        .display(outside_text.as_deref(), inside_text.as_deref(), icon.as_ref())?;
    debug!("Screen updated");
    Ok(())
}
