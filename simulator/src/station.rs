//! Fake weather station producing slowly drifting readings.
//!
//! Outside data is withheld for the first few seconds to mimic the real
//! station waiting for its first API response, so the placeholder layout can
//! be checked too.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveTime};
use weather_display::{ForecastExtrema, ForecastRecord, OutsideWeather, WeatherSnapshot};

/// Time before the first outside observation "arrives".
const FIRST_FETCH_DELAY: Duration = Duration::from_secs(3);

/// How long each icon is shown before cycling to the next one.
const ICON_PERIOD_SECS: u64 = 10;

const ICON_CODES: [&str; 9] = ["01d", "02d", "03d", "04n", "09d", "10d", "11n", "13d", "50d"];

pub struct FakeStation {
    started: Instant,
}

impl FakeStation {
    pub fn new() -> Self { Self { started: Instant::now() } }

    /// Readings as of now.
    pub fn snapshot(&self) -> WeatherSnapshot {
        let elapsed = self.started.elapsed();
        let t = elapsed.as_secs_f32();

        let outside = (elapsed >= FIRST_FETCH_DELAY).then(|| {
            let icon_idx = (elapsed.as_secs() / ICON_PERIOD_SECS) as usize % ICON_CODES.len();
            OutsideWeather {
                temperature: 12.0 + 6.0 * (t / 20.0).sin(),
                icon: ICON_CODES[icon_idx].into(),
                observed_at: Local::now().timestamp(),
            }
        });

        WeatherSnapshot {
            outside,
            inside_temperature: Some(21.0 + (t / 30.0).sin()),
            forecast: today_forecast(),
        }
    }
}

/// Coldest at 06:15, hottest at 15:42, local time today.
fn today_forecast() -> Option<ForecastExtrema> {
    let at = |hour, minute| {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Local::now()
            .date_naive()
            .and_time(time)
            .and_local_timezone(Local)
            .earliest()
            .map(|dt| dt.timestamp())
    };

    Some(ForecastExtrema {
        coldest: ForecastRecord::new(3.2, at(6, 15)?),
        hottest: ForecastRecord::new(18.7, at(15, 42)?),
    })
}
