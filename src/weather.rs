//! Read-only weather data consumed by the pages.
//!
//! The weather station owns fetching and caching; the page tree only ever sees
//! a [`WeatherSnapshot`] borrowed for the duration of one `update` call. Every
//! part of the snapshot may be missing (sensor offline, no forecast yet).

/// Unit for reading forecast temperatures.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Convert a Celsius value into this unit.
    #[inline]
    pub fn from_celsius(
        self,
        celsius: f32,
    ) -> f32 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

/// A single forecast entry: predicted temperature at a point in time.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ForecastRecord {
    celsius: f32,
    reference_time: i64,
}

impl ForecastRecord {
    /// Create a record from a Celsius temperature and a unix timestamp (seconds).
    pub const fn new(
        celsius: f32,
        reference_time: i64,
    ) -> Self {
        Self { celsius, reference_time }
    }

    /// Forecast temperature in the requested unit.
    #[inline]
    pub fn temperature(
        &self,
        unit: TemperatureUnit,
    ) -> f32 {
        unit.from_celsius(self.celsius)
    }

    /// Unix timestamp (seconds) the forecast refers to.
    #[inline]
    pub const fn reference_time(&self) -> i64 { self.reference_time }
}

/// Coldest and hottest records of today's forecast.
///
/// The station computes both from the same forecast, so they are available
/// together or not at all.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ForecastExtrema {
    pub coldest: ForecastRecord,
    pub hottest: ForecastRecord,
}

/// Current outside observation.
#[derive(Clone, PartialEq, Debug)]
pub struct OutsideWeather {
    /// Temperature in Celsius.
    pub temperature: f32,
    /// Icon code as reported by the weather service, e.g. "10d".
    pub icon: String,
    /// Unix timestamp (seconds) of the observation.
    pub observed_at: i64,
}

/// Everything the pages may show, as of one moment.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct WeatherSnapshot {
    /// `None` while no outside observation has been fetched.
    pub outside: Option<OutsideWeather>,
    /// Indoor sensor reading in Celsius.
    pub inside_temperature: Option<f32>,
    pub forecast: Option<ForecastExtrema>,
}

impl WeatherSnapshot {
    /// Outside temperature, if an observation is available.
    pub fn outside_temperature(&self) -> Option<f32> { self.outside.as_ref().map(|o| o.temperature) }

    /// Outside icon code, if an observation is available.
    pub fn icon(&self) -> Option<&str> { self.outside.as_ref().map(|o| o.icon.as_str()) }

    /// Time of the outside observation, if any.
    pub fn weather_hour(&self) -> Option<i64> { self.outside.as_ref().map(|o| o.observed_at) }

    pub fn coldest(&self) -> Option<&ForecastRecord> { self.forecast.as_ref().map(|f| &f.coldest) }

    pub fn hottest(&self) -> Option<&ForecastRecord> { self.forecast.as_ref().map(|f| &f.hottest) }
}
