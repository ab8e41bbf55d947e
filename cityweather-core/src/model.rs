use std::collections::HashMap;

use serde::Deserialize;

/// Body of a successful `GET /api/weather` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: Current,
    #[serde(default)]
    pub daily: Daily,

    /// Unit strings keyed by field name, e.g. `"temperature_2m": "°C"`.
    #[serde(default)]
    pub current_units: HashMap<String, String>,
    #[serde(default)]
    pub daily_units: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Current {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    #[serde(default)]
    pub weather_code: Option<i64>,
    #[serde(default)]
    pub is_day: Option<u8>,
    /// Local observation time as sent by the upstream forecast API.
    #[serde(default)]
    pub time: Option<String>,
}

/// Per-day arrays, aligned by index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Daily {
    pub time: Vec<Option<String>>,
    pub weather_code: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
}

impl Daily {
    /// Date string of day `idx`, or `None` when absent or empty.
    pub fn date(&self, idx: usize) -> Option<&str> {
        self.time.get(idx)?.as_deref().filter(|s| !s.is_empty())
    }

    pub fn code(&self, idx: usize) -> Option<i64> {
        self.weather_code.get(idx).copied().flatten()
    }

    pub fn max(&self, idx: usize) -> Option<f64> {
        self.temperature_2m_max.get(idx).copied().flatten()
    }

    pub fn min(&self, idx: usize) -> Option<f64> {
        self.temperature_2m_min.get(idx).copied().flatten()
    }
}

/// Body of a failed response. `error` may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
