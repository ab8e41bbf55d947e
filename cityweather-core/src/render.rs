//! Turns a [`UiState`] into a [`ViewModel`]: one field per output element of
//! the widget plus a `hidden` flag per container.
//!
//! Rendering is pure. Today's date is passed in so the "today" label can be
//! tested without touching the clock.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::{catalog, model::WeatherResponse, view::UiState};

/// Number of forecast rows shown at most.
pub const FORECAST_DAYS: usize = 7;

pub const TODAY_LABEL: &str = "今天";

/// Shown in place of a missing forecast temperature.
pub const MISSING_VALUE: &str = "--";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub loading_hidden: bool,
    pub content_hidden: bool,
    pub error_hidden: bool,
    pub error_text: String,
    pub content: Option<ContentView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentView {
    pub location: String,
    pub temperature: String,
    pub description: String,
    pub icon: String,
    /// Changes whenever the icon must restart its idle animation.
    pub icon_animation_key: u64,
    pub humidity: String,
    pub wind: String,
    pub feels_like: String,
    pub precipitation: String,
    pub forecast: Vec<ForecastRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub label: String,
    pub icon: String,
    pub temperatures: String,
}

pub fn render(state: &UiState, icon_animation_key: u64, today: NaiveDate) -> ViewModel {
    let hidden = ViewModel {
        loading_hidden: true,
        content_hidden: true,
        error_hidden: true,
        error_text: String::new(),
        content: None,
    };

    match state {
        UiState::Idle => hidden,
        UiState::Loading => ViewModel { loading_hidden: false, ..hidden },
        UiState::Error(message) => {
            ViewModel { error_hidden: false, error_text: message.clone(), ..hidden }
        }
        UiState::Content(data) => ViewModel {
            content_hidden: false,
            content: Some(render_content(data, icon_animation_key, today)),
            ..hidden
        },
    }
}

fn render_content(data: &WeatherResponse, icon_animation_key: u64, today: NaiveDate) -> ContentView {
    let current = &data.current;
    let info = current.weather_code.map_or(&catalog::UNKNOWN, catalog::lookup);

    ContentView {
        location: format!("{}, {}", data.location.name, data.location.country),
        temperature: round_half_up(current.temperature_2m).to_string(),
        description: info.description.to_string(),
        icon: info.icon.to_string(),
        icon_animation_key,
        humidity: format!("{}%", format_number(current.relative_humidity_2m)),
        wind: format!("{} km/h", format_number(current.wind_speed_10m)),
        feels_like: format!("{}°C", round_half_up(current.apparent_temperature)),
        precipitation: format!("{} mm", format_number(current.precipitation)),
        forecast: render_forecast(data, today),
    }
}

fn render_forecast(data: &WeatherResponse, today: NaiveDate) -> Vec<ForecastRow> {
    let daily = &data.daily;
    let today = today.format("%Y-%m-%d").to_string();

    (0..FORECAST_DAYS)
        .map_while(|idx| {
            let date = daily.date(idx)?;
            let info = daily.code(idx).map_or(&catalog::UNKNOWN, catalog::lookup);

            Some(ForecastRow {
                label: day_label(date, &today),
                icon: info.icon.to_string(),
                temperatures: format!(
                    "{}° / {}°",
                    rounded_or_missing(daily.max(idx)),
                    rounded_or_missing(daily.min(idx))
                ),
            })
        })
        .collect()
}

fn day_label(date: &str, today: &str) -> String {
    if date == today {
        return TODAY_LABEL.to_string();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => weekday_name(parsed.weekday()).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Long weekday name in zh-CN.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

/// Round to the nearest integer, halves towards positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor as i64 + 1 } else { floor as i64 }
}

fn rounded_or_missing(value: Option<f64>) -> String {
    value.map(|v| round_half_up(v).to_string()).unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Shortest form: `12.0 -> "12"`, `3.5 -> "3.5"`. Magnitudes from `1e21` up
/// and below `1e-6` switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }

    value.to_string()
}
