use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{ErrorBody, WeatherResponse},
};

/// Path of the backend endpoint, relative to the configured base URL.
pub const WEATHER_PATH: &str = "/api/weather";

/// Anything that can answer a weather lookup for a city name.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError>;
}

/// HTTP client for the `/api/weather` backend.
///
/// One request per call. No retries, no timeout, no cancellation.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `city`, with the name percent-encoded.
    pub fn endpoint_url(&self, city: &str) -> String {
        format!("{}{}?city={}", self.base_url, WEATHER_PATH, urlencoding::encode(city))
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        let url = self.endpoint_url(city);
        debug!(%url, "requesting weather");

        let res = self.http.get(&url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        // The body is JSON on both paths; malformed JSON is a parse failure
        // even when the status already says the request failed.
        let value: serde_json::Value = serde_json::from_str(&body)?;

        if !status.is_success() {
            debug!(%status, "weather request failed");
            let parsed: ErrorBody = serde_json::from_value(value).unwrap_or_default();
            return Err(WeatherError::request_failed(parsed.error));
        }

        Ok(serde_json::from_value(value)?)
    }
}
