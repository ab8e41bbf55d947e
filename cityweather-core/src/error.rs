use thiserror::Error;

/// Shown when a failed response carries no `error` text.
pub const DEFAULT_FAILURE_MESSAGE: &str = "无法获取天气数据";

/// Failure of a single weather lookup.
///
/// `Display` is the exact text shown to the user.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    RequestFailed(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl WeatherError {
    /// Build a `RequestFailed` from the backend's optional error text.
    pub fn request_failed(message: Option<String>) -> Self {
        WeatherError::RequestFailed(
            message.filter(|m| !m.is_empty()).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_uses_backend_text() {
        let err = WeatherError::request_failed(Some("city not found".into()));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn request_failed_defaults_when_absent() {
        assert_eq!(WeatherError::request_failed(None).to_string(), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(
            WeatherError::request_failed(Some(String::new())).to_string(),
            DEFAULT_FAILURE_MESSAGE
        );
    }

    #[test]
    fn parse_error_shows_underlying_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = source.to_string();
        let err = WeatherError::from(source);
        assert_eq!(err.to_string(), expected);
    }
}
