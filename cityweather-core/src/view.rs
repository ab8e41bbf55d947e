use chrono::{NaiveDate, Utc};
use tracing::{debug, error};

use crate::{
    client::WeatherSource,
    error::WeatherError,
    model::WeatherResponse,
    render::{self, ViewModel},
};

/// Visible mode of the widget. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Content(Box<WeatherResponse>),
    Error(String),
}

/// Handle for one accepted search, returned by [`WeatherView::begin_search`]
/// and consumed by [`WeatherView::complete`].
#[derive(Debug)]
pub struct SearchTicket {
    seq: u64,
    city: String,
}

impl SearchTicket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Owns the UI state and drives searches against a [`WeatherSource`].
///
/// Only the most recently issued search may complete; results of searches
/// superseded while in flight are dropped.
#[derive(Debug)]
pub struct WeatherView<S> {
    source: S,
    state: UiState,
    issued: u64,
    icon_animation_key: u64,
}

impl<S: WeatherSource> WeatherView<S> {
    pub fn new(source: S) -> Self {
        Self { source, state: UiState::Idle, issued: 0, icon_animation_key: 0 }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start a search for the trimmed input. Returns `None` and leaves the
    /// state untouched when nothing but whitespace was typed.
    pub fn begin_search(&mut self, input: &str) -> Option<SearchTicket> {
        let city = input.trim();
        if city.is_empty() {
            debug!("empty input, search skipped");
            return None;
        }

        self.issued += 1;
        self.state = UiState::Loading;
        debug!(seq = self.issued, city, "search started");

        Some(SearchTicket { seq: self.issued, city: city.to_string() })
    }

    /// Apply the outcome of a search. Returns `false` if the ticket was
    /// superseded by a later search and the result was discarded.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherResponse, WeatherError>,
    ) -> bool {
        if ticket.seq != self.issued {
            debug!(seq = ticket.seq, latest = self.issued, "stale result discarded");
            return false;
        }

        self.state = match result {
            Ok(data) => {
                self.icon_animation_key = self.icon_animation_key.wrapping_add(1);
                UiState::Content(Box::new(data))
            }
            Err(err) => {
                error!(city = %ticket.city, error = ?err, "weather lookup failed");
                UiState::Error(err.to_string())
            }
        };
        true
    }

    /// Trim, fetch and apply in one go. Returns `false` when the input was
    /// empty and no request was made.
    pub async fn search(&mut self, input: &str) -> bool {
        let Some(ticket) = self.begin_search(input) else {
            return false;
        };

        let result = self.source.fetch_weather(ticket.city()).await;
        self.complete(ticket, result)
    }

    pub fn render(&self, today: NaiveDate) -> ViewModel {
        render::render(&self.state, self.icon_animation_key, today)
    }

    /// Render against today's UTC date.
    pub fn render_now(&self) -> ViewModel {
        self.render(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Current, Daily, Location};
    use async_trait::async_trait;
    use std::{
        collections::{HashMap, VecDeque},
        sync::Mutex,
    };

    #[derive(Debug, Default)]
    struct ScriptedSource {
        replies: Mutex<VecDeque<Result<WeatherResponse, WeatherError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn with(replies: Vec<Result<WeatherResponse, WeatherError>>) -> Self {
            Self { replies: Mutex::new(replies.into()), calls: Mutex::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherSource for ScriptedSource {
        async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
            self.calls.lock().unwrap().push(city.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(WeatherError::request_failed(None)))
        }
    }

    fn sample(name: &str) -> WeatherResponse {
        WeatherResponse {
            location: Location { name: name.into(), country: "中国".into(), lat: None, lon: None },
            current: Current {
                temperature_2m: 21.6,
                relative_humidity_2m: 50.0,
                wind_speed_10m: 3.0,
                apparent_temperature: 19.4,
                precipitation: 0.5,
                weather_code: Some(0),
                is_day: None,
                time: None,
            },
            daily: Daily::default(),
            current_units: HashMap::new(),
            daily_units: HashMap::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[tokio::test]
    async fn blank_input_makes_no_request() {
        let mut view = WeatherView::new(ScriptedSource::default());

        assert!(!view.search("").await);
        assert!(!view.search("   \t ").await);

        assert!(view.source().calls().is_empty());
        assert_eq!(view.state(), &UiState::Idle);
    }

    #[tokio::test]
    async fn blank_input_keeps_previous_content() {
        let mut view = WeatherView::new(ScriptedSource::with(vec![Ok(sample("杭州"))]));

        assert!(view.search("杭州").await);
        let before = view.state().clone();

        assert!(!view.search("  ").await);
        assert_eq!(view.state(), &before);
        assert_eq!(view.source().calls().len(), 1);
    }

    #[tokio::test]
    async fn input_is_trimmed_before_fetch() {
        let mut view = WeatherView::new(ScriptedSource::with(vec![Ok(sample("北京"))]));

        view.search("  北京 ").await;

        assert_eq!(view.source().calls(), vec!["北京".to_string()]);
        assert!(matches!(view.state(), UiState::Content(_)));
    }

    #[tokio::test]
    async fn success_renders_content_without_loading() {
        let mut view = WeatherView::new(ScriptedSource::with(vec![Ok(sample("北京"))]));

        view.search("北京").await;
        let vm = view.render(today());

        assert!(vm.loading_hidden && vm.error_hidden);
        assert!(!vm.content_hidden);
        let content = vm.content.expect("content");
        assert_eq!(content.temperature, "22");
        assert_eq!(content.feels_like, "19°C");
    }

    #[tokio::test]
    async fn failure_shows_message_and_widget_stays_usable() {
        let mut view = WeatherView::new(ScriptedSource::with(vec![
            Err(WeatherError::request_failed(Some("city not found".into()))),
            Ok(sample("广州")),
        ]));

        view.search("Nowhere").await;
        let vm = view.render(today());
        assert!(vm.loading_hidden && vm.content_hidden);
        assert_eq!(vm.error_text, "city not found");

        view.search("广州").await;
        let vm = view.render(today());
        assert!(vm.error_hidden);
        assert!(!vm.content_hidden);
    }

    #[tokio::test]
    async fn failure_without_backend_text_uses_default_message() {
        let mut view =
            WeatherView::new(ScriptedSource::with(vec![Err(WeatherError::request_failed(None))]));

        view.search("x").await;

        assert_eq!(view.state(), &UiState::Error(crate::error::DEFAULT_FAILURE_MESSAGE.into()));
    }

    #[test]
    fn loading_replaces_previous_error() {
        let mut view = WeatherView::new(ScriptedSource::default());
        let ticket = view.begin_search("a").unwrap();
        view.complete(ticket, Err(WeatherError::request_failed(None)));

        let _ticket = view.begin_search("b").unwrap();
        let vm = view.render(today());

        assert!(!vm.loading_hidden);
        assert!(vm.error_hidden && vm.content_hidden);
        assert!(vm.content.is_none());
    }

    #[test]
    fn superseded_search_result_is_discarded() {
        let mut view = WeatherView::new(ScriptedSource::default());

        let first = view.begin_search("上海").unwrap();
        let second = view.begin_search("深圳").unwrap();

        assert!(view.complete(second, Ok(sample("深圳"))));
        assert!(!view.complete(first, Err(WeatherError::request_failed(None))));

        match view.state() {
            UiState::Content(data) => assert_eq!(data.location.name, "深圳"),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn superseded_result_does_not_clear_loading() {
        let mut view = WeatherView::new(ScriptedSource::default());

        let first = view.begin_search("上海").unwrap();
        let _second = view.begin_search("深圳").unwrap();
        view.complete(first, Ok(sample("上海")));

        assert_eq!(view.state(), &UiState::Loading);
    }

    #[test]
    fn every_content_render_restarts_icon_animation() {
        let mut view = WeatherView::new(ScriptedSource::default());

        let ticket = view.begin_search("a").unwrap();
        view.complete(ticket, Ok(sample("a")));
        let first = view.render(today()).content.unwrap().icon_animation_key;

        let ticket = view.begin_search("a").unwrap();
        view.complete(ticket, Ok(sample("a")));
        let second = view.render(today()).content.unwrap().icon_animation_key;

        assert_ne!(first, second);
    }
}
