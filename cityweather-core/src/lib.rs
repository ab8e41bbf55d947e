//! Core library for the `cityweather` widget.
//!
//! This crate defines:
//! - The WMO weather code catalog
//! - The client for the `/api/weather` backend
//! - The UI state machine and the view model it renders to
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but any other front end can drive
//! [`WeatherView`] and draw its [`ViewModel`].

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

pub use catalog::WeatherCodeEntry;
pub use client::{WeatherClient, WeatherSource};
pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherResponse;
pub use render::{ContentView, ForecastRow, ViewModel};
pub use view::{SearchTicket, UiState, WeatherView};
