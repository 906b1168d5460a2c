//! Core library for the `weather` lookup widget.
//!
//! This crate defines:
//! - Location queries (city name or coordinates) and weather snapshots
//! - The OpenWeather client, reverse geocoding and one-shot geolocation
//! - Response classification into user-facing messages
//! - Widget state with a request-sequence guard
//!
//! It is used by `weather-cli`, but can also back other front ends.

pub mod classify;
pub mod config;
pub mod error;
pub mod geocode;
pub mod geolocation;
pub mod icon;
pub mod model;
pub mod provider;
pub mod query;
pub mod state;
pub mod widget;

pub use classify::classify;
pub use config::Config;
pub use error::WeatherError;
pub use geocode::{NominatimGeocoder, ReverseGeocoder};
pub use geolocation::{FixedPosition, Geolocator, IpGeolocator, Unsupported};
pub use icon::{Icon, icon_for};
pub use model::{Coordinates, LocationQuery, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use state::{Action, RequestId, View, WidgetState};
pub use widget::WeatherWidget;
