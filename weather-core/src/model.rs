use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::{Icon, icon_for};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// The resolved input for exactly one weather request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates(Coordinates),
}

impl LocationQuery {
    /// Pick a query when both forms might be available. Coordinates win.
    pub fn prefer(coordinates: Option<Coordinates>, city: Option<&str>) -> Option<Self> {
        if let Some(coords) = coordinates {
            return Some(LocationQuery::Coordinates(coords));
        }

        city.map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| LocationQuery::City(name.to_string()))
    }

    /// Query-string parameters identifying the location: `q`, or `lat` + `lon`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            LocationQuery::City(name) => vec![("q", name.clone())],
            LocationQuery::Coordinates(c) => vec![
                ("lat", c.latitude.to_string()),
                ("lon", c.longitude.to_string()),
            ],
        }
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationQuery::City(name) => f.write_str(name),
            LocationQuery::Coordinates(c) => write!(f, "{}, {}", c.latitude, c.longitude),
        }
    }
}

/// Weather for one place, as reported by a successful provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Place name as the provider spells it, not necessarily the query text.
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    /// Shown with a km/h unit exactly as the provider reports it.
    pub wind_speed_kmh: f64,
    /// Provider condition label, e.g. "Clouds".
    pub condition: String,
    pub observation_time: Option<DateTime<Utc>>,
}

impl WeatherSnapshot {
    pub fn icon(&self) -> Icon {
        icon_for(&self.condition)
    }

    /// Nearest whole degree; exact halves round up, so -2.5 shows as -2.
    pub fn temperature_label(&self) -> String {
        format!("{}°c", (self.temperature_c + 0.5).floor() as i64)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_pct)
    }

    pub fn wind_label(&self) -> String {
        format!("{}km/h", self.wind_speed_kmh)
    }
}
