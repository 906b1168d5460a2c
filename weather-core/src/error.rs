use thiserror::Error;

/// Every way a lookup can fail before it reaches the screen.
///
/// The `Display` output is meant for logs. Use [`WeatherError::user_message`]
/// for anything a user sees.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("empty location query")]
    EmptyQuery,

    #[error("location not found by weather provider")]
    NotFound,

    #[error("no geolocation source available")]
    GeolocationUnavailable,

    #[error("geolocation failed: {0}")]
    GeolocationDenied(String),

    #[error("reverse geocoding returned no usable place label for ({latitude}, {longitude})")]
    NoPlaceLabel { latitude: f64, longitude: f64 },

    #[error("weather fetch failed: {0:#}")]
    Fetch(#[from] anyhow::Error),
}

impl WeatherError {
    /// Short message shown in place of the weather card.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::EmptyQuery => "Please enter a city name.",
            WeatherError::NotFound => "Location not found",
            WeatherError::GeolocationUnavailable => "Geolocation is not supported by this browser.",
            WeatherError::GeolocationDenied(_) => "Unable to retrieve your location.",
            WeatherError::NoPlaceLabel { .. } => "Unable to determine suburb from your location.",
            WeatherError::Fetch(_) => "An error occurred while fetching the data.",
        }
    }
}
