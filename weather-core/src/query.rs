//! Turning user input into a [`LocationQuery`].

use crate::{
    WeatherError,
    geocode::ReverseGeocoder,
    geolocation::Geolocator,
    model::{Coordinates, LocationQuery},
};

/// Outcome of a successful "use my location" resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPosition {
    pub coordinates: Coordinates,
    /// Display-only; the weather request uses the coordinates.
    pub label: String,
}

impl ResolvedPosition {
    pub fn query(&self) -> LocationQuery {
        LocationQuery::Coordinates(self.coordinates)
    }
}

/// Text-search mode. Rejects empty or whitespace-only input without touching the network.
pub fn resolve_text(input: &str) -> Result<LocationQuery, WeatherError> {
    LocationQuery::prefer(None, Some(input)).ok_or(WeatherError::EmptyQuery)
}

/// Geolocation mode: one position fix, then a reverse lookup for the label.
pub async fn resolve_position(
    geolocator: &dyn Geolocator,
    geocoder: &dyn ReverseGeocoder,
) -> Result<ResolvedPosition, WeatherError> {
    let coordinates = geolocator.current_position().await?;
    let label = geocoder.place_label(coordinates).await?;

    Ok(ResolvedPosition { coordinates, label })
}
