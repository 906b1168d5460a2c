//! Reverse geocoding: convert coordinates to a human-readable place label.
//! Uses Nominatim (OpenStreetMap), which needs no API key.

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};
use serde::Deserialize;
use std::fmt::Debug;

use crate::{WeatherError, config::DEFAULT_GEOCODE_URL, model::Coordinates, provider::truncate_body};

const AGENT: &str = concat!("weather-widget/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait ReverseGeocoder: Send + Sync + Debug {
    /// A display label for the place at `coords`.
    async fn place_label(&self, coords: Coordinates) -> Result<String, WeatherError>;
}

#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub village: Option<String>,
    pub town: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

/// Most specific non-empty place name: suburb > neighbourhood > village > town > city > county.
pub fn pick_label(addr: &NominatimAddress) -> Option<&str> {
    [
        &addr.suburb,
        &addr.neighbourhood,
        &addr.village,
        &addr.town,
        &addr.city,
        &addr.county,
    ]
    .into_iter()
    .filter_map(|field| field.as_deref())
    .map(str::trim)
    .find(|s| !s.is_empty())
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    http: Client,
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_GEOCODE_URL)
    }
}

impl NominatimGeocoder {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn place_label(&self, coords: Coordinates) -> Result<String, WeatherError> {
        let url = format!("{}/reverse", self.base_url);

        let res = self
            .http
            .get(&url)
            .header(USER_AGENT, AGENT)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ])
            .send()
            .await
            .context("Failed to send reverse geocoding request")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read reverse geocoding response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Reverse geocoding failed with status {}: {}",
                status,
                truncate_body(&body)
            )
            .into());
        }

        let parsed: NominatimResponse =
            serde_json::from_str(&body).context("Failed to parse reverse geocoding JSON")?;

        let label = parsed
            .address
            .as_ref()
            .and_then(pick_label)
            .map(str::to_string)
            .ok_or(WeatherError::NoPlaceLabel {
                latitude: coords.latitude,
                longitude: coords.longitude,
            })?;

        tracing::info!("Reverse geocoded to: {}", label);
        Ok(label)
    }
}
