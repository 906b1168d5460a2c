//! One-shot device position sources.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{WeatherError, config::DEFAULT_GEOLOCATION_URL, model::Coordinates};

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    /// Current position, resolved once.
    async fn current_position(&self) -> Result<Coordinates, WeatherError>;
}

/// A position supplied up front, e.g. from command-line flags.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl Geolocator for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, WeatherError> {
        Ok(self.0)
    }
}

/// No location capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

#[async_trait]
impl Geolocator for Unsupported {
    async fn current_position(&self) -> Result<Coordinates, WeatherError> {
        Err(WeatherError::GeolocationUnavailable)
    }
}

/// Approximate position from the public IP address (ip-api.com).
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_GEOLOCATION_URL)
    }
}

impl IpGeolocator {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn lookup(&self) -> anyhow::Result<IpApiResponse> {
        let url = format!("{}/json", self.base_url);

        self.http
            .get(&url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .context("Failed to send IP geolocation request")?
            .error_for_status()
            .context("IP geolocation request was rejected")?
            .json::<IpApiResponse>()
            .await
            .context("Failed to parse IP geolocation JSON")
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates, WeatherError> {
        let body = self
            .lookup()
            .await
            .map_err(|e| WeatherError::GeolocationDenied(format!("{e:#}")))?;

        match (body.status.as_str(), body.lat, body.lon) {
            ("success", Some(lat), Some(lon)) => {
                tracing::debug!(lat, lon, "resolved position from IP address");
                Ok(Coordinates::new(lat, lon))
            }
            _ => Err(WeatherError::GeolocationDenied(
                body.message
                    .unwrap_or_else(|| format!("lookup returned status {:?}", body.status)),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fixed_position_is_returned_as_is() {
        let coords = Coordinates::new(51.5, -0.12);
        assert_eq!(FixedPosition(coords).current_position().await.unwrap(), coords);
    }

    #[tokio::test]
    async fn unsupported_reports_unavailable() {
        let err = Unsupported.current_position().await.unwrap_err();
        assert!(matches!(err, WeatherError::GeolocationUnavailable));
    }

    #[tokio::test]
    async fn ip_lookup_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success", "lat": 52.37, "lon": 4.89
            })))
            .mount(&mock_server)
            .await;

        let locator = IpGeolocator::with_base_url(&mock_server.uri());
        let coords = locator.current_position().await.unwrap();

        assert_eq!(coords, Coordinates::new(52.37, 4.89));
    }

    #[tokio::test]
    async fn ip_lookup_fail_status_is_denied() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "fail", "message": "private range"
            })))
            .mount(&mock_server)
            .await;

        let locator = IpGeolocator::with_base_url(&mock_server.uri());
        let err = locator.current_position().await.unwrap_err();

        match err {
            WeatherError::GeolocationDenied(detail) => assert_eq!(detail, "private range"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn ip_lookup_http_error_is_denied() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let locator = IpGeolocator::with_base_url(&mock_server.uri());
        let err = locator.current_position().await.unwrap_err();

        assert!(matches!(err, WeatherError::GeolocationDenied(_)));
        assert_eq!(err.user_message(), "Unable to retrieve your location.");
    }
}
