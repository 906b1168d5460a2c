use crate::{
    Config, WeatherError, WeatherSnapshot,
    classify::classify,
    geocode::{NominatimGeocoder, ReverseGeocoder},
    geolocation::{Geolocator, IpGeolocator},
    provider::{WeatherProvider, provider_from_config},
    query::{resolve_position, resolve_text},
    state::{Action, View, WidgetState},
};

/// The weather lookup component: a query field plus one result area.
///
/// `search` and `locate` borrow the widget mutably for the whole lookup, so at
/// most one request is in flight and each one settles as the latest.
#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    geocoder: Box<dyn ReverseGeocoder>,
    geolocator: Box<dyn Geolocator>,
    state: WidgetState,
}

impl WeatherWidget {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        geocoder: Box<dyn ReverseGeocoder>,
        geolocator: Box<dyn Geolocator>,
    ) -> Self {
        Self {
            provider,
            geocoder,
            geolocator,
            state: WidgetState::new(),
        }
    }

    /// Widget wired to the configured endpoints, locating by IP address.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            provider_from_config(config)?,
            Box::new(NominatimGeocoder::with_base_url(&config.endpoints.geocode)),
            Box::new(IpGeolocator::with_base_url(&config.endpoints.geolocation)),
        ))
    }

    /// Replace the position source, e.g. with coordinates given on the command line.
    pub fn with_geolocator(mut self, geolocator: Box<dyn Geolocator>) -> Self {
        self.geolocator = geolocator;
        self
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn view(&self) -> &View {
        self.state.view()
    }

    /// Text search for `input`.
    pub async fn search(&mut self, input: &str) -> &View {
        self.state.apply(Action::QueryEdited(input.to_string()));
        let request = self.state.begin_request();

        let outcome = match resolve_text(input) {
            Ok(query) => self.provider.current(&query).await,
            Err(err) => Err(err),
        };

        self.state.apply(Action::Settled { request, view: classify(outcome) });
        self.state.view()
    }

    /// Look up the weather at the device's current position.
    ///
    /// On success the query field is filled with the reverse-geocoded label,
    /// while the weather request itself goes out by coordinates.
    pub async fn locate(&mut self) -> &View {
        let request = self.state.begin_request();
        let outcome = self.locate_inner().await;

        self.state.apply(Action::Settled { request, view: classify(outcome) });
        self.state.view()
    }

    async fn locate_inner(&mut self) -> Result<WeatherSnapshot, WeatherError> {
        let resolved = resolve_position(self.geolocator.as_ref(), self.geocoder.as_ref()).await?;
        self.state.apply(Action::QueryEdited(resolved.label.clone()));

        self.provider.current(&resolved.query()).await
    }
}
