//! End-to-end widget tests against mock weather, geocoding and geolocation servers.

use weather_core::{Config, Icon, View, WeatherWidget};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let mut cfg = Config::default();
    cfg.set_api_key("test_key");
    cfg.endpoints.weather = server.uri();
    cfg.endpoints.geocode = server.uri();
    cfg.endpoints.geolocation = server.uri();
    cfg
}

fn paris_body() -> serde_json::Value {
    serde_json::json!({
        "weather": [{"main": "Clear"}],
        "main": {"temp": 18.4, "humidity": 55},
        "wind": {"speed": 12.3},
        "name": "Paris"
    })
}

#[tokio::test]
async fn search_paris_renders_expected_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::from_config(&config_for(&server)).unwrap();
    let snapshot = widget.search("Paris").await.snapshot().cloned().unwrap();

    assert_eq!(snapshot.temperature_label(), "18°c");
    assert_eq!(snapshot.humidity_label(), "55%");
    assert_eq!(snapshot.wind_label(), "12.3km/h");
    assert_eq!(snapshot.location_name, "Paris");
    assert_eq!(snapshot.icon(), Icon::Clear);
}

#[tokio::test]
async fn rain_and_unknown_conditions_pick_icons() {
    let server = MockServer::start().await;

    let mut rain = paris_body();
    rain["weather"][0]["main"] = "Rain".into();
    Mock::given(method("GET"))
        .and(query_param("q", "Bergen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rain))
        .mount(&server)
        .await;

    let mut storm = paris_body();
    storm["weather"][0]["main"] = "Thunderstorm".into();
    Mock::given(method("GET"))
        .and(query_param("q", "Darwin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(storm))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::from_config(&config_for(&server)).unwrap();

    let icon = widget.search("Bergen").await.snapshot().map(|s| s.icon());
    assert_eq!(icon, Some(Icon::Rain));

    let icon = widget.search("Darwin").await.snapshot().map(|s| s.icon());
    assert_eq!(icon, Some(Icon::Clear));
}

#[tokio::test]
async fn unknown_city_shows_location_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404", "message": "city not found"
        })))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::from_config(&config_for(&server)).unwrap();

    assert_eq!(
        widget.search("Nowhereville").await,
        &View::Error("Location not found".into())
    );
}

#[tokio::test]
async fn empty_search_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::from_config(&config_for(&server)).unwrap();

    assert_eq!(
        widget.search("").await,
        &View::Error("Please enter a city name.".into())
    );
}

#[tokio::test]
async fn locate_chains_position_label_and_weather() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success", "lat": 48.87, "lon": 2.33
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "48.87"))
        .and(query_param("lon", "2.33"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": {"neighbourhood": "Quartier de la Chaussée-d'Antin", "city": "Paris"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "48.87"))
        .and(query_param("lon", "2.33"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::from_config(&config_for(&server)).unwrap();

    assert!(widget.locate().await.snapshot().is_some());
    assert_eq!(widget.state().query_text(), "Quartier de la Chaussée-d'Antin");

    let requests = server.received_requests().await.unwrap();
    let weather_req = requests
        .iter()
        .find(|r| r.url.path() == "/data/2.5/weather")
        .unwrap();
    assert!(!weather_req.url.query_pairs().any(|(k, _)| k == "q"));
}

#[tokio::test]
async fn denied_geolocation_leaves_no_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail", "message": "reserved range"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::from_config(&config_for(&server)).unwrap();
    let view = widget.locate().await;

    assert_eq!(view.error(), Some("Unable to retrieve your location."));
    assert!(view.snapshot().is_none());
}
