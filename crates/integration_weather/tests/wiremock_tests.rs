//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering both endpoints, status-code mapping, and query parameters.

use domain::value_objects::UnitSystem;
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/weather` response for testing
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 73.8553, "lat": 18.5196 },
        "weather": [
            { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
        ],
        "main": {
            "temp": 28.3,
            "feels_like": 27.6,
            "temp_min": 28.3,
            "temp_max": 28.3,
            "pressure": 1012,
            "humidity": 51
        },
        "wind": { "speed": 4.1, "deg": 270 },
        "name": "Pune",
        "cod": 200
    })
}

/// Sample `/forecast` response spanning two days with one midday entry each
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            {
                "dt": 1705294800,
                "main": { "temp": 22.0, "humidity": 60 },
                "weather": [
                    { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
                ],
                "dt_txt": "2024-01-15 09:00:00"
            },
            {
                "dt": 1705305600,
                "main": { "temp": 29.5, "humidity": 45 },
                "weather": [
                    { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
                ],
                "dt_txt": "2024-01-15 12:00:00"
            },
            {
                "dt": 1705381200,
                "main": { "temp": 21.0, "humidity": 70 },
                "weather": [
                    { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
                ],
                "dt_txt": "2024-01-16 09:00:00"
            },
            {
                "dt": 1705392000,
                "main": { "temp": 26.8, "humidity": 55 },
                "weather": [
                    { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
                ],
                "dt_txt": "2024-01-16 12:00:00"
            }
        ],
        "city": { "name": "Pune", "country": "IN" }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: "test-api-key".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

/// Mount a mock for the given endpoint with the given response
async fn setup_mock(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_current_success() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Pune", UnitSystem::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let current = result.unwrap();
    assert_eq!(current.location_name, "Pune");
    assert!((current.temperature.value() - 28.3).abs() < 0.01);
    assert_eq!(current.temperature.unit(), UnitSystem::Metric);
    assert_eq!(current.humidity.value(), 51);
    assert!((current.wind_speed - 4.1).abs() < 0.01);
    assert_eq!(current.condition, "Clouds");
    assert_eq!(
        current.icon_url(),
        "https://openweathermap.org/img/wn/04d@2x.png"
    );
}

#[tokio::test]
async fn test_get_forecast_success() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Pune", UnitSystem::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let samples = result.unwrap();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0].timestamp, "2024-01-15 09:00:00");
    assert!(samples[1].is_midday());
    assert_eq!(samples[2].condition, "Rain");
    // Provider order is preserved; grouping happens downstream.
    assert_eq!(samples[3].timestamp, "2024-01-16 12:00:00");
}

#[tokio::test]
async fn test_forecast_feeds_grouper() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let samples = client
        .get_forecast("Pune", UnitSystem::Metric)
        .await
        .expect("forecast should succeed");

    let days = domain::group_by_day(&samples).expect("grouping should succeed");
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, "2024-01-15");
    assert!((days[0].sample.temperature.value() - 29.5).abs() < 0.01);
    assert_eq!(days[1].date, "2024-01-16");
    assert!((days[1].sample.temperature.value() - 26.8).abs() < 0.01);
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_unknown_city_maps_to_city_not_found() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "weather",
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404", "message": "city not found"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Atlantis", UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherError::CityNotFound(ref city)) if city == "Atlantis"),
        "Expected CityNotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rejected_key_maps_to_invalid_api_key() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "weather",
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401, "message": "Invalid API key"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Pune", UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherError::InvalidApiKey)),
        "Expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "forecast",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Pune", UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "weather",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Pune", UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "weather",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Pune", UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_empty_weather_array_is_parse_error() {
    let mock_server = MockServer::start().await;
    let mut body = sample_current_response();
    body["weather"] = serde_json::json!([]);
    setup_mock(
        &mock_server,
        "weather",
        ResponseTemplate::new(200).set_body_json(body),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Pune", UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Pune,IN"))
        .and(query_param("appid", "test-api-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Pune", UnitSystem::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_imperial_units_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Pune", UnitSystem::Imperial).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let samples = result.unwrap();
    assert_eq!(samples[0].temperature.unit(), UnitSystem::Imperial);
}
