//! Forward geocoding against a Nominatim-compatible search endpoint.

use crate::adapters::http_client;
use crate::config::SkillConfig;
use crate::domain::model::Coordinates;
use crate::domain::ports::Geocoder;
use crate::utils::error::{BicingError, Result};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: Degrees,
    lon: Degrees,
    #[serde(default)]
    display_name: Option<String>,
}

/// Nominatim returns coordinates as strings; some compatible servers use numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Degrees {
    Text(String),
    Number(f64),
}

impl Degrees {
    fn value(&self) -> Option<f64> {
        match self {
            Degrees::Text(raw) => raw.trim().parse().ok(),
            Degrees::Number(value) => Some(*value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: reqwest::Client,
    endpoint: String,
    country_code: String,
}

impl NominatimGeocoder {
    pub fn new(config: &SkillConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config)?,
            endpoint: config.geocoder_endpoint.clone(),
            country_code: config.country_code.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates> {
        let failure = |reason: String| BicingError::GeocodingFailure {
            query: query.to_string(),
            reason,
        };

        tracing::debug!("Making geocoder request to: {}", self.endpoint);
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", "1"),
                ("countrycodes", self.country_code.as_str()),
            ])
            .send()
            .await
            .map_err(|e| failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure(format!("HTTP status {}", status)));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| failure(format!("unparseable response: {}", e)))?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| failure("no results".to_string()))?;

        match (place.lat.value(), place.lon.value()) {
            (Some(latitude), Some(longitude)) => {
                tracing::debug!(
                    "Geocoder matched {:?}",
                    place.display_name.as_deref().unwrap_or(query)
                );
                Ok(Coordinates::new(latitude, longitude))
            }
            _ => Err(failure(format!(
                "unparseable coordinates ({:?}, {:?})",
                place.lat, place.lon
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn geocoder_for(server: &MockServer) -> NominatimGeocoder {
        let config = SkillConfig {
            geocoder_endpoint: server.url("/search"),
            ..SkillConfig::default()
        };
        NominatimGeocoder::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_geocode_first_result() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "Carrer de Pelai 1, 08001 Barcelona")
                .query_param("format", "jsonv2")
                .query_param("limit", "1")
                .query_param("countrycodes", "es");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"place_id": 1, "lat": "41.3853", "lon": "2.1679", "display_name": "Carrer de Pelai, 1, Barcelona"}
                ]));
        });

        let coordinates = geocoder_for(&server)
            .geocode("Carrer de Pelai 1, 08001 Barcelona")
            .await
            .unwrap();

        search_mock.assert();
        assert_eq!(coordinates, Coordinates::new(41.3853, 2.1679));
    }

    #[tokio::test]
    async fn test_numeric_coordinates_are_accepted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .json_body(serde_json::json!([{"lat": 41.3853, "lon": 2.1679}]));
        });

        let coordinates = geocoder_for(&server).geocode("Pelai 1").await.unwrap();

        assert_eq!(coordinates, Coordinates::new(41.3853, 2.1679));
    }

    #[tokio::test]
    async fn test_empty_result_is_geocoding_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        });

        let result = geocoder_for(&server).geocode("Nowhere 0").await;

        match result {
            Err(BicingError::GeocodingFailure { query, reason }) => {
                assert_eq!(query, "Nowhere 0");
                assert_eq!(reason, "no results");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_provider_error_is_geocoding_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(429);
        });

        let result = geocoder_for(&server).geocode("Pelai 1").await;

        assert!(matches!(result, Err(BicingError::GeocodingFailure { .. })));
    }

    #[tokio::test]
    async fn test_garbage_coordinates_are_geocoding_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .json_body(serde_json::json!([{"lat": "north", "lon": "2.1"}]));
        });

        let result = geocoder_for(&server).geocode("Pelai 1").await;

        assert!(matches!(result, Err(BicingError::GeocodingFailure { .. })));
    }
}
