//! Client for the GBFS v2 `station_information` and `station_status` feeds.

use crate::adapters::http_client;
use crate::config::SkillConfig;
use crate::domain::model::{AvailabilityCount, StationRecord, StationStatus};
use crate::domain::ports::StationFeed;
use crate::utils::error::{BicingError, Result};
use serde::{Deserialize, Deserializer};

const INFORMATION_FEED: &str = "station_information";
const STATUS_FEED: &str = "station_status";

/// Common GBFS wrapper around every feed payload.
#[derive(Debug, Deserialize)]
pub struct GbfsResponse<T> {
    #[serde(default)]
    pub last_updated: Option<i64>,
    #[serde(default)]
    pub ttl: Option<u64>,
    pub data: StationList<T>,
}

#[derive(Debug, Deserialize)]
pub struct StationList<T> {
    pub stations: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationDto {
    #[serde(deserialize_with = "station_id_as_string")]
    pub station_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl From<StationInformationDto> for StationRecord {
    fn from(dto: StationInformationDto) -> Self {
        let address = dto
            .address
            .filter(|a| !a.trim().is_empty())
            .or(dto.name)
            .unwrap_or_else(|| dto.station_id.clone());
        StationRecord::new(dto.station_id, address, dto.lat, dto.lon)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusDto {
    #[serde(deserialize_with = "station_id_as_string")]
    pub station_id: String,
    #[serde(default)]
    pub num_bikes_available_types: BikeTypesDto,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BikeTypesDto {
    #[serde(default)]
    pub mechanical: u32,
    #[serde(default)]
    pub ebike: u32,
}

impl From<StationStatusDto> for StationStatus {
    fn from(dto: StationStatusDto) -> Self {
        StationStatus {
            station_id: dto.station_id,
            counts: AvailabilityCount {
                mechanical: dto.num_bikes_available_types.mechanical,
                ebike: dto.num_bikes_available_types.ebike,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStationId {
    Text(String),
    Number(serde_json::Number),
}

/// Bicing publishes numeric ids; GBFS says strings. Both end up as the same string.
fn station_id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawStationId::deserialize(deserializer)? {
        RawStationId::Text(id) => id,
        RawStationId::Number(id) => id.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
    information_url: String,
    status_url: String,
}

impl GbfsClient {
    pub fn new(config: &SkillConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config)?,
            information_url: config.station_information_url.clone(),
            status_url: config.station_status_url.clone(),
        })
    }

    async fn fetch_body(&self, feed: &str, url: &str) -> Result<String> {
        let unavailable = |reason: String| BicingError::FeedUnavailable {
            feed: feed.to_string(),
            reason,
        };

        tracing::debug!("Making {} request to: {}", feed, url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        tracing::debug!("{} response status: {}", feed, status);
        if !status.is_success() {
            return Err(unavailable(format!("HTTP status {}", status)));
        }

        response.text().await.map_err(|e| unavailable(e.to_string()))
    }
}

fn log_freshness<T>(feed: &str, response: &GbfsResponse<T>) {
    let updated = response
        .last_updated
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|ts| ts.to_rfc3339());
    tracing::debug!(
        "{} feed: {} stations, last_updated={:?}, ttl={:?}",
        feed,
        response.data.stations.len(),
        updated,
        response.ttl
    );
}

impl StationFeed for GbfsClient {
    async fn fetch_station_information(&self) -> Result<Vec<StationRecord>> {
        let body = self
            .fetch_body(INFORMATION_FEED, &self.information_url)
            .await?;

        let response: GbfsResponse<StationInformationDto> = serde_json::from_str(&body)
            .map_err(|e| BicingError::NoStationsAvailable {
                reason: format!("unparseable {} feed: {}", INFORMATION_FEED, e),
            })?;
        log_freshness(INFORMATION_FEED, &response);

        Ok(response
            .data
            .stations
            .into_iter()
            .map(StationRecord::from)
            .collect())
    }

    async fn fetch_station_status(&self) -> Result<Vec<StationStatus>> {
        let body = self.fetch_body(STATUS_FEED, &self.status_url).await?;

        let response: GbfsResponse<StationStatusDto> =
            serde_json::from_str(&body).map_err(|e| BicingError::FeedUnavailable {
                feed: STATUS_FEED.to_string(),
                reason: format!("unparseable payload: {}", e),
            })?;
        log_freshness(STATUS_FEED, &response);

        Ok(response
            .data
            .stations
            .into_iter()
            .map(StationStatus::from)
            .collect())
    }
}
