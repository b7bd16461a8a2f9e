use crate::domain::model::{Address, Coordinates, StationRecord, StationStatus};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a free-text address query to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Coordinates>;
}

/// The two independent bike-share feeds. Each call fetches fresh data.
pub trait StationFeed: Send + Sync {
    fn fetch_station_information(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StationRecord>>> + Send;
    fn fetch_station_status(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StationStatus>>> + Send;
}

/// The voice platform's permission-gated view of where the caller's device is registered.
pub trait DeviceAddressProvider: Send + Sync {
    fn full_address(
        &self,
        api_endpoint: &str,
        device_id: &str,
        access_token: &str,
    ) -> impl std::future::Future<Output = Result<Address>> + Send;
}
