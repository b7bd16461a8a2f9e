use crate::config::SkillConfig;
use crate::core::finder;
use crate::core::lookup;
use crate::core::resolver::AddressResolver;
use crate::core::{Address, Geocoder, StationAvailability, StationFeed};
use crate::utils::error::Result;

/// Address → nearest station → live counts, one request at a time.
pub struct AvailabilityPipeline<G: Geocoder, F: StationFeed> {
    resolver: AddressResolver<G>,
    feed: F,
}

impl<G: Geocoder, F: StationFeed> AvailabilityPipeline<G, F> {
    pub fn new(geocoder: G, feed: F, config: &SkillConfig) -> Self {
        Self {
            resolver: AddressResolver::new(geocoder, config.city.clone()),
            feed,
        }
    }

    pub async fn run(&self, address: &Address) -> Result<StationAvailability> {
        tracing::info!("Resolving device address");
        let target = self.resolver.resolve(address).await?;

        tracing::info!("Fetching station information");
        let stations = self.feed.fetch_station_information().await?;
        tracing::debug!("Information feed returned {} stations", stations.len());

        let nearest = finder::nearest_with_distance(&target, &stations)?;
        tracing::info!(
            "Nearest station is {} ({}) at {:.3} km",
            nearest.station.station_id,
            nearest.station.address,
            nearest.distance_km
        );

        tracing::info!("Fetching station status");
        let counts = lookup::lookup_availability(&self.feed, &nearest.station.station_id).await?;
        tracing::info!(
            "Station {} has {} mechanical and {} electric bikes",
            nearest.station.station_id,
            counts.mechanical,
            counts.ebike
        );

        Ok(StationAvailability {
            station: nearest.station.clone(),
            distance_km: nearest.distance_km,
            counts,
        })
    }
}
