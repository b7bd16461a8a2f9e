use crate::core::{Address, Coordinates, Geocoder};
use crate::utils::error::{BicingError, Result};

/// Turns a device address into coordinates through a [`Geocoder`].
pub struct AddressResolver<G: Geocoder> {
    geocoder: G,
    city: String,
}

impl<G: Geocoder> AddressResolver<G> {
    pub fn new(geocoder: G, city: impl Into<String>) -> Self {
        Self {
            geocoder,
            city: city.into(),
        }
    }

    /// The query sent to the geocoder. The configured city replaces whatever the device reports.
    pub fn query_for(&self, address: &Address) -> String {
        let pinned = Address::new(
            address.address_line.trim(),
            address.postal_code.trim(),
            self.city.as_str(),
        );
        pinned.to_string()
    }

    pub async fn resolve(&self, address: &Address) -> Result<Coordinates> {
        let query = self.query_for(address);

        if address.address_line.trim().is_empty() {
            return Err(BicingError::GeocodingFailure {
                query,
                reason: "address line is empty".to_string(),
            });
        }

        tracing::debug!("Geocoding '{}'", query);
        let coordinates = self
            .geocoder
            .geocode(&query)
            .await
            .map_err(|e| match e {
                BicingError::GeocodingFailure { .. } => e,
                other => BicingError::GeocodingFailure {
                    query: query.clone(),
                    reason: other.to_string(),
                },
            })?;

        if !coordinates.is_valid() {
            return Err(BicingError::GeocodingFailure {
                query,
                reason: format!(
                    "provider returned an invalid position ({}, {})",
                    coordinates.latitude, coordinates.longitude
                ),
            });
        }

        tracing::debug!(
            "Resolved '{}' to ({}, {})",
            query,
            coordinates.latitude,
            coordinates.longitude
        );
        Ok(coordinates)
    }
}
