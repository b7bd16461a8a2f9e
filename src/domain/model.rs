use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean earth radius (IUGG), in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A postal address as registered on the caller's device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_line: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    pub fn new(
        address_line: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            address_line: address_line.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.postal_code.trim().is_empty() {
            write!(f, "{}, {}", self.address_line, self.city)
        } else {
            write!(f, "{}, {} {}", self.address_line, self.postal_code, self.city)
        }
    }
}

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and inside WGS84 latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Haversine distance to `other`, in kilometres.
    pub fn great_circle_km(&self, other: &Coordinates) -> f64 {
        let source_lat = self.latitude.to_radians();
        let dest_lat = other.latitude.to_radians();
        let d_lat = dest_lat - source_lat;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + source_lat.cos() * dest_lat.cos() * (d_lon * 0.5).sin().powi(2);
        // Rounding can push `a` a hair past 1.0 for antipodal points. `clamp` keeps NaN.
        let c = 2.0 * a.sqrt().clamp(0.0, 1.0).asin();

        c * EARTH_RADIUS_KM
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_id: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationRecord {
    pub fn new(
        station_id: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A station paired with its distance to some target. Only lives for the duration of a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationDistance<'a> {
    pub station: &'a StationRecord,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCount {
    pub mechanical: u32,
    pub ebike: u32,
}

/// One entry of the station-status feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationStatus {
    pub station_id: String,
    pub counts: AvailabilityCount,
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationAvailability {
    pub station: StationRecord,
    pub distance_km: f64,
    pub counts: AvailabilityCount,
}
