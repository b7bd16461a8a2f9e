//! Nearest-station selection.
//!
//! A linear scan is plenty for a network of a few hundred docks. If the station set ever grows
//! by orders of magnitude this is where a spatial index would go.

use crate::core::{Coordinates, StationDistance, StationRecord};
use crate::utils::error::{BicingError, Result};

/// Distance from `target` to every station, in input order.
pub fn station_distances<'a>(
    target: &Coordinates,
    stations: &'a [StationRecord],
) -> impl Iterator<Item = StationDistance<'a>> + 'a {
    let target = *target;
    stations.iter().map(move |station| StationDistance {
        station,
        distance_km: target.great_circle_km(&station.coordinates()),
    })
}

/// The closest station and its distance.
///
/// Ties keep the earliest station in `stations`. Stations with non-finite or out-of-range
/// coordinates are skipped.
pub fn nearest_with_distance<'a>(
    target: &Coordinates,
    stations: &'a [StationRecord],
) -> Result<StationDistance<'a>> {
    if stations.is_empty() {
        return Err(BicingError::NoStationsAvailable {
            reason: "station list is empty".to_string(),
        });
    }

    let mut nearest: Option<StationDistance<'a>> = None;
    for candidate in station_distances(target, stations) {
        if !candidate.station.coordinates().is_valid() || !candidate.distance_km.is_finite() {
            tracing::warn!(
                "Skipping station {} with unusable coordinates ({}, {})",
                candidate.station.station_id,
                candidate.station.latitude,
                candidate.station.longitude
            );
            continue;
        }
        match nearest {
            Some(best) if best.distance_km <= candidate.distance_km => {}
            _ => nearest = Some(candidate),
        }
    }

    nearest.ok_or_else(|| BicingError::NoStationsAvailable {
        reason: format!("none of {} stations has usable coordinates", stations.len()),
    })
}

pub fn nearest_station<'a>(
    target: &Coordinates,
    stations: &'a [StationRecord],
) -> Result<&'a StationRecord> {
    nearest_with_distance(target, stations).map(|found| found.station)
}
