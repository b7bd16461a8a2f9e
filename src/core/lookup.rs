use crate::core::{AvailabilityCount, StationFeed, StationStatus};
use crate::utils::error::{BicingError, Result};

/// First status entry whose identifier equals `station_id`, counts untouched.
pub fn find_availability(statuses: &[StationStatus], station_id: &str) -> Result<AvailabilityCount> {
    statuses
        .iter()
        .find(|status| status.station_id == station_id)
        .map(|status| status.counts)
        .ok_or_else(|| BicingError::StationNotFound {
            station_id: station_id.to_string(),
        })
}

/// Fetches the live status feed and extracts the counts for `station_id`.
pub async fn lookup_availability<F: StationFeed>(
    feed: &F,
    station_id: &str,
) -> Result<AvailabilityCount> {
    let statuses = feed.fetch_station_status().await?;
    tracing::debug!("Status feed returned {} stations", statuses.len());

    find_availability(&statuses, station_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(id: &str, mechanical: u32, ebike: u32) -> StationStatus {
        StationStatus {
            station_id: id.to_string(),
            counts: AvailabilityCount { mechanical, ebike },
        }
    }

    #[test]
    fn test_present_station_returns_its_counts() {
        let statuses = vec![status("B", 3, 5)];

        let counts = find_availability(&statuses, "B").unwrap();

        assert_eq!(
            counts,
            AvailabilityCount {
                mechanical: 3,
                ebike: 5
            }
        );
    }

    #[test]
    fn test_every_present_station_is_returned_unmodified() {
        let statuses: Vec<StationStatus> = (0..50)
            .map(|i| status(&format!("{}", i + 1), i, 50 - i))
            .collect();

        for expected in &statuses {
            let counts = find_availability(&statuses, &expected.station_id).unwrap();
            assert_eq!(counts, expected.counts);
        }
    }

    #[test]
    fn test_absent_station_fails() {
        let statuses = vec![status("B", 3, 5)];

        let result = find_availability(&statuses, "Z");

        match result {
            Err(BicingError::StationNotFound { station_id }) => assert_eq!(station_id, "Z"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_identifier_match_is_exact() {
        let statuses = vec![status("24", 1, 1), status("244", 7, 2)];

        assert_eq!(find_availability(&statuses, "244").unwrap().mechanical, 7);
        assert!(find_availability(&statuses, "2").is_err());
        assert!(find_availability(&statuses, "244 ").is_err());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let statuses = vec![status("B", 1, 2), status("B", 9, 9)];

        assert_eq!(
            find_availability(&statuses, "B").unwrap(),
            AvailabilityCount {
                mechanical: 1,
                ebike: 2
            }
        );
    }
}
