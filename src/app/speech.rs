//! Everything the skill says out loud.

use crate::domain::model::StationAvailability;
use crate::utils::error::BicingError;

pub const LAUNCH: &str =
    "Hola, Hay Bicis activado. Puedes preguntarme si hay bicis disponibles.";
pub const HELP: &str =
    "Pregúntame si hay bicis y te diré cuántas quedan en la estación más cercana. Qué necesitas?";
pub const BYE: &str = "Adios!";
pub const GENERIC_FALLBACK: &str = "Perdona pero no te acabo de entender";
pub const NOTIFY_MISSING_PERMISSIONS: &str =
    "Por favor, activa el permiso de dirección en la app de Alexa.";
pub const NO_ADDRESS: &str =
    "Parece que no tienes una dirección configurada. Puedes añadirla desde la app de Alexa.";
pub const LOCATION_FAILURE: &str = "Ha habido un error con el servicio de dirección de Alexa.";
pub const GEOCODING_FAILURE: &str = "No he podido encontrar tu dirección en el mapa.";
pub const NO_STATIONS: &str = "Ahora mismo no tengo la lista de estaciones de Bicing.";
pub const STATION_NOT_FOUND: &str =
    "No encuentro el estado de la estación más cercana. Prueba otra vez en un momento.";
pub const FEED_UNAVAILABLE: &str = "El servicio de Bicing no responde ahora mismo.";

pub fn availability_sentence(availability: &StationAvailability) -> String {
    format!(
        "En la estación de {} hay {} bicis mecánicas y {} eléctricas.",
        availability.station.address, availability.counts.mechanical, availability.counts.ebike
    )
}

/// The fixed message for an error kind. Kinds without their own message get the fallback.
pub fn error_message(error: &BicingError) -> &'static str {
    match error {
        BicingError::GeocodingFailure { .. } => GEOCODING_FAILURE,
        BicingError::NoStationsAvailable { .. } => NO_STATIONS,
        BicingError::StationNotFound { .. } => STATION_NOT_FOUND,
        BicingError::FeedUnavailable { .. } => FEED_UNAVAILABLE,
        BicingError::PermissionDenied => NOTIFY_MISSING_PERMISSIONS,
        BicingError::AddressNotSet => NO_ADDRESS,
        BicingError::DeviceAddressUnavailable { .. } => LOCATION_FAILURE,
        _ => GENERIC_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AvailabilityCount, StationRecord};

    #[test]
    fn test_availability_sentence() {
        let availability = StationAvailability {
            station: StationRecord::new("244", "C/ Provença, 322", 41.396, 2.165),
            distance_km: 0.12,
            counts: AvailabilityCount {
                mechanical: 3,
                ebike: 5,
            },
        };

        assert_eq!(
            availability_sentence(&availability),
            "En la estación de C/ Provença, 322 hay 3 bicis mecánicas y 5 eléctricas."
        );
    }

    #[test]
    fn test_each_pipeline_error_has_its_own_message() {
        let messages = [
            error_message(&BicingError::GeocodingFailure {
                query: String::new(),
                reason: String::new(),
            }),
            error_message(&BicingError::NoStationsAvailable {
                reason: String::new(),
            }),
            error_message(&BicingError::StationNotFound {
                station_id: String::new(),
            }),
            error_message(&BicingError::FeedUnavailable {
                feed: String::new(),
                reason: String::new(),
            }),
        ];

        for (i, message) in messages.iter().enumerate() {
            assert_ne!(*message, GENERIC_FALLBACK);
            for other in &messages[i + 1..] {
                assert_ne!(message, other);
            }
        }
    }

    #[test]
    fn test_other_errors_fall_back_to_generic() {
        let error = BicingError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(error_message(&error), GENERIC_FALLBACK);
    }
}
