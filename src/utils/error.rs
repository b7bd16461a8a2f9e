use thiserror::Error;

#[derive(Error, Debug)]
pub enum BicingError {
    #[error("Geocoding failed for '{query}': {reason}")]
    GeocodingFailure { query: String, reason: String },

    #[error("No stations available: {reason}")]
    NoStationsAvailable { reason: String },

    #[error("Station {station_id} not found in the status feed")]
    StationNotFound { station_id: String },

    #[error("Feed {feed} unavailable: {reason}")]
    FeedUnavailable { feed: String, reason: String },

    #[error("Device address permission has not been granted")]
    PermissionDenied,

    #[error("Device has no address set")]
    AddressNotSet,

    #[error("Device address service error: {reason}")]
    DeviceAddressUnavailable { status: Option<u16>, reason: String },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Geocoding,
    Stations,
    Feed,
    DeviceAddress,
    Configuration,
    Internal,
}

impl BicingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BicingError::GeocodingFailure { .. } => ErrorCategory::Geocoding,
            BicingError::NoStationsAvailable { .. } | BicingError::StationNotFound { .. } => {
                ErrorCategory::Stations
            }
            BicingError::FeedUnavailable { .. } => ErrorCategory::Feed,
            BicingError::PermissionDenied
            | BicingError::AddressNotSet
            | BicingError::DeviceAddressUnavailable { .. } => ErrorCategory::DeviceAddress,
            BicingError::ConfigError { .. } | BicingError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BicingError::HttpError(_) | BicingError::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// Operator-facing hint; the spoken text lives in `app::speech`.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BicingError::GeocodingFailure { .. } => {
                "Check the address and that the geocoder endpoint is reachable"
            }
            BicingError::NoStationsAvailable { .. } => {
                "Check the station_information feed returns a non-empty station list"
            }
            BicingError::StationNotFound { .. } => {
                "The feeds are out of sync; retry once the station_status feed refreshes"
            }
            BicingError::FeedUnavailable { .. } => "Check network access to the GBFS feeds",
            BicingError::PermissionDenied => {
                "Grant the device address permission in the Alexa app"
            }
            BicingError::AddressNotSet => "Set the device address in the Alexa app",
            BicingError::DeviceAddressUnavailable { .. } => {
                "The Device Address API failed; retry later"
            }
            BicingError::ConfigError { .. } | BicingError::InvalidConfigValueError { .. } => {
                "Fix the configuration file, flags or environment variables"
            }
            BicingError::HttpError(_) => "Check TLS and proxy settings of the HTTP client",
            BicingError::IoError(_) => "Check the file path and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, BicingError>;
