use crate::config::SkillConfig;
use crate::utils::error::{BicingError, Result};
use std::env;

impl SkillConfig {
    /// Lambda configuration comes from the function's environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SkillConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SkillConfig::default();

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| BicingError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "Must be a whole number of seconds".to_string(),
                })?,
            None => defaults.request_timeout_seconds,
        };

        Ok(Self {
            geocoder_endpoint: lookup("GEOCODER_ENDPOINT").unwrap_or(defaults.geocoder_endpoint),
            station_information_url: lookup("STATION_INFORMATION_URL")
                .unwrap_or(defaults.station_information_url),
            station_status_url: lookup("STATION_STATUS_URL")
                .unwrap_or(defaults.station_status_url),
            city: lookup("BICING_CITY").unwrap_or(defaults.city),
            country_code: lookup("BICING_COUNTRY_CODE").unwrap_or(defaults.country_code),
            request_timeout_seconds,
            user_agent: lookup("GEOCODER_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}
