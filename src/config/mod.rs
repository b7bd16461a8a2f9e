#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;

use crate::utils::error::{BicingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_STATION_INFORMATION_URL: &str =
    "https://api.bsmsa.eu/ext/api/bsm/gbfs/v2/en/station_information";
pub const DEFAULT_STATION_STATUS_URL: &str =
    "https://api.bsmsa.eu/ext/api/bsm/gbfs/v2/en/station_status";
pub const DEFAULT_CITY: &str = "Barcelona";
pub const DEFAULT_COUNTRY_CODE: &str = "es";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("hay-bicis/", env!("CARGO_PKG_VERSION"));

/// Everything a request needs to reach its upstreams. Built once at start-up and passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    pub geocoder_endpoint: String,
    pub station_information_url: String,
    pub station_status_url: String,
    /// The bike network only covers one city, so every geocoder query is pinned to it.
    pub city: String,
    pub country_code: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            geocoder_endpoint: DEFAULT_GEOCODER_ENDPOINT.to_string(),
            station_information_url: DEFAULT_STATION_INFORMATION_URL.to_string(),
            station_status_url: DEFAULT_STATION_STATUS_URL.to_string(),
            city: DEFAULT_CITY.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SkillConfig {
    /// Load from a TOML file. Keys left out keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BicingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Replaces `${VAR}` with the value of `VAR`; unset variables are left verbatim.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BicingError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for SkillConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("geocoder_endpoint", &self.geocoder_endpoint)?;
        validation::validate_url("station_information_url", &self.station_information_url)?;
        validation::validate_url("station_status_url", &self.station_status_url)?;
        validation::validate_non_empty_string("city", &self.city)?;
        validation::validate_country_code("country_code", &self.country_code)?;
        validation::validate_range(
            "request_timeout_seconds",
            self.request_timeout_seconds,
            1,
            60,
        )?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;

        tracing::debug!("Skill configuration validation passed");
        Ok(())
    }
}
