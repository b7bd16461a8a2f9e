use crate::config::SkillConfig;
use crate::domain::model::Address;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hay-bicis")]
#[command(about = "Find the Bicing station closest to an address and its available bikes")]
pub struct CliConfig {
    #[arg(long, help = "Street and number, e.g. \"Carrer de Mallorca 401\"")]
    pub address_line: String,

    #[arg(long)]
    pub postal_code: String,

    #[arg(long, help = "TOML configuration file; flags below override it")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub geocoder_endpoint: Option<String>,

    #[arg(long)]
    pub station_information_url: Option<String>,

    #[arg(long)]
    pub station_status_url: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn skill_config(&self) -> Result<SkillConfig> {
        let mut config = match &self.config {
            Some(path) => SkillConfig::from_file(path)?,
            None => SkillConfig::default(),
        };

        if let Some(endpoint) = &self.geocoder_endpoint {
            config.geocoder_endpoint = endpoint.clone();
        }
        if let Some(url) = &self.station_information_url {
            config.station_information_url = url.clone();
        }
        if let Some(url) = &self.station_status_url {
            config.station_status_url = url.clone();
        }
        if let Some(city) = &self.city {
            config.city = city.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_seconds = timeout;
        }

        Ok(config)
    }

    pub fn address(&self, config: &SkillConfig) -> Address {
        Address::new(&self.address_line, &self.postal_code, &config.city)
    }
}
