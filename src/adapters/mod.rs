// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod device_address;
pub mod gbfs;
pub mod geocoding;

use crate::config::SkillConfig;
use crate::utils::error::Result;

/// Shared client settings: the configured timeout and an identifying user agent.
pub(crate) fn http_client(config: &SkillConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
