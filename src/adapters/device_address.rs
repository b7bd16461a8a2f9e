//! Alexa Device Address API: the caller's registered postal address.

use crate::adapters::http_client;
use crate::config::SkillConfig;
use crate::domain::model::Address;
use crate::domain::ports::DeviceAddressProvider;
use crate::utils::error::{BicingError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAddressDto {
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_or_region: Option<String>,
    #[serde(default)]
    pub district_or_county: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl DeviceAddressDto {
    /// Only the first line is kept: lines 2 and 3 hold floor and door ("3r 2a"), which
    /// free-text geocoders do not match.
    pub fn into_address(self) -> Result<Address> {
        let line1 = non_blank(self.address_line1).ok_or(BicingError::AddressNotSet)?;

        Ok(Address::new(
            line1,
            non_blank(self.postal_code).unwrap_or_default(),
            non_blank(self.city).unwrap_or_default(),
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct AlexaDeviceAddressClient {
    http: reqwest::Client,
}

impl AlexaDeviceAddressClient {
    pub fn new(config: &SkillConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config)?,
        })
    }
}

impl DeviceAddressProvider for AlexaDeviceAddressClient {
    async fn full_address(
        &self,
        api_endpoint: &str,
        device_id: &str,
        access_token: &str,
    ) -> Result<Address> {
        let url = format!(
            "{}/v1/devices/{}/settings/address",
            api_endpoint.trim_end_matches('/'),
            device_id
        );

        tracing::debug!("Requesting device address for {}", device_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| BicingError::DeviceAddressUnavailable {
                status: None,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(BicingError::PermissionDenied);
        }
        if status == reqwest::StatusCode::NO_CONTENT {
            return Err(BicingError::AddressNotSet);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BicingError::DeviceAddressUnavailable {
                status: Some(status.as_u16()),
                reason: body,
            });
        }

        let dto: DeviceAddressDto =
            response
                .json()
                .await
                .map_err(|e| BicingError::DeviceAddressUnavailable {
                    status: Some(status.as_u16()),
                    reason: format!("unparseable response: {}", e),
                })?;

        tracing::info!("Device address API response retrieved");
        dto.into_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> AlexaDeviceAddressClient {
        AlexaDeviceAddressClient::new(&SkillConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_full_address() {
        let server = MockServer::start();
        let address_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/devices/amzn1.ask.device.XYZ/settings/address")
                .header("authorization", "Bearer token-123");
            then.status(200).json_body(serde_json::json!({
                "addressLine1": "Carrer de Mallorca 401",
                "addressLine2": "3r 2a",
                "addressLine3": null,
                "city": "Barcelona",
                "stateOrRegion": "CT",
                "postalCode": "08013",
                "countryCode": "ES"
            }));
        });

        let address = client()
            .full_address(&server.base_url(), "amzn1.ask.device.XYZ", "token-123")
            .await
            .unwrap();

        address_mock.assert();
        assert_eq!(
            address,
            Address::new("Carrer de Mallorca 401", "08013", "Barcelona")
        );
        assert_eq!(address.to_string(), "Carrer de Mallorca 401, 08013 Barcelona");
    }

    #[tokio::test]
    async fn test_no_content_is_address_not_set() {
        let server = MockServer::start();
        let address_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/devices/dev/settings/address");
            then.status(204);
        });

        let result = client()
            .full_address(&server.base_url(), "dev", "token")
            .await;

        address_mock.assert();
        assert!(matches!(result, Err(BicingError::AddressNotSet)));
    }

    #[tokio::test]
    async fn test_forbidden_is_permission_denied() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/devices/dev/settings/address");
            then.status(403)
                .json_body(serde_json::json!({"type": "FORBIDDEN", "message": "The authentication token is not valid."}));
        });

        let result = client()
            .full_address(&server.base_url(), "dev", "token")
            .await;

        assert!(matches!(result, Err(BicingError::PermissionDenied)));
    }

    #[tokio::test]
    async fn test_missing_address_line_is_address_not_set() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/devices/dev/settings/address");
            then.status(200).json_body(serde_json::json!({
                "addressLine1": null,
                "stateOrRegion": null,
                "postalCode": "08013"
            }));
        });

        let result = client()
            .full_address(&server.base_url(), "dev", "token")
            .await;

        assert!(matches!(result, Err(BicingError::AddressNotSet)));
    }

    #[tokio::test]
    async fn test_server_error_is_device_address_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/devices/dev/settings/address");
            then.status(500).body("internal");
        });

        let result = client()
            .full_address(&server.base_url(), "dev", "token")
            .await;

        match result {
            Err(BicingError::DeviceAddressUnavailable { status, reason }) => {
                assert_eq!(status, Some(500));
                assert_eq!(reason, "internal");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let dto = DeviceAddressDto {
            address_line1: Some(" Via Augusta 2 ".to_string()),
            address_line2: Some("  ".to_string()),
            postal_code: Some("08006".to_string()),
            ..DeviceAddressDto::default()
        };

        assert_eq!(
            dto.into_address().unwrap(),
            Address::new("Via Augusta 2", "08006", "")
        );
    }
}
