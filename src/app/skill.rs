use crate::app::alexa::{RequestEnvelope, ResponseEnvelope};
use crate::app::speech;
use crate::core::pipeline::AvailabilityPipeline;
use crate::core::{Address, DeviceAddressProvider, Geocoder, StationFeed};
use crate::utils::error::{BicingError, Result};

pub const AVAILABILITY_INTENT: &str = "HayBicis";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Every kind of inbound request the skill distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillRequest {
    Launch,
    Availability,
    Help,
    Cancel,
    SessionEnd,
    Unknown {
        request_type: String,
        intent: Option<String>,
    },
}

impl SkillRequest {
    pub fn classify(envelope: &RequestEnvelope) -> Self {
        match (envelope.request.request_type.as_str(), envelope.intent_name()) {
            ("LaunchRequest", _) => SkillRequest::Launch,
            ("SessionEndedRequest", _) => SkillRequest::SessionEnd,
            ("IntentRequest", Some(AVAILABILITY_INTENT)) => SkillRequest::Availability,
            ("IntentRequest", Some(HELP_INTENT)) => SkillRequest::Help,
            ("IntentRequest", Some(CANCEL_INTENT | STOP_INTENT)) => SkillRequest::Cancel,
            (request_type, intent) => SkillRequest::Unknown {
                request_type: request_type.to_string(),
                intent: intent.map(str::to_string),
            },
        }
    }
}

pub struct BikeSkill<G: Geocoder, F: StationFeed, D: DeviceAddressProvider> {
    pipeline: AvailabilityPipeline<G, F>,
    device_addresses: D,
}

impl<G: Geocoder, F: StationFeed, D: DeviceAddressProvider> BikeSkill<G, F, D> {
    pub fn new(pipeline: AvailabilityPipeline<G, F>, device_addresses: D) -> Self {
        Self {
            pipeline,
            device_addresses,
        }
    }

    pub async fn handle(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        tracing::debug!("Alexa request: {:?}", envelope.request);

        let request = SkillRequest::classify(envelope);
        tracing::info!("Handling {:?}", request);

        let response = match request {
            SkillRequest::Launch => ResponseEnvelope::speak(speech::LAUNCH).ask(speech::LAUNCH),
            SkillRequest::Availability => self.handle_availability(envelope).await,
            SkillRequest::Help => ResponseEnvelope::speak(speech::HELP).ask(speech::HELP),
            SkillRequest::Cancel => ResponseEnvelope::speak(speech::BYE).end_session(),
            SkillRequest::SessionEnd => ResponseEnvelope::empty(),
            SkillRequest::Unknown { .. } => {
                ResponseEnvelope::speak(speech::GENERIC_FALLBACK).ask(speech::GENERIC_FALLBACK)
            }
        };

        tracing::debug!("Alexa response: {:?}", response.response);
        response
    }

    async fn handle_availability(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let Some(access_token) = envelope.api_access_token() else {
            tracing::info!("No API access token, asking for permission");
            return permission_prompt();
        };

        match self.availability_for(envelope, access_token).await {
            Ok(sentence) => ResponseEnvelope::speak(sentence).end_session(),
            Err(BicingError::PermissionDenied) => {
                tracing::warn!("Device address permission denied");
                permission_prompt()
            }
            Err(e) => {
                tracing::warn!(
                    "Availability request failed: {} (category: {:?})",
                    e,
                    e.category()
                );
                ResponseEnvelope::speak(speech::error_message(&e)).end_session()
            }
        }
    }

    async fn availability_for(
        &self,
        envelope: &RequestEnvelope,
        access_token: &str,
    ) -> Result<String> {
        let address = self.device_address(envelope, access_token).await?;
        let availability = self.pipeline.run(&address).await?;
        Ok(speech::availability_sentence(&availability))
    }

    async fn device_address(
        &self,
        envelope: &RequestEnvelope,
        access_token: &str,
    ) -> Result<Address> {
        let (api_endpoint, device_id) = envelope
            .api_endpoint()
            .zip(envelope.device_id())
            .ok_or_else(|| BicingError::DeviceAddressUnavailable {
                status: None,
                reason: "request carries no API endpoint or device id".to_string(),
            })?;

        self.device_addresses
            .full_address(api_endpoint, device_id, access_token)
            .await
    }
}

fn permission_prompt() -> ResponseEnvelope {
    ResponseEnvelope::speak(speech::NOTIFY_MISSING_PERMISSIONS)
        .with_permissions_card()
        .end_session()
}
