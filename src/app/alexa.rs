//! The subset of the Alexa request/response JSON this skill reads and writes.

use serde::{Deserialize, Serialize};

/// Permission the Device Address API checks for the full address.
pub const FULL_ADDRESS_PERMISSION: &str = "read::alexa:device:all:address";

#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: Request,
}

impl RequestEnvelope {
    fn system(&self) -> Option<&SystemState> {
        self.context.as_ref().map(|context| &context.system)
    }

    pub fn api_access_token(&self) -> Option<&str> {
        self.system()
            .and_then(|system| system.api_access_token.as_deref())
            .filter(|token| !token.is_empty())
    }

    pub fn api_endpoint(&self) -> Option<&str> {
        self.system().and_then(|system| system.api_endpoint.as_deref())
    }

    pub fn device_id(&self) -> Option<&str> {
        self.system()
            .and_then(|system| system.device.as_ref())
            .map(|device| device.device_id.as_str())
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|intent| intent.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub api_access_token: Option<String>,
    #[serde(default)]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: Response,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    AskForPermissionsConsent { permissions: Vec<String> },
}

impl ResponseEnvelope {
    pub fn empty() -> Self {
        Self {
            version: "1.0".to_string(),
            response: Response::default(),
        }
    }

    pub fn speak(text: impl Into<String>) -> Self {
        let mut envelope = Self::empty();
        envelope.response.output_speech = Some(OutputSpeech::PlainText { text: text.into() });
        envelope
    }

    /// Keeps the session open and asks again with `text`.
    pub fn ask(mut self, text: impl Into<String>) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::PlainText { text: text.into() },
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn end_session(mut self) -> Self {
        self.response.should_end_session = Some(true);
        self
    }

    pub fn with_permissions_card(mut self) -> Self {
        self.response.card = Some(Card::AskForPermissionsConsent {
            permissions: vec![FULL_ADDRESS_PERMISSION.to_string()],
        });
        self
    }

    pub fn speech_text(&self) -> Option<&str> {
        match &self.response.output_speech {
            Some(OutputSpeech::PlainText { text }) => Some(text.as_str()),
            None => None,
        }
    }
}
