//! Voice platform request/response envelopes.
//!
//! Only the fields the skill reads are modelled; everything else in the
//! envelope is ignored on deserialization.

use crate::domain::model::{DeviceContext, RequestKind, SkillEvent, SpeechResponse};
use crate::utils::error::{Result, SkillError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const ENVELOPE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub version: Option<String>,
    pub session: Option<Session>,
    pub context: Option<Context>,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: Option<String>,
    pub new: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    pub device: Option<Device>,
    pub api_endpoint: Option<String>,
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    pub locale: Option<String>,
    pub intent: Option<Intent>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
}

// timestamp 只用於日誌，格式不對就當作沒有
fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|ts| ts.with_timezone(&Utc)))
}

impl RequestEnvelope {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| SkillError::EnvelopeError {
            message: e.to_string(),
        })
    }

    fn device_context(&self) -> Option<DeviceContext> {
        let system = self.context.as_ref()?.system.as_ref()?;
        Some(DeviceContext {
            device_id: system.device.as_ref()?.device_id.clone()?,
            api_endpoint: system.api_endpoint.clone()?,
            api_access_token: system.api_access_token.clone()?,
        })
    }

    pub fn into_event(self) -> SkillEvent {
        let device = self.device_context();
        let request = self.request;

        let kind = match request.request_type.as_str() {
            "LaunchRequest" => RequestKind::Launch,
            "IntentRequest" => match request.intent {
                Some(intent) => RequestKind::Intent(intent.name),
                None => RequestKind::Other(request.request_type),
            },
            "SessionEndedRequest" => RequestKind::SessionEnded(request.reason),
            _ => RequestKind::Other(request.request_type),
        };

        SkillEvent {
            kind,
            request_id: request.request_id,
            device,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: String) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl From<SpeechResponse> for ResponseEnvelope {
    fn from(speech: SpeechResponse) -> Self {
        // 沒有語音內容時（例如 session 已結束）不帶 shouldEndSession
        let should_end_session = speech
            .speech
            .as_ref()
            .map(|_| !speech.keep_session_open);

        ResponseEnvelope {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: speech.speech.map(OutputSpeech::plain_text),
                reprompt: speech.reprompt.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain_text(text),
                }),
                should_end_session,
            },
        }
    }
}

impl ResponseEnvelope {
    pub fn speech_text(&self) -> Option<&str> {
        self.response.output_speech.as_ref().map(|s| s.text.as_str())
    }
}
