use serde::{Deserialize, Serialize};

/// 觸發技能的請求種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Launch,
    Intent(String),
    SessionEnded(Option<String>),
    Other(String),
}

/// 呼叫平台 API 所需的裝置資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceContext {
    pub device_id: String,
    pub api_endpoint: String,
    pub api_access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEvent {
    pub kind: RequestKind,
    pub request_id: Option<String>,
    pub device: Option<DeviceContext>,
}

impl SkillEvent {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            request_id: None,
            device: None,
        }
    }

    pub fn with_device(mut self, device: DeviceContext) -> Self {
        self.device = Some(device);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetRecord {
    pub name: String,
    pub address: String,
}

/// 單次調用的唯一輸出
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeechResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub keep_session_open: bool,
}

impl SpeechResponse {
    /// 說完即結束對話
    pub fn tell(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            reprompt: None,
            keep_session_open: false,
        }
    }

    /// 說完後等待使用者下一句，並以相同內容作為 reprompt
    pub fn ask(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            speech: Some(text.clone()),
            reprompt: Some(text),
            keep_session_open: true,
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }
}
