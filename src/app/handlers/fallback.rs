use crate::app::speech;
use crate::domain::model::{RequestKind, SpeechResponse};

/// 沒有對應處理器的請求不回錯誤給平台，改為提示可用的指令
pub fn handle(kind: &RequestKind) -> SpeechResponse {
    tracing::warn!("No handler for {:?}; answering with fallback prompt", kind);
    SpeechResponse::ask(speech::FALLBACK)
}

/// 平台通知 session 結束，不得再回語音
pub fn session_ended(reason: Option<&str>) -> SpeechResponse {
    tracing::info!("Session ended: {}", reason.unwrap_or("unspecified"));
    SpeechResponse::silent()
}
