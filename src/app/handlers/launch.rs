use crate::app::speech;
use crate::domain::model::SpeechResponse;

/// 開啟技能時的問候，保持 session 等待下一句
pub fn handle() -> SpeechResponse {
    SpeechResponse::ask(speech::WELCOME)
}
