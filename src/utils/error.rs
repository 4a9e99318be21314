use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{service} returned HTTP {status}")]
    UpstreamStatus { service: String, status: u16 },

    #[error("Location unavailable: {reason}")]
    MissingCoordinates { reason: String },

    #[error("Invalid request envelope: {message}")]
    EnvelopeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SkillError::HttpError(e) if e.is_decode() => ErrorCategory::Data,
            SkillError::HttpError(_) => ErrorCategory::Network,
            SkillError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            SkillError::SerializationError(_)
            | SkillError::MissingCoordinates { .. }
            | SkillError::EnvelopeError { .. } => ErrorCategory::Data,
            SkillError::ConfigError { .. }
            | SkillError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SkillError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        // 使用者未授權位置屬於預期情況
        if self.is_missing_location() {
            return ErrorSeverity::Low;
        }

        match self.category() {
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 地址查詢是否因缺少座標而失敗（而非傳輸錯誤）
    pub fn is_missing_location(&self) -> bool {
        matches!(self, SkillError::MissingCoordinates { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SkillError::HttpError(e) if e.is_timeout() => {
                "The upstream service did not answer in time".to_string()
            }
            SkillError::HttpError(_) => "Could not reach an upstream service".to_string(),
            SkillError::UpstreamStatus { service, status } => {
                format!("{} rejected the request (HTTP {})", service, status)
            }
            SkillError::MissingCoordinates { .. } => {
                "The device did not share a location".to_string()
            }
            SkillError::SerializationError(_) | SkillError::EnvelopeError { .. } => {
                "The event or response could not be understood".to_string()
            }
            SkillError::ConfigError { message } => format!("Configuration problem: {}", message),
            SkillError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SkillError::IoError(e) => format!("File access failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the configured endpoints",
            ErrorCategory::Upstream => {
                "Verify the access token or MAPMYINDIA_API_KEY and the upstream service status"
            }
            ErrorCategory::Data => "Inspect the event JSON or upstream response body",
            ErrorCategory::Configuration => {
                "Review the environment variables or the TOML configuration file"
            }
            ErrorCategory::Io => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;
