use crate::config::{
    validate_provider, API_KEY_ENV, DEFAULT_GEOSEARCH_BASE_URL, DEFAULT_SEARCH_QUERY,
    DEFAULT_SEARCH_RADIUS_METERS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::Validate;
use std::env;

/// Lambda 冷啟動時從環境變數讀取一次的設定
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub geosearch_base_url: String,
    pub geosearch_api_key: String,
    pub search_query: String,
    pub search_radius_meters: u32,
    pub request_timeout_seconds: Option<u64>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 以任意查表函式建立設定，方便測試時不動到行程環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let search_radius_meters = match lookup("SEARCH_RADIUS_METERS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SkillError::InvalidConfigValueError {
                    field: "SEARCH_RADIUS_METERS".to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of meters".to_string(),
                })?,
            None => DEFAULT_SEARCH_RADIUS_METERS,
        };

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| {
                SkillError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            geosearch_base_url: lookup("GEOSEARCH_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEOSEARCH_BASE_URL.to_string()),
            geosearch_api_key: lookup(API_KEY_ENV).unwrap_or_default(),
            search_query: lookup("SEARCH_QUERY")
                .unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string()),
            search_radius_meters,
            request_timeout_seconds,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn geosearch_base_url(&self) -> &str {
        &self.geosearch_base_url
    }

    fn geosearch_api_key(&self) -> &str {
        &self.geosearch_api_key
    }

    fn search_query(&self) -> &str {
        &self.search_query
    }

    fn search_radius_meters(&self) -> u32 {
        self.search_radius_meters
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.request_timeout_seconds
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
