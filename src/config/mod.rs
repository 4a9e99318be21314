#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url,
};

pub const DEFAULT_GEOSEARCH_BASE_URL: &str = "https://apis.mapmyindia.com/advancedmaps/v1";
pub const DEFAULT_SEARCH_QUERY: &str = "veterinary";
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5000;
pub const API_KEY_ENV: &str = "MAPMYINDIA_API_KEY";

/// 各種設定來源共用的檢查
pub(crate) fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("geosearch_base_url", config.geosearch_base_url())?;
    validate_non_empty_string("search_query", config.search_query())?;

    let radius = u64::from(config.search_radius_meters());
    validate_positive_number("search_radius_meters", radius, 1)?;
    validate_range("search_radius_meters", radius, 1, 100_000)?;

    if let Some(timeout) = config.request_timeout_seconds() {
        validate_range("request_timeout_seconds", timeout, 1, 60)?;
    }

    // 缺少金鑰不視為錯誤，查詢失敗時由地點搜尋回退處理
    if config.geosearch_api_key().is_empty() {
        tracing::warn!("⚠️ {} is not set; place lookups will fail", API_KEY_ENV);
    }

    Ok(())
}
