use crate::config::{
    validate_provider, API_KEY_ENV, DEFAULT_GEOSEARCH_BASE_URL, DEFAULT_SEARCH_QUERY,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vet-finder")]
#[command(about = "Replay a voice-platform event through the Find Nearest Vet skill")]
pub struct CliConfig {
    #[arg(long, help = "Path to a request envelope JSON file")]
    pub event: PathBuf,

    #[arg(long, help = "TOML configuration file; overrides the geosearch flags")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_GEOSEARCH_BASE_URL)]
    pub geosearch_base_url: String,

    #[arg(long, help = "Geosearch API key (defaults to $MAPMYINDIA_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_SEARCH_QUERY)]
    pub query: String,

    #[arg(long, default_value = "5000")]
    pub radius: u32,

    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage around the invocation")]
    pub monitor: bool,

    #[arg(skip)]
    #[serde(skip)]
    resolved_api_key: String,
}

impl CliConfig {
    /// 命令列未提供金鑰時才讀取環境變數
    pub fn resolve_api_key(mut self) -> Self {
        self.resolved_api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .unwrap_or_default();
        self
    }
}

impl ConfigProvider for CliConfig {
    fn geosearch_base_url(&self) -> &str {
        &self.geosearch_base_url
    }

    fn geosearch_api_key(&self) -> &str {
        &self.resolved_api_key
    }

    fn search_query(&self) -> &str {
        &self.query
    }

    fn search_radius_meters(&self) -> u32 {
        self.radius
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.timeout
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["vet-finder", "--event", "launch.json"]);

        assert_eq!(config.event, PathBuf::from("launch.json"));
        assert_eq!(config.geosearch_base_url(), DEFAULT_GEOSEARCH_BASE_URL);
        assert_eq!(config.search_query(), "veterinary");
        assert_eq!(config.search_radius_meters(), 5000);
        assert!(config.config.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = CliConfig::parse_from([
            "vet-finder",
            "--event",
            "find_vet.json",
            "--api-key",
            "flag-key",
            "--radius",
            "1200",
        ])
        .resolve_api_key();

        assert_eq!(config.geosearch_api_key(), "flag-key");
        assert_eq!(config.search_radius_meters(), 1200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_radius_fails_validation() {
        let config =
            CliConfig::parse_from(["vet-finder", "--event", "e.json", "--radius", "0"]);
        assert!(config.validate().is_err());
    }
}
