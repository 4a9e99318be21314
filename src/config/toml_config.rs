use crate::config::{
    validate_provider, DEFAULT_GEOSEARCH_BASE_URL, DEFAULT_SEARCH_QUERY,
    DEFAULT_SEARCH_RADIUS_METERS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub skill: Option<SkillSection>,
    pub geosearch: GeosearchSection,
    pub http: Option<HttpSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeosearchSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub query: Option<String>,
    pub radius_meters: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSection {
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SkillError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAPMYINDIA_API_KEY})，未設定者保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkillError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn skill_name(&self) -> Option<&str> {
        self.skill.as_ref().map(|s| s.name.as_str())
    }
}

impl ConfigProvider for TomlConfig {
    fn geosearch_base_url(&self) -> &str {
        self.geosearch
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_GEOSEARCH_BASE_URL)
    }

    fn geosearch_api_key(&self) -> &str {
        match self.geosearch.api_key.as_deref() {
            // 未被替換的佔位符等同於沒有金鑰
            Some(key) if key.starts_with("${") => "",
            Some(key) => key,
            None => "",
        }
    }

    fn search_query(&self) -> &str {
        self.geosearch.query.as_deref().unwrap_or(DEFAULT_SEARCH_QUERY)
    }

    fn search_radius_meters(&self) -> u32 {
        self.geosearch
            .radius_meters
            .unwrap_or(DEFAULT_SEARCH_RADIUS_METERS)
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.http.as_ref().and_then(|h| h.timeout_seconds)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[skill]
name = "find-nearest-vet"

[geosearch]
base_url = "https://geo.example.com/v1"
api_key = "abc123"
radius_meters = 3000

[http]
timeout_seconds = 8
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.skill_name(), Some("find-nearest-vet"));
        assert_eq!(config.geosearch_base_url(), "https://geo.example.com/v1");
        assert_eq!(config.geosearch_api_key(), "abc123");
        assert_eq!(config.search_query(), "veterinary");
        assert_eq!(config.search_radius_meters(), 3000);
        assert_eq!(config.request_timeout_seconds(), Some(8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[geosearch]\n").unwrap();

        assert_eq!(config.geosearch_base_url(), DEFAULT_GEOSEARCH_BASE_URL);
        assert_eq!(config.search_radius_meters(), 5000);
        assert_eq!(config.request_timeout_seconds(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VET_FINDER_TEST_GEO_KEY", "from-env");

        let toml_content = r#"
[geosearch]
api_key = "${VET_FINDER_TEST_GEO_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.geosearch_api_key(), "from-env");

        std::env::remove_var("VET_FINDER_TEST_GEO_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_means_no_key() {
        let toml_content = r#"
[geosearch]
api_key = "${VET_FINDER_TEST_UNSET_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.geosearch_api_key(), "");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[geosearch]
base_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_query_is_invalid_value() {
        let config = TomlConfig::from_toml_str("[geosearch]\nquery = \"   \"\n").unwrap();
        match config.validate() {
            Err(SkillError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "search_query")
            }
            other => panic!("expected invalid search_query, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[geosearch\nradius_meters = ").unwrap_err();
        assert!(matches!(err, SkillError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[skill]
name = "file-test"

[geosearch]
query = "animal hospital"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.skill_name(), Some("file-test"));
        assert_eq!(config.search_query(), "animal hospital");
    }
}
