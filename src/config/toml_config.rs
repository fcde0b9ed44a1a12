use crate::domain::model::PriceFilter;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔內容，所有區段皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    /// 列表頁預設的價格上限："all" 或數字
    pub default_max_price: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HBNB_API_BASE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_max_price(&self) -> Result<Option<PriceFilter>> {
        match self.listing.default_max_price.as_deref() {
            None => Ok(None),
            Some(value) => PriceFilter::parse(value).map(Some).ok_or_else(|| {
                ClientError::InvalidConfigValueError {
                    field: "listing.default_max_price".to_string(),
                    value: value.to_string(),
                    reason: "Expected \"all\" or a non-negative number".to_string(),
                }
            }),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            crate::utils::validation::validate_url("api.base_url", base_url)?;
        }
        if let Some(path) = &self.session.path {
            crate::utils::validation::validate_path("session.path", path)?;
        }
        self.default_max_price()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://hbnb.example.com/api/v1"

[session]
path = "/tmp/hbnb/session.toml"

[listing]
default_max_price = "100"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://hbnb.example.com/api/v1")
        );
        assert_eq!(config.session.path.as_deref(), Some("/tmp/hbnb/session.toml"));
        assert_eq!(
            config.default_max_price().unwrap(),
            Some(PriceFilter::Max(100.0))
        );
        assert_eq!(config.logging.verbose, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.base_url.is_none());
        assert_eq!(config.default_max_price().unwrap(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HBNB_TEST_API_HOST", "https://staging.example.com");

        let toml_content = r#"
[api]
base_url = "${HBNB_TEST_API_HOST}/api/v1"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://staging.example.com/api/v1")
        );

        std::env::remove_var("HBNB_TEST_API_HOST");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[api]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        let config =
            TomlConfig::from_toml_str("[listing]\ndefault_max_price = \"cheap\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[session]\npath = \"./my-session.toml\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.session.path.as_deref(), Some("./my-session.toml"));
    }
}
