use crate::config::{OutputFormat, DEFAULT_BOUND};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TripleError};
use crate::utils::validation::{validate_output_filename, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Falls back to the CLI default when omitted.
    pub bound: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub dir: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub profile: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TripleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TripleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRIPLE_BOUND})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = &self.output.dir {
            validate_path("output.dir", dir)?;
        }
        if let Some(filename) = &self.output.filename {
            validate_output_filename("output.filename", filename, self.output.format)?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn bound(&self) -> i64 {
        self.search.bound.unwrap_or(DEFAULT_BOUND)
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn output_dir(&self) -> Option<&str> {
        self.output.dir.as_deref()
    }

    fn output_filename(&self) -> Option<&str> {
        self.output.filename.as_deref()
    }

    fn profile(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.profile)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[search]
bound = 250

[output]
format = "csv"
dir = "./test-output"
filename = "small.csv"

[monitoring]
enabled = true
profile = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bound(), 250);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.output_dir(), Some("./test-output"));
        assert_eq!(config.resolved_filename(), "small.csv");
        assert!(config.monitoring_enabled());
        assert!(config.profile());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_section_is_optional() {
        let config = TomlConfig::from_toml_str("[search]\nbound = 5\n").unwrap();
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.output_dir().is_none());
        assert_eq!(config.resolved_filename(), "triples.txt");
        assert!(!config.monitoring_enabled());
        assert!(!config.profile());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRIPLE_FINDER_TEST_DIR", "/tmp/triples");

        let toml_content = r#"
[search]
bound = 10

[output]
dir = "${TRIPLE_FINDER_TEST_DIR}"
filename = "${TRIPLE_FINDER_UNSET_VAR}.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_dir(), Some("/tmp/triples"));
        assert_eq!(
            config.output_filename(),
            Some("${TRIPLE_FINDER_UNSET_VAR}.txt")
        );

        std::env::remove_var("TRIPLE_FINDER_TEST_DIR");
    }

    #[test]
    fn test_missing_bound_uses_default() {
        let config = TomlConfig::from_toml_str("[search]\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.bound(), DEFAULT_BOUND);
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[search]\nbound = 5\n[output]\nformat = \"xml\"\n")
            .unwrap_err();
        assert!(matches!(
            err,
            TripleError::ConfigValidationError { ref field, .. } if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[search]\nbound = 42\n\n[output]\nformat = \"json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bound(), 42);
        assert_eq!(config.resolved_filename(), "triples.json");
    }
}
