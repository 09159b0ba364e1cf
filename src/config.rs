use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::str::FromStr;

/// Env var naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "REVIEW_FEED_CONFIG";

/// Marker left in the default queue URL until a real one is configured.
pub const QUEUE_URL_PLACEHOLDER: &str = "YOUR_ACCOUNT_ID";

/// Shape of the batch payload returned by the extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// `{message, extracted_contents}`
    Contents,
    /// `{message, prompts}` with the review prompt filled in
    Prompts,
}

impl FromStr for OutputMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contents" => Ok(OutputMode::Contents),
            "prompts" => Ok(OutputMode::Prompts),
            _ => Err(()),
        }
    }
}

/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Destination queue for the producer
    pub queue_url: String,
    /// Timeout for the public blog fetch
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    // --- Document service ---
    pub docs_api_base_url: String,
    pub docs_scope: String,
    /// Raw service-account JSON descriptor
    pub google_credentials: Option<String>,
    pub output_mode: OutputMode,
    /// Show debug logs
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_url: format!(
                "https://sqs.us-east-1.amazonaws.com/{}/process_extract_url",
                QUEUE_URL_PLACEHOLDER
            ),
            fetch_timeout_secs: 15,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            docs_api_base_url: "https://docs.googleapis.com/v1".to_string(),
            docs_scope: "https://www.googleapis.com/auth/documents.readonly".to_string(),
            google_credentials: None,
            output_mode: OutputMode::Contents,
            verbose_logging: false,
        }
    }
}

/// Optional overrides read from the TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    queue_url: Option<String>,
    fetch_timeout_secs: Option<u64>,
    user_agent: Option<String>,
    docs_api_base_url: Option<String>,
    docs_scope: Option<String>,
    output_mode: Option<OutputMode>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// Defaults, then the TOML file named by `REVIEW_FEED_CONFIG`, then env vars.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| AppError::file_read_failed(&path, e))?;
            config.apply_toml(&path, &content)?;
        }
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults overridden by env vars only.
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    fn apply_toml(&mut self, path: &str, content: &str) -> AppResult<()> {
        let file: FileConfig =
            toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.to_string(),
                source,
            })?;

        if let Some(v) = file.queue_url {
            self.queue_url = v;
        }
        if let Some(v) = file.fetch_timeout_secs {
            self.fetch_timeout_secs = v;
        }
        if let Some(v) = file.user_agent {
            self.user_agent = v;
        }
        if let Some(v) = file.docs_api_base_url {
            self.docs_api_base_url = v;
        }
        if let Some(v) = file.docs_scope {
            self.docs_scope = v;
        }
        if let Some(v) = file.output_mode {
            self.output_mode = v;
        }
        if let Some(v) = file.verbose_logging {
            self.verbose_logging = v;
        }
        Ok(())
    }

    fn apply_env(&mut self) -> AppResult<()> {
        if let Ok(v) = std::env::var("QUEUE_URL") {
            self.queue_url = v;
        }
        if let Some(v) = parse_env("FETCH_TIMEOUT_SECS", "integer")? {
            self.fetch_timeout_secs = v;
        }
        if let Ok(v) = std::env::var("USER_AGENT") {
            self.user_agent = v;
        }
        if let Ok(v) = std::env::var("DOCS_API_BASE_URL") {
            self.docs_api_base_url = v;
        }
        if let Ok(v) = std::env::var("DOCS_SCOPE") {
            self.docs_scope = v;
        }
        self.google_credentials = std::env::var("GOOGLE_CREDENTIALS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or(self.google_credentials.take());
        if let Some(v) = parse_env("OUTPUT_MODE", "output mode (contents|prompts)")? {
            self.output_mode = v;
        }
        if let Some(v) = parse_env("VERBOSE_LOGGING", "bool")? {
            self.verbose_logging = v;
        }
        Ok(())
    }

    /// Whether the queue URL still holds the shipped placeholder.
    pub fn queue_configured(&self) -> bool {
        !self.queue_url.trim().is_empty() && !self.queue_url.contains(QUEUE_URL_PLACEHOLDER)
    }
}

fn parse_env<T: FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_is_placeholder() {
        let config = Config::default();
        assert!(!config.queue_configured());
        assert_eq!(config.fetch_timeout_secs, 15);
        assert_eq!(config.output_mode, OutputMode::Contents);
    }

    #[test]
    fn test_toml_overlay() {
        let mut config = Config::default();
        config
            .apply_toml(
                "review_feed.toml",
                r#"
                queue_url = "https://sqs.eu-west-1.amazonaws.com/123456789012/urls"
                fetch_timeout_secs = 30
                output_mode = "prompts"
                "#,
            )
            .unwrap();

        assert!(config.queue_configured());
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.output_mode, OutputMode::Prompts);
        assert_eq!(config.docs_api_base_url, "https://docs.googleapis.com/v1");
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let mut config = Config::default();
        let err = config
            .apply_toml("broken.toml", "fetch_timeout_secs = \"soon\"")
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::TomlParseFailed { .. })
        ));
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("Prompts".parse::<OutputMode>(), Ok(OutputMode::Prompts));
        assert_eq!(" contents ".parse::<OutputMode>(), Ok(OutputMode::Contents));
        assert!("markdown".parse::<OutputMode>().is_err());
    }
}
