use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Base URL of the hosted REST data store, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub content_api_url: Option<String>,

    #[serde(default)]
    pub content_api_key: Option<String>,

    #[serde(default = "default_content_timeout")]
    pub content_timeout_secs: u64,

    #[serde(default = "default_reveal_step")]
    pub reveal_step_ms: u64,

    /// Optional JSON file replacing the built-in project catalog.
    #[serde(default)]
    pub projects_file: Option<String>,

    /// Optional JSON file replacing the built-in experience timeline.
    #[serde(default)]
    pub experience_file: Option<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_content_timeout() -> u64 {
    10
}
fn default_reveal_step() -> u64 {
    150
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            log_format: LogFormat::default(),
            content_api_url: None,
            content_api_key: None,
            content_timeout_secs: default_content_timeout(),
            reveal_step_ms: default_reveal_step(),
            projects_file: None,
            experience_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;
        config.content_api_url = non_blank(config.content_api_url);
        config.content_api_key = non_blank(config.content_api_key);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(raw) = &self.content_api_url {
            match url::Url::parse(raw) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(_) => errors.push("CONTENT_API_URL must use http or https"),
                Err(_) => errors.push("CONTENT_API_URL is not a valid URL"),
            }
        }
        if self.content_timeout_secs == 0 {
            errors.push("CONTENT_TIMEOUT_SECS must be greater than zero");
        }
        if self.worker_count == 0 {
            errors.push("WORKER_COUNT must be greater than zero");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Settings for the remote content store, or `None` when either the URL
    /// or the key is missing. A missing store disables content, it never
    /// aborts startup.
    pub fn content_store(&self) -> Option<ContentStoreSettings> {
        let base_url = self.content_api_url.as_ref()?;
        let api_key = self.content_api_key.as_ref()?;

        Some(ContentStoreSettings {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Zeroizing::new(api_key.clone()),
            timeout: Duration::from_secs(self.content_timeout_secs),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Connection details handed to the REST client at construction.
#[derive(Clone)]
pub struct ContentStoreSettings {
    pub base_url: String,
    pub api_key: Zeroizing<String>,
    pub timeout: Duration,
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &'static str;
}

impl Redact for Option<String> {
    fn redact(&self) -> &'static str {
        match self {
            Some(v) if !v.is_empty() => "[REDACTED]",
            _ => "[MISSING]",
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_format", &self.log_format)
            .field("content_api_url", &self.content_api_url)
            .field("content_api_key", &self.content_api_key.redact())
            .field("content_timeout_secs", &self.content_timeout_secs)
            .field("reveal_step_ms", &self.reveal_step_ms)
            .field("projects_file", &self.projects_file)
            .field("experience_file", &self.experience_file)
            .finish()
    }
}

impl fmt::Debug for ContentStoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStoreSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AppConfig {
        AppConfig {
            content_api_url: Some("https://store.example.com/".into()),
            content_api_key: Some("anon-key".into()),
            ..Default::default()
        }
    }

    #[test]
    fn content_store_is_disabled_without_url_or_key() {
        let mut config = configured();
        config.content_api_key = None;
        assert!(config.content_store().is_none());

        let mut config = configured();
        config.content_api_url = None;
        assert!(config.content_store().is_none());
    }

    #[test]
    fn content_store_trims_trailing_slash() {
        let store = configured().content_store().expect("store settings");
        assert_eq!(store.base_url, "https://store.example.com");
        assert_eq!(store.api_key.as_str(), "anon-key");
        assert_eq!(store.timeout, Duration::from_secs(10));
    }

    #[test]
    fn validate_rejects_malformed_url_and_zero_timeout() {
        let mut config = configured();
        config.content_api_url = Some("not a url".into());
        config.content_timeout_secs = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("CONTENT_API_URL is not a valid URL"));
        assert!(err.contains("CONTENT_TIMEOUT_SECS"));
    }

    #[test]
    fn validate_accepts_missing_store() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn wildcard_cors_is_rejected_in_production() {
        let config = AppConfig {
            env: AppEnvironment::Production,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_key() {
        let rendered = format!("{:?}", configured());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("anon-key"));
    }
}
