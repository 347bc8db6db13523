use std::path::PathBuf;
use std::time::Duration;

use guide_client::ClientConfig;

const DEFAULT_DOOR_API_URL: &str = "https://api.raixer.com";

/// Preview configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | GUIDE_DATA_URL | - | Site root URL; takes precedence over GUIDE_DATA_DIR |
/// | GUIDE_DATA_DIR | . | Local site root containing `data/` |
/// | RAIXER_API_URL | https://api.raixer.com | Door-lock API |
/// | RAIXER_API_USER | - | Door-lock API user |
/// | RAIXER_API_SECRET | - | Door-lock API secret |
/// | REQUEST_TIMEOUT_MS | 10000 | Catalog request timeout |
/// | DOOR_TIMEOUT_MS | 15000 | Door-lock call timeout |
/// | LOG_LEVEL | info | Log level (`RUST_LOG` overrides) |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | - | Directory for daily rotated log files |
///
/// Door control is only enabled when both user and secret are set.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_url: Option<String>,
    pub data_dir: PathBuf,
    pub door_api_url: String,
    pub door_api_user: Option<String>,
    pub door_api_secret: Option<String>,
    pub request_timeout_ms: u64,
    pub door_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        Self {
            data_url: non_empty("GUIDE_DATA_URL"),
            data_dir: non_empty("GUIDE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            door_api_url: non_empty("RAIXER_API_URL")
                .unwrap_or_else(|| DEFAULT_DOOR_API_URL.into()),
            door_api_user: non_empty("RAIXER_API_USER"),
            door_api_secret: non_empty("RAIXER_API_SECRET"),
            request_timeout_ms: non_empty("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            door_timeout_ms: non_empty("DOOR_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(15_000),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("LOG_JSON")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = match &self.data_url {
            Some(url) => ClientConfig::http(url.clone()),
            None => ClientConfig::dir(self.data_dir.clone()),
        }
        .with_timeout(Duration::from_millis(self.request_timeout_ms))
        .with_door_timeout(Duration::from_millis(self.door_timeout_ms));

        match (&self.door_api_user, &self.door_api_secret) {
            (Some(user), Some(secret)) => {
                config.with_door_api(self.door_api_url.clone(), user.clone(), secret.clone())
            }
            _ => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_client::DataSource;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);

        let client = config.client_config();
        assert_eq!(client.data_source, DataSource::Dir(PathBuf::from(".")));
        assert_eq!(client.timeout, Duration::from_secs(10));
        assert!(client.door_api.is_none());
    }

    #[test]
    fn test_url_wins_and_door_api_needs_both_credentials() {
        let only_user = config(&[
            ("GUIDE_DATA_URL", "https://guide.example"),
            ("GUIDE_DATA_DIR", "/srv/site"),
            ("RAIXER_API_USER", "u"),
            ("DOOR_TIMEOUT_MS", "2500"),
            ("LOG_JSON", "TRUE"),
        ]);
        assert!(only_user.log_json);
        let client = only_user.client_config();
        assert_eq!(client.data_source, DataSource::Http("https://guide.example".into()));
        assert_eq!(client.door_timeout, Duration::from_millis(2500));
        assert!(client.door_api.is_none());

        let both = config(&[("RAIXER_API_USER", "u"), ("RAIXER_API_SECRET", "s")]);
        let api = both.client_config().door_api.unwrap();
        assert_eq!(api.base_url, DEFAULT_DOOR_API_URL);
        assert_eq!(api.user, "u");
    }

    #[test]
    fn test_bad_numbers_use_defaults() {
        let config = config(&[("REQUEST_TIMEOUT_MS", "soon")]);
        assert_eq!(config.request_timeout_ms, 10_000);
    }
}
