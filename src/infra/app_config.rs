use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_JOB_SEARCH_URL: &str = "https://data.usajobs.gov/api/Search";
pub const DEFAULT_JOB_SEARCH_HOST: &str = "data.usajobs.gov";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const API_KEY_ENV: &str = "JOBFORSA_USAJOBS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the CRUD API serving `users`, `favoritesOffers` and `applications`.
    pub api_base_url: String,
    pub job_search_url: String,
    /// Requests whose URL contains this substring get the API-key header.
    pub job_search_host: String,
    pub job_search_api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub session_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            job_search_url: DEFAULT_JOB_SEARCH_URL.to_string(),
            job_search_host: DEFAULT_JOB_SEARCH_HOST.to_string(),
            job_search_api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            session_path: None,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn session_path(&self) -> PathBuf {
        self.session_path
            .clone()
            .unwrap_or_else(|| app_data_dir().join("session.json"))
    }

    /// Environment key wins over the file so secrets can stay out of it.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.job_search_api_key.clone())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_base_url", &self.api_base_url),
            ("job_search_url", &self.job_search_url),
        ] {
            if reqwest::Url::parse(value).is_err() {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("JOBFORSA_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

/// Directory holding `config.toml` and `session.json` unless overridden.
fn app_data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var_os(key), home::home_dir())
}

fn resolve_data_dir(var: impl Fn(&str) -> Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    let var = |key: &str| var(key).filter(|value| !value.is_empty()).map(PathBuf::from);

    if let Some(dir) = var("JOBFORSA_DATA_HOME") {
        return dir;
    }
    let platform = if cfg!(windows) {
        var("APPDATA").map(|dir| dir.join("JobForsa"))
    } else {
        var("XDG_DATA_HOME").map(|dir| dir.join("jobforsa"))
    };
    if let Some(dir) = platform {
        return dir;
    }

    match home {
        Some(home) if cfg!(target_os = "macos") => {
            home.join("Library").join("Application Support").join("JobForsa")
        }
        Some(home) => home.join(".local").join("share").join("jobforsa"),
        None => PathBuf::from(".jobforsa"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str("api_base_url = \"http://api.test:8080\"").unwrap();
        assert_eq!(config.api_base_url, "http://api.test:8080");
        assert_eq!(config.job_search_url, DEFAULT_JOB_SEARCH_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_relative_urls() {
        let config = AppConfig {
            api_base_url: "localhost".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl {
                field: "api_base_url",
                ..
            })
        ));
    }

    #[test]
    fn timeout_is_never_zero() {
        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn data_dir_prefers_explicit_override() {
        let env = |key: &str| match key {
            "JOBFORSA_DATA_HOME" => Some(OsString::from("/srv/jobforsa")),
            "XDG_DATA_HOME" | "APPDATA" => Some(OsString::from("/ignored")),
            _ => None,
        };
        assert_eq!(
            resolve_data_dir(env, Some(PathBuf::from("/home/ada"))),
            PathBuf::from("/srv/jobforsa")
        );
    }

    #[test]
    fn data_dir_skips_empty_vars_and_uses_home() {
        let env = |_: &str| Some(OsString::new());
        let dir = resolve_data_dir(env, Some(PathBuf::from("/home/ada")));
        assert!(dir.starts_with("/home/ada"), "{}", dir.display());

        assert_eq!(resolve_data_dir(|_| None, None), PathBuf::from(".jobforsa"));
    }

    #[test]
    fn save_then_load_via_env_path() {
        let tmp_file = NamedTempFile::new().unwrap();
        let path = tmp_file.path().to_path_buf();
        let prev = std::env::var_os("JOBFORSA_CONFIG_PATH");
        unsafe {
            std::env::set_var("JOBFORSA_CONFIG_PATH", &path);
        }

        let config = AppConfig {
            request_timeout_secs: 5,
            job_search_api_key: Some("secret".into()),
            ..AppConfig::default()
        };
        save_config(&config).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("request_timeout_secs = 5"));
        assert_eq!(load_config(), config);

        match prev {
            Some(value) => unsafe {
                std::env::set_var("JOBFORSA_CONFIG_PATH", value);
            },
            None => unsafe {
                std::env::remove_var("JOBFORSA_CONFIG_PATH");
            },
        }
    }
}
