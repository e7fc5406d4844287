// Application configuration: optional TOML file plus env overrides

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SERVICE_URL_ENV: &str = "CAMPANIA_SERVICE_URL";
pub const SERVICE_KEY_ENV: &str = "CAMPANIA_SERVICE_KEY";

/// Connection settings for the external auth/subscription collaborator.
///
/// Both values are optional: without them the server runs with the
/// generation features fully available and the gateway commands answering
/// a not-configured error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service_url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>,
}

impl AppConfig {
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.service_url, &self.anon_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

/// Load configuration: defaults, then the TOML file when given, then env
/// overrides. A missing or unreadable file is logged and skipped, never
/// fatal.
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let mut config = match path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                    AppConfig::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    };

    if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
        if !url.is_empty() {
            config.service_url = Some(url);
        }
    }
    if let Ok(key) = std::env::var(SERVICE_KEY_ENV) {
        if !key.is_empty() {
            config.anon_key = Some(key);
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_unconfigured() {
        let config = AppConfig::default();
        assert!(config.service_url.is_none());
        assert!(!config.is_configured());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "service_url = \"https://proyecto.supabase.co\"\nanon_key = \"anon-key\""
        )
        .unwrap();

        let config = load_config(Some(file.path()));
        assert_eq!(
            config.service_url.as_deref(),
            Some("https://proyecto.supabase.co")
        );
        assert!(config.is_configured());
    }

    #[test]
    fn test_missing_file_is_not_fatal() {
        let config = load_config(Some(Path::new("/nonexistent/campania.toml")));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_partial_file_leaves_rest_unset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service_url = \"https://proyecto.supabase.co\"").unwrap();

        let config = load_config(Some(file.path()));
        assert!(config.service_url.is_some());
        assert!(config.anon_key.is_none());
        assert!(!config.is_configured());
    }
}
