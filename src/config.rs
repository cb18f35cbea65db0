use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::feed::catalog::builtin_catalog;
use crate::feed::error::CatalogError;
use crate::feed::types::Feed;

/// Timeout for a single page fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("kpatch-watch/", env!("CARGO_PKG_VERSION"));

/// Top-level configuration file structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub fetch: FetchConfig,
    /// Feeds to check; the built-in catalog when absent
    pub feeds: Option<Vec<Feed>>,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Read a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The configured feeds, or the built-in catalog
    pub fn catalog(&self) -> Result<Vec<Feed>, CatalogError> {
        match &self.feeds {
            Some(feeds) => Ok(feeds.clone()),
            None => builtin_catalog(),
        }
    }
}

/// Returns the path to the data directory for kpatch-watch.
/// Uses $XDG_DATA_HOME/kpatch-watch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/kpatch-watch,
/// or ./kpatch-watch if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("kpatch-watch.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("kpatch-watch")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "fetch": {
                "timeoutMs": 1000
            }
        }))
        .unwrap();

        assert_eq!(result.fetch.timeout_ms, 1000);
        assert_eq!(result.fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(result.feeds, None);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "fetch": {
                "timeoutMs": 5000,
                "userAgent": "test-agent"
            },
            "feeds": [
                { "name": "ck", "url": "U/${kseries}", "pattern": "${kseries}-ck[0-9]" }
            ]
        }))
        .unwrap();

        assert_eq!(
            result.fetch,
            FetchConfig {
                timeout_ms: 5000,
                user_agent: "test-agent".to_string(),
            }
        );
        let feeds = result.catalog().unwrap();
        assert_eq!(feeds.len(), 1);
        assert_eq!(feeds[0].name(), "ck");
    }

    #[test]
    fn catalog_falls_back_to_builtin_feeds() {
        let catalog = Config::default().catalog().unwrap();

        assert_eq!(catalog, builtin_catalog().unwrap());
    }

    #[test]
    fn load_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"feeds": [{{"name": "genpatches", "url": "T/", "pattern": "genpatches-${{kseries}}-\\d+"}}]}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        let feeds = config.catalog().unwrap();

        assert_eq!(feeds[0].name(), "genpatches");
        assert_eq!(feeds[0].levels()[0].pattern, r"genpatches-${kseries}-\d+");
    }

    #[test]
    fn load_rejects_invalid_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"feeds": [{{"name": "ck", "url": "U"}}]}}"#).unwrap();

        let result = Config::load(file.path());

        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Config::load(Path::new("/nonexistent/kpatch-watch.json"));

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/kpatch-watch"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/kpatch-watch"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./kpatch-watch"));
    }
}
