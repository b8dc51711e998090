use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

/// YAML config file structure (~/.greenroom/config.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    /// Search endpoint of the catalog backend. None = run the embedded
    /// directory server and search against it.
    #[serde(default)]
    pub search_url: Option<String>,
    /// Host the embedded directory server binds to.
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
    /// Artist fixtures for the embedded server. None = built-in demo set.
    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub search_url: Option<String>,
    pub bind_host: String,
    pub fixtures_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: None,
            bind_host: default_bind_host(),
            fixtures_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let dev_mode = std::env::var("GREENROOM_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Dev mode activated - loading from .env");
            Self::from_env()
        } else {
            info!("Loading from config.yaml");
            Self::from_config_file()
        }
    }

    fn from_env() -> Self {
        Self {
            search_url: std::env::var("GREENROOM_SEARCH_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            bind_host: std::env::var("GREENROOM_BIND_HOST")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(default_bind_host),
            fixtures_path: std::env::var("GREENROOM_FIXTURES")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }

    fn from_config_file() -> Self {
        let home_dir = dirs::home_dir().expect("Failed to get home directory");
        Self::load_from_dir(&home_dir.join(".greenroom"))
    }

    fn load_from_dir(dir: &std::path::Path) -> Self {
        let config_path = dir.join("config.yaml");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(_) => {
                info!("No config at {}, using defaults", config_path.display());
                return Self::default();
            }
        };
        let yaml: ConfigYaml = serde_yaml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path.display(), e));

        Self {
            search_url: yaml.search_url,
            bind_host: yaml.bind_host,
            fixtures_path: yaml.fixtures_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from_dir(tmp.path());
        assert!(config.search_url.is_none());
        assert_eq!(config.bind_host, "127.0.0.1");
        assert!(config.fixtures_path.is_none());
    }

    #[test]
    fn config_yaml_parses_with_partial_fields() {
        let yaml = "search_url: http://cms.local/staff/search/artists\n";
        let config: ConfigYaml = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.search_url.as_deref(),
            Some("http://cms.local/staff/search/artists")
        );
        assert_eq!(config.bind_host, "127.0.0.1");
    }

    #[test]
    fn load_from_dir_reads_config_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.yaml"),
            "search_url: http://localhost:9000/search\nbind_host: 0.0.0.0\n",
        )
        .unwrap();

        let config = Config::load_from_dir(tmp.path());
        assert_eq!(
            config.search_url.as_deref(),
            Some("http://localhost:9000/search")
        );
        assert_eq!(config.bind_host, "0.0.0.0");
    }

    #[test]
    #[should_panic(expected = "Failed to parse")]
    fn load_from_dir_panics_on_malformed_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.yaml"), "search_url: [not: closed\n").unwrap();
        Config::load_from_dir(tmp.path());
    }
}
