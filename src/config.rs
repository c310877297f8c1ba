use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::path::SemanticPathOptions;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ideagraph: DataConfig,
    #[serde(default)]
    pub path: PathConfig,
    #[serde(default)]
    pub http_server: HttpServerConfig,
}

/// Dataset location and logging
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON array of concepts with their authored relationships.
    pub dataset_path: PathBuf,
    /// Optional JSON array of chart positions; when set, nodes are taken from
    /// this file and enriched from the dataset.
    #[serde(default)]
    pub positions_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Path search defaults; every value can be overridden per query.
#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            min_score: default_min_score(),
            max_depth: default_max_depth(),
        }
    }
}

impl PathConfig {
    /// Facade options built from the configured defaults.
    pub fn semantic_options(&self) -> SemanticPathOptions {
        SemanticPathOptions {
            max_length: self.max_length,
            min_score: self.min_score,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            port: default_http_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_max_length() -> usize {
    4
}

fn default_min_score() -> u32 {
    40
}

fn default_max_depth() -> usize {
    5
}

fn default_http_port() -> u16 {
    8080
}

fn default_allowed_origins() -> Vec<String> {
    // Empty means any origin (local development)
    vec![]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in IDEAGRAPH_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        let config_path = std::env::var("IDEAGRAPH_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        Self::from_file(&config_path)
    }

    /// Load and validate a specific config file.
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.ideagraph.dataset_path.is_file() {
            anyhow::bail!(
                "dataset_path does not exist or is not a file: {}. Set dataset_path in config.toml to your concepts JSON.",
                self.ideagraph.dataset_path.display()
            );
        }

        if let Some(ref positions) = self.ideagraph.positions_path {
            if !positions.is_file() {
                anyhow::bail!(
                    "positions_path does not exist or is not a file: {}",
                    positions.display()
                );
            }
        }

        if self.path.max_length == 0 {
            anyhow::bail!("path.max_length must be greater than 0");
        }

        if self.path.min_score > 100 {
            anyhow::bail!("path.min_score must be between 0 and 100");
        }

        if self.path.max_depth == 0 {
            anyhow::bail!("path.max_depth must be greater than 0");
        }

        Ok(())
    }

    /// Get dataset path
    pub fn dataset_path(&self) -> &Path {
        &self.ideagraph.dataset_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn write_dataset(temp_dir: &TempDir) -> PathBuf {
        let dataset = temp_dir.path().join("concepts.json");
        fs::write(&dataset, "[]").unwrap();
        dataset.canonicalize().unwrap()
    }

    fn toml_path(path: &Path) -> String {
        path.to_str().unwrap().replace('\\', "\\\\")
    }

    fn write_config(temp_dir: &TempDir, body: &str) -> PathBuf {
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, body).unwrap();
        config_path
    }

    #[test]
    fn test_config_load_success() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = write_dataset(&temp_dir);
        let config_path = write_config(
            &temp_dir,
            &format!(
                r#"
[ideagraph]
dataset_path = "{}"
log_level = "debug"

[path]
max_length = 6
min_score = 25
max_depth = 7

[http_server]
port = 9000
"#,
                toml_path(&dataset)
            ),
        );

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.ideagraph.log_level, "debug");
        assert_eq!(config.path.max_length, 6);
        assert_eq!(config.path.min_score, 25);
        assert_eq!(config.path.max_depth, 7);
        assert_eq!(config.http_server.port, 9000);
        assert!(config.ideagraph.positions_path.is_none());
    }

    #[test]
    fn test_config_defaults_for_optional_sections() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = write_dataset(&temp_dir);
        let config_path = write_config(
            &temp_dir,
            &format!("[ideagraph]\ndataset_path = \"{}\"\n", toml_path(&dataset)),
        );

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.ideagraph.log_level, "info");
        assert_eq!(config.path.max_length, 4);
        assert_eq!(config.path.min_score, 40);
        assert_eq!(config.path.max_depth, 5);
        assert_eq!(config.http_server.port, 8080);
        assert!(config.http_server.allowed_origins.is_empty());

        let options = config.path.semantic_options();
        assert_eq!(options, SemanticPathOptions::default());
    }

    #[test]
    fn test_config_missing_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.json");
        let config_path = write_config(
            &temp_dir,
            &format!("[ideagraph]\ndataset_path = \"{}\"\n", toml_path(&missing)),
        );

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("dataset_path"));
    }

    #[test]
    fn test_config_rejects_min_score_above_100() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = write_dataset(&temp_dir);
        let config_path = write_config(
            &temp_dir,
            &format!(
                "[ideagraph]\ndataset_path = \"{}\"\n\n[path]\nmin_score = 120\n",
                toml_path(&dataset)
            ),
        );

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("min_score"));
    }

    #[test]
    fn test_config_rejects_zero_max_length() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = write_dataset(&temp_dir);
        let config_path = write_config(
            &temp_dir,
            &format!(
                "[ideagraph]\ndataset_path = \"{}\"\n\n[path]\nmax_length = 0\n",
                toml_path(&dataset)
            ),
        );

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("max_length"));
    }

    #[test]
    fn test_config_missing_positions_file() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = write_dataset(&temp_dir);
        let positions = temp_dir.path().join("positions.json");
        let config_path = write_config(
            &temp_dir,
            &format!(
                "[ideagraph]\ndataset_path = \"{}\"\npositions_path = \"{}\"\n",
                toml_path(&dataset),
                toml_path(&positions)
            ),
        );

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("positions_path"));
    }

    #[test]
    fn test_config_load_uses_env_var() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let dataset = write_dataset(&temp_dir);
        let config_path = write_config(
            &temp_dir,
            &format!("[ideagraph]\ndataset_path = \"{}\"\n", toml_path(&dataset)),
        );

        let original = std::env::var("IDEAGRAPH_CONFIG").ok();
        std::env::set_var("IDEAGRAPH_CONFIG", config_path.to_str().unwrap());
        let config = Config::load();
        std::env::remove_var("IDEAGRAPH_CONFIG");
        if let Some(v) = original {
            std::env::set_var("IDEAGRAPH_CONFIG", v);
        }

        assert!(config.is_ok(), "Config::load() failed: {:?}", config.err());
        assert_eq!(config.unwrap().dataset_path(), dataset.as_path());
    }

    #[test]
    fn test_config_invalid_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let original = std::env::var("IDEAGRAPH_CONFIG").ok();
        std::env::set_var("IDEAGRAPH_CONFIG", "nonexistent.toml");
        let config = Config::load();
        std::env::remove_var("IDEAGRAPH_CONFIG");
        if let Some(v) = original {
            std::env::set_var("IDEAGRAPH_CONFIG", v);
        }
        assert!(config.is_err());
    }
}
