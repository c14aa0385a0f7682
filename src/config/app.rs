//! Application configuration loading from config.toml
//!
//! The config file carries the non-secret settings: which branch this desk
//! runs as, the branch roster, and the message polling interval. The
//! database URL comes from the environment (`DATABASE_URL`) with a local
//! SQLite fallback, matching how the rest of the deployment passes secrets.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

fn default_poll_interval_secs() -> u64 {
    30
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Branch this desk operates as (messages are polled for it)
    pub home_branch: String,
    /// All branches of the business
    pub branches: Vec<String>,
    /// Seconds between unread-message polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl AppConfig {
    /// Whether a branch name is part of the configured roster.
    #[must_use]
    pub fn is_known_branch(&self, branch: &str) -> bool {
        self.branches.iter().any(|b| b == branch)
    }
}

/// The database URL from the environment, falling back to a local
/// `SQLite` file.
#[must_use]
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/snowdesk.sqlite".to_string())
}

/// Loads application configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
/// - The home branch is not in the branch roster
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if !config.is_known_branch(&config.home_branch) {
        return Err(Error::Config {
            message: format!(
                "Home branch {} is not in the branch roster",
                config.home_branch
            ),
        });
    }
    if config.poll_interval_secs == 0 {
        return Err(Error::Config {
            message: "poll_interval_secs must be at least 1".to_string(),
        });
    }

    Ok(config)
}

/// Loads configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
            home_branch = "곤지암"
            branches = ["곤지암", "지산", "휘닉스"]
            poll_interval_secs = 15
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.home_branch, "곤지암");
        assert_eq!(config.branches.len(), 3);
        assert_eq!(config.poll_interval_secs, 15);
        assert!(config.is_known_branch("지산"));
        assert!(!config.is_known_branch("용평"));
    }

    #[test]
    fn test_poll_interval_defaults() {
        let toml_str = r#"
            home_branch = "곤지암"
            branches = ["곤지암"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.poll_interval_secs, 30);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let toml_str = r#"
            branches = ["곤지암"]
        "#;

        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_rejects_unknown_home_branch() {
        let dir = std::env::temp_dir().join("snowdesk-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "home_branch = \"용평\"\nbranches = [\"곤지암\", \"지산\"]\n",
        )
        .unwrap();

        let result = load_config(&path);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_config_rejects_zero_poll_interval() {
        let dir = std::env::temp_dir().join("snowdesk-config-test-interval");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "home_branch = \"곤지암\"\nbranches = [\"곤지암\"]\npoll_interval_secs = 0\n",
        )
        .unwrap();

        let result = load_config(&path);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        std::fs::remove_file(&path).ok();
    }
}
