// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::digest::ReportStyle;

const ENV_CONFIG_PATH: &str = "TRACKER_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config/tracker.toml";

/// Runtime configuration for one tracker run.
///
/// Resolution order: $TRACKER_CONFIG_PATH, then `config/tracker.toml` if it
/// exists, then built-in defaults. `DATA_DIR` and `TRACKER_REPORT_STYLE` env
/// vars override whatever the file said.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub store_file: String,
    pub dashboard_file: String,
    pub report_style: ReportStyle,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            store_file: "sustainability_updates.db".to_string(),
            dashboard_file: "sustainability_dashboard.html".to_string(),
            report_style: ReportStyle::Professional,
        }
    }
}

impl TrackerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading tracker config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing tracker config at {}", path.display()))
    }

    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("TRACKER_CONFIG_PATH points to non-existent path"));
            }
            Self::from_file(&pb)?
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Self::from_file(default_path)?
            } else {
                Self::default()
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = PathBuf::from(dir);
            }
        }
        if let Ok(style) = std::env::var("TRACKER_REPORT_STYLE") {
            match ReportStyle::parse(&style) {
                Some(s) => self.report_style = s,
                None => {
                    tracing::warn!(value = %style, "unknown report style; keeping configured value");
                }
            }
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.data_dir.join(&self.dashboard_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: TrackerConfig = toml::from_str(r#"report_style = "basic""#).unwrap();
        assert_eq!(cfg.report_style, ReportStyle::Basic);
        assert_eq!(cfg.store_file, "sustainability_updates.db");
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: std::result::Result<TrackerConfig, _> =
            toml::from_str(r#"databse_file = "oops.db""#);
        assert!(parsed.is_err());
    }

    #[serial_test::serial]
    #[test]
    fn env_overrides_take_precedence() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("tracker.toml");
        std::fs::write(&file, "data_dir = \"from_file\"\nreport_style = \"basic\"\n").unwrap();

        env::set_var(ENV_CONFIG_PATH, file.display().to_string());
        env::set_var("DATA_DIR", "from_env");
        env::remove_var("TRACKER_REPORT_STYLE");

        let cfg = TrackerConfig::load().unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("from_env"));
        assert_eq!(cfg.report_style, ReportStyle::Basic);

        env::remove_var(ENV_CONFIG_PATH);
        env::remove_var("DATA_DIR");
    }

    #[serial_test::serial]
    #[test]
    fn missing_config_path_is_an_error() {
        env::set_var(ENV_CONFIG_PATH, "/definitely/not/here.toml");
        assert!(TrackerConfig::load().is_err());
        env::remove_var(ENV_CONFIG_PATH);
    }

    #[serial_test::serial]
    #[test]
    fn defaults_apply_without_any_configuration() {
        // Isolate CWD so a real config/ in the repo does not interfere.
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_CONFIG_PATH);
        env::remove_var("DATA_DIR");
        env::remove_var("TRACKER_REPORT_STYLE");

        let cfg = TrackerConfig::load().unwrap();
        assert_eq!(cfg.store_path(), PathBuf::from("data/sustainability_updates.db"));
        assert_eq!(cfg.report_style, ReportStyle::Professional);

        env::set_current_dir(&old).unwrap();
    }
}
