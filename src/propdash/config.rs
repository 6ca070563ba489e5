use crate::error::{PropdashError, Result};
use crate::model::ChartPeriod;
use crate::state::ViewMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "propdash.json";

/// User preferences, stored as propdash.json in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Starting view for the properties page.
    #[serde(default)]
    pub default_view: ViewMode,

    /// Starting granularity for the revenue chart.
    #[serde(default = "default_chart_period")]
    pub chart_period: ChartPeriod,

    /// Where CSV exports land when no explicit path is given. `None` means
    /// the current directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_chart_period() -> ChartPeriod {
    ChartPeriod::Monthly
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Table,
            chart_period: default_chart_period(),
            export_dir: None,
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PropdashError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(PropdashError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PropdashError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PropdashError::Serialization)?;
        fs::write(config_path, content).map_err(PropdashError::Io)?;
        Ok(())
    }

    /// Resolves the export path for a file name against the configured
    /// export directory.
    pub fn export_path(&self, file_name: &str) -> PathBuf {
        match &self.export_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_view, ViewMode::Table);
        assert_eq!(config.chart_period, ChartPeriod::Monthly);
        assert_eq!(config.export_path("out.csv"), PathBuf::from("out.csv"));
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let temp_dir = env::temp_dir().join("propdash_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = AppConfig::load(&temp_dir).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp_dir = env::temp_dir().join("propdash_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = AppConfig {
            default_view: ViewMode::Grid,
            chart_period: ChartPeriod::Weekly,
            export_dir: Some(PathBuf::from("/tmp/exports")),
        };
        config.save(&temp_dir).unwrap();

        let loaded = AppConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.export_path("out.csv"),
            PathBuf::from("/tmp/exports/out.csv")
        );

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"default_view":"grid"}"#).unwrap();
        assert_eq!(parsed.default_view, ViewMode::Grid);
        assert_eq!(parsed.chart_period, ChartPeriod::Monthly);
        assert_eq!(parsed.export_dir, None);
    }
}
