use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dataset::{default_data_dir, DatasetLocation, BASE_FILE_NAME};

/// Optional overrides for where the dataset is read from.
///
/// ```yaml
/// data_dir: /srv/labs/data
/// base_name: Medicare_Part_D_Prescribers_by_Provider_and_Drug_2022
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub data_dir: Option<PathBuf>,
    pub base_name: Option<String>,
}

impl DatasetConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        // an empty document deserializes to null, not to a map
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).context("parsing dataset config")
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve into a location; a missing `data_dir` becomes `<cwd>/data` now.
    pub fn location(&self) -> io::Result<DatasetLocation> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        let base_name = self
            .base_name
            .clone()
            .unwrap_or_else(|| BASE_FILE_NAME.to_string());
        Ok(DatasetLocation::new(data_dir).with_base_name(base_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_full_config() -> Result<()> {
        let cfg = DatasetConfig::from_yaml_str("data_dir: /tmp/lab\nbase_name: sample\n")?;
        let location = cfg.location()?;
        assert_eq!(location.csv_path(), PathBuf::from("/tmp/lab/sample.csv"));
        assert_eq!(location.zip_path(), PathBuf::from("/tmp/lab/sample.zip"));
        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> Result<()> {
        let cfg = DatasetConfig::from_yaml_str("")?;
        assert_eq!(cfg, DatasetConfig::default());

        let location = cfg.location()?;
        assert_eq!(location.data_dir, env::current_dir()?.join("data"));
        assert_eq!(location.base_name, BASE_FILE_NAME);
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(DatasetConfig::from_yaml_str("data_directory: /tmp\n").is_err());
    }

    #[test]
    fn test_from_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("dataset.yaml");
        fs::write(&path, "base_name: other\n")?;

        let cfg = DatasetConfig::from_path(&path)?;

        assert_eq!(cfg.base_name.as_deref(), Some("other"));
        assert_eq!(cfg.data_dir, None);
        assert!(DatasetConfig::from_path(dir.path().join("missing.yaml")).is_err());
        Ok(())
    }
}
