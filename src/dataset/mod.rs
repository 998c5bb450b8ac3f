// src/dataset/mod.rs
use std::{
    env, io,
    path::{Path, PathBuf},
};

use tracing::{info, instrument};

use crate::error::{LoadError, Result};
use crate::table::Table;

pub mod extract;

pub use extract::extract_archive;

/// Shared stem of the dataset's CSV and ZIP files.
pub const BASE_FILE_NAME: &str = "Medicare_Part_D_Prescribers_by_Provider_and_Drug_2022";

/// `<cwd>/data`, read from the working directory at the moment of the call.
pub fn default_data_dir() -> io::Result<PathBuf> {
    Ok(env::current_dir()?.join("data"))
}

/// Where the dataset lives: a directory plus the stem shared by `.csv` and `.zip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLocation {
    pub data_dir: PathBuf,
    pub base_name: String,
}

impl DatasetLocation {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            base_name: BASE_FILE_NAME.to_string(),
        }
    }

    /// Location under [`default_data_dir`].
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::new(default_data_dir()?))
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.csv", self.base_name))
    }

    pub fn zip_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.zip", self.base_name))
    }
}

/// Load the dataset from `data_dir`, or from `<cwd>/data` when `None`.
///
/// If the CSV is absent, the sibling ZIP is extracted in full into the
/// directory first. Fails with [`LoadError::MissingArchive`] when neither
/// file exists; extraction and parse errors are returned as they come.
pub fn load_data(data_dir: Option<&Path>) -> Result<Table> {
    let location = match data_dir {
        Some(dir) => DatasetLocation::new(dir),
        None => DatasetLocation::from_current_dir()?,
    };
    load_data_from(&location)
}

#[instrument(level = "info", skip(location), fields(dir = %location.data_dir.display()))]
pub fn load_data_from(location: &DatasetLocation) -> Result<Table> {
    let csv_path = location.csv_path();

    // existence only; a stale CSV next to a newer archive still wins
    if !csv_path.is_file() {
        info!("{} not found, extracting zip file", csv_path.display());

        let zip_path = location.zip_path();
        if !zip_path.is_file() {
            return Err(LoadError::MissingArchive { path: zip_path });
        }
        extract_archive(&zip_path, &location.data_dir)?;
    }

    info!("Loading data from {}", csv_path.display());
    Table::from_path(&csv_path)
}
