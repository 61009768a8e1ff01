//! Where the dashboard dataset comes from.
//!
//! Supports the built-in dataset or a JSON file path.

use std::path::{Path, PathBuf};

use crate::error::{DataError, Result};

use super::Dataset;

/// Source of the records rendered by the panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Compiled-in demonstration records
    #[default]
    Builtin,
    /// JSON dataset file
    File(PathBuf),
}

impl DataSource {
    /// Picks the file source when a path is given, the built-in one otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => DataSource::File(path),
            None => DataSource::Builtin,
        }
    }

    /// Loads and validates the dataset.
    pub async fn load(&self) -> Result<Dataset> {
        let dataset = match self {
            DataSource::Builtin => {
                tracing::debug!("Using built-in dataset");
                Dataset::builtin()
            }
            DataSource::File(path) => {
                tracing::info!("Reading dataset from file: {:?}", path);
                read_dataset(path).await?
            }
        };

        dataset.validate()?;
        Ok(dataset)
    }
}

async fn read_dataset(path: &Path) -> Result<Dataset> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
