use std::io::Read;
use std::path::{Path, PathBuf};

use crate::dataset::LaunchDataset;
use crate::models::LaunchRecord;

/// Columns every launch table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Errors raised while loading the launch table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed launch table: {0}")]
    Csv(#[from] csv::Error),
    #[error("launch table is missing required column '{0}'")]
    MissingColumn(String),
}

/// Loader for comma-delimited launch tables with a header row.
///
/// Extra columns (such as a leading unnamed index column) are ignored.
pub struct LaunchLoader;

impl LaunchLoader {
    /// Load the launch table at `path`.
    pub fn load_from_file(path: &Path) -> Result<LaunchDataset, LoadError> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::load_from_reader(file)?;
        log::info!(
            "Loaded {} launch records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load a launch table from an in-memory string.
    pub fn load_from_str(text: &str) -> Result<LaunchDataset, LoadError> {
        Self::load_from_reader(text.as_bytes())
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<LaunchDataset, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|col| !headers.iter().any(|h| h == **col))
        {
            return Err(LoadError::MissingColumn(missing.to_string()));
        }

        let records = reader
            .deserialize::<LaunchRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LaunchDataset::new(records))
    }
}
