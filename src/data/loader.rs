//! Dataset Loader Module
//! Reads the bundled AGORA model catalogue, or any other CSV, using Polars.

use super::resources::{resource_path, AGORA_CSV};
use once_cell::sync::OnceCell;
use polars::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Resource not found: {}", .0.display())]
    NotFound(PathBuf),
}

static AGORA: OnceCell<DataFrame> = OnceCell::new();

/// The AGORA catalogue, loaded from the bundled `agora.csv` on first access.
///
/// Once loaded the table is shared for the rest of the process and never
/// replaced. A failed load is handed back to the caller and nothing is stored.
pub fn agora() -> Result<&'static DataFrame, LoaderError> {
    AGORA.get_or_try_init(|| {
        let path = resource_path(AGORA_CSV);
        let df = DatasetLoader::load_csv(&path)?;
        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded agora dataset"
        );
        Ok(df)
    })
}

/// CSV loading for bundled and ad hoc datasets.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a CSV file, inferring column types from its contents.
    ///
    /// Nothing is validated beyond what the CSV reader itself checks, so
    /// ragged or otherwise malformed rows fail the whole load.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let file_path = file_path.as_ref();
        debug!(path = %file_path.display(), "reading csv");

        LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|err| {
                if is_not_found(&err) {
                    LoaderError::NotFound(file_path.to_path_buf())
                } else {
                    LoaderError::CsvError(err)
                }
            })
    }
}

fn is_not_found(err: &PolarsError) -> bool {
    match err {
        PolarsError::IO { error, .. } => error.kind() == io::ErrorKind::NotFound,
        PolarsError::Context { error, .. } => is_not_found(error),
        _ => false,
    }
}
