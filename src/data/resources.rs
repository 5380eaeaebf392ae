//! Resource Resolution Module
//! Maps logical resource names onto files bundled in the crate's data directory.

use glob::Pattern;
use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable that relocates the bundled data directory.
pub const DATA_DIR_ENV: &str = "MICO_DATA_DIR";

/// The AGORA model catalogue.
pub const AGORA_CSV: &str = "agora.csv";

/// Serialized E. coli core model referenced by the test taxonomy.
pub const E_COLI_MODEL: &str = "e_coli_core.pickle";

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Invalid resource pattern: {0}")]
    PatternError(#[from] glob::PatternError),
    #[error("Failed to read resource entry: {0}")]
    GlobError(#[from] glob::GlobError),
}

static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let dir = resolve_data_dir(env::var(DATA_DIR_ENV).ok().as_deref());
    debug!(dir = %dir.display(), "resolved data directory");
    dir
});

/// Directory holding the bundled resource files.
///
/// `MICO_DATA_DIR` wins when it is set to a non-empty value, otherwise the
/// `data/` directory shipped next to the crate manifest is used. The choice
/// is made on first use and fixed for the rest of the process.
pub fn data_dir() -> &'static Path {
    DATA_DIR.as_path()
}

fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir.map(str::trim) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
    }
}

/// Path of a bundled resource given its logical name.
///
/// The file is not opened or checked for existence.
pub fn resource_path(name: &str) -> PathBuf {
    data_dir().join(name)
}

/// Names of bundled resources matching a glob pattern such as `"*.csv"`.
pub fn list_resources(pattern: &str) -> Result<Vec<String>, ResourceError> {
    list_resources_in(data_dir(), pattern)
}

fn list_resources_in(dir: &Path, pattern: &str) -> Result<Vec<String>, ResourceError> {
    let full_pattern = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), pattern);

    let mut names = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    names.sort();

    debug!(dir = %dir.display(), pattern, count = names.len(), "listed resources");
    Ok(names)
}
