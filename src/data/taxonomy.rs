//! Test Taxonomy Module
//! Builds small synthetic taxonomies whose species all share the bundled
//! E. coli core model.

use super::resources::{resource_path, E_COLI_MODEL};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Number of species produced when no count is given.
pub const DEFAULT_TAXONOMY_SIZE: usize = 5;

/// Advertised upper bound on species. Larger counts are still honoured.
pub const DOCUMENTED_MAX_SPECIES: usize = 3;

pub const GENUS: &str = "Escherichia";

/// Spelling kept as shipped; consumers match on this exact string.
pub const SPECIES: &str = "Eschericia coli";

pub const REACTIONS: i64 = 95;
pub const METABOLITES: i64 = 72;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One row of a taxonomy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    pub id: String,
    pub genus: String,
    pub species: String,
    pub reactions: i64,
    pub metabolites: i64,
    pub file: String,
}

/// Rows `Escherichia_coli_1` through `Escherichia_coli_{n}`.
pub fn taxonomy_records(n: usize) -> Vec<TaxonomyRecord> {
    let file = resource_path(E_COLI_MODEL).to_string_lossy().into_owned();

    (1..=n)
        .map(|i| TaxonomyRecord {
            id: format!("Escherichia_coli_{i}"),
            genus: GENUS.to_string(),
            species: SPECIES.to_string(),
            reactions: REACTIONS,
            metabolites: METABOLITES,
            file: file.clone(),
        })
        .collect()
}

/// Lay records out as a table.
///
/// Output columns: ["id", "genus", "species", "reactions", "metabolites", "file"]
pub fn records_to_frame(records: &[TaxonomyRecord]) -> Result<DataFrame, TaxonomyError> {
    let mut ids = Vec::with_capacity(records.len());
    let mut genera = Vec::with_capacity(records.len());
    let mut species = Vec::with_capacity(records.len());
    let mut reactions = Vec::with_capacity(records.len());
    let mut metabolites = Vec::with_capacity(records.len());
    let mut files = Vec::with_capacity(records.len());

    for record in records {
        ids.push(record.id.clone());
        genera.push(record.genus.clone());
        species.push(record.species.clone());
        reactions.push(record.reactions);
        metabolites.push(record.metabolites);
        files.push(record.file.clone());
    }

    let df = DataFrame::new(vec![
        Column::new("id".into(), ids),
        Column::new("genus".into(), genera),
        Column::new("species".into(), species),
        Column::new("reactions".into(), reactions),
        Column::new("metabolites".into(), metabolites),
        Column::new("file".into(), files),
    ])?;

    Ok(df)
}

/// Create a simple test taxonomy of `n` E. coli entries (5 when `None`).
///
/// Every call builds a new table. A count of zero gives an empty table with
/// the usual columns.
pub fn test_taxonomy(n: Option<usize>) -> Result<DataFrame, TaxonomyError> {
    let n = n.unwrap_or(DEFAULT_TAXONOMY_SIZE);
    if n > DOCUMENTED_MAX_SPECIES {
        warn!(
            n,
            max = DOCUMENTED_MAX_SPECIES,
            "test taxonomy larger than documented maximum"
        );
    }

    let df = records_to_frame(&taxonomy_records(n))?;
    debug!(rows = df.height(), "built test taxonomy");
    Ok(df)
}
