//! Data module - bundled resources, the AGORA catalogue and test taxonomies

mod loader;
mod resources;
mod taxonomy;

pub use loader::{agora, DatasetLoader, LoaderError};
pub use resources::{
    data_dir, list_resources, resource_path, ResourceError, AGORA_CSV, DATA_DIR_ENV, E_COLI_MODEL,
};
pub use taxonomy::{
    records_to_frame, taxonomy_records, test_taxonomy, TaxonomyError, TaxonomyRecord,
    DEFAULT_TAXONOMY_SIZE, DOCUMENTED_MAX_SPECIES, GENUS, METABOLITES, REACTIONS, SPECIES,
};
