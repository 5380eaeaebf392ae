//! mico data - common data sets for microbial community modelling
//!
//! Exposes the AGORA model catalogue shipped with the crate and a helper that
//! builds small synthetic taxonomies for tests.
//!
//! The bundled `data/agora.csv` is a 10-row sample of the AGORA catalogue,
//! not the full table. Point `MICO_DATA_DIR` at a directory holding the
//! complete `agora.csv` to use it instead.
//!
//! ```no_run
//! let agora = mico_data::agora()?;
//! println!("{} AGORA models", agora.height());
//!
//! let taxa = mico_data::test_taxonomy(Some(3))?;
//! assert_eq!(taxa.height(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod data;

pub use data::{agora, test_taxonomy};
