//! Error types for xsdb

use std::path::PathBuf;

use thiserror::Error;

use crate::record::{Category, Energy, Era};

/// xsdb error type
#[derive(Error, Debug)]
pub enum Error {
    /// Process name not present in the table
    #[error("unknown process: {0}")]
    UnknownProcess(String),

    /// A required value is absent for the requested period
    #[error("process {name} has no {category} value for {energy}/{era}")]
    MissingValue {
        /// Process name.
        name: String,
        /// Requested value category.
        category: Category,
        /// Requested centre-of-mass energy.
        energy: Energy,
        /// Requested data-taking era.
        era: Era,
    },

    /// Era or energy label that does not name a known period
    #[error("unknown era or energy label: {0}")]
    UnknownLabel(String),

    /// Referenced dataset-description files absent on disk
    #[error("{count} dataset file(s) missing under {dir}")]
    MissingDatasets {
        /// Number of missing files.
        count: usize,
        /// Directory the paths were resolved against.
        dir: PathBuf,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
