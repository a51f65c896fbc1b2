//! Skyatlas: constellation boundary dataset preparation
//!
//! This crate turns the raw IAU constellation border files and the bundled
//! property and line-figure tables into a single geospatial dataset keyed by
//! constellation identifier, ready for star chart plotting.

use std::path::PathBuf;
use thiserror::Error;

pub mod borders;
pub mod constellations;
pub mod coordinates;
pub mod data;
pub mod dataset;

// Re-export commonly used types
pub use constellations::{build_all, build_record, Boundary, ConstellationRecord};
pub use dataset::{ConstellationDataset, SPHERICAL_CRS};

/// Main error type for the skyatlas library
#[derive(Debug, Error)]
pub enum SkyatlasError {
    #[error("Coordinate error: {0}")]
    CoordinateError(String),

    #[error("Border file error on {path:?}: {source}")]
    BorderFileError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No line figure for constellation: {0}")]
    MissingLineFigure(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for skyatlas operations
pub type Result<T> = std::result::Result<T, SkyatlasError>;
