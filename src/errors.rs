//! Module with common error types.

use serde_json::Error as JsonError;
use std::io::Error as IoError;
use thiserror::Error;

pub use deploy_addresses_common::errors::*;

/// An error in loading, parsing or writing the address map.
#[derive(Debug, Error)]
pub enum MappingError {
    /// An IO error occurred when reading or writing the address map file.
    #[error("failed to access address map file: {0}")]
    Io(#[from] IoError),

    /// A JSON error occurred while parsing or serializing the address map.
    #[error("failed to parse address map JSON: {0}")]
    Json(#[from] JsonError),
}

/// Error that can occur while recording a deployed contract's address.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The deployed contract could not be determined from its artifact.
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// The address map could not be updated.
    #[error("address map error: {0}")]
    Mapping(#[from] MappingError),
}
