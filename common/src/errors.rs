//! Module with common error types.

use serde_json::Error as JsonError;
use std::io::Error as IoError;
use thiserror::Error;

/// An error in loading or parsing a truffle artifact, or in selecting the
/// deployment it describes.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An IO error occurred when loading a truffle artifact from disk.
    #[error("failed to open contract artifact file: {0}")]
    Io(#[from] IoError),

    /// A JSON error occurred while parsing a truffle artifact.
    #[error("failed to parse contract artifact JSON: {0}")]
    Json(#[from] JsonError),

    /// The requested network does not appear in the artifact.
    #[error("contract {0} is not deployed on network {1}")]
    UnknownNetwork(String, String),

    /// No deployment was requested and the artifact has several networks to
    /// choose from.
    #[error("contract {0} is deployed on {1} networks, a network id or address is required")]
    AmbiguousDeployment(String, usize),

    /// The artifact does not contain any deployment.
    #[error("contract {0} has not been deployed to any network")]
    NotDeployed(String),
}

/// An error parsing an address from its hex string representation.
#[derive(Debug, Error)]
pub enum ParseAddressError {
    /// Missing hex prefix at start of string.
    #[error("address must start with '0x'")]
    MissingHexPrefix,

    /// The hex digits do not decode into a 20-byte address.
    #[error("invalid address hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
