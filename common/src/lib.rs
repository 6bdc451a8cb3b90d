#![deny(missing_docs, unsafe_code)]

//! Crate for common types shared between the `deploy-addresses` recorder and
//! anything else that needs to read Truffle deployment artifacts.

pub mod errors;
pub mod hash;
pub mod network;
pub mod str;
pub mod truffle;

pub use crate::network::NetworkId;
pub use crate::str::{parse_address, AddressHexExt};
pub use crate::truffle::{Artifact, DeployedContract, Network};
pub use web3::types::Address;
