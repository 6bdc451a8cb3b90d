#![deny(missing_docs, unsafe_code)]

//! Post-deployment step recording where a contract was deployed.
//!
//! After a contract is deployed, its truffle artifact knows the address of
//! every deployment. The front end, on the other hand, reads a small JSON
//! file mapping network IDs to contract addresses. This crate keeps the
//! latter up to date from the former:
//!
//! ```no_run
//! use deploy_addresses::{AddressRecorder, Artifact, Deployment};
//!
//! let contract = Artifact::load("build/contracts/NftMarketPlace.json")?
//!     .deployed(Deployment::Network("5777".into()))?;
//! AddressRecorder::new("../next-js/constants/networkMapping.json").record(&contract)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod hook;
pub mod mapping;
pub mod network;
pub mod recorder;

pub use crate::hook::{DeployStep, UpdateFrontend};
pub use crate::mapping::{AddressMap, ContractAddresses, Upsert};
pub use crate::network::resolve_network_id;
pub use crate::recorder::{AddressRecorder, Recorded};
pub use deploy_addresses_common::truffle::Deployment;
pub use deploy_addresses_common::{
    parse_address, Address, AddressHexExt, Artifact, DeployedContract, Network, NetworkId,
};
