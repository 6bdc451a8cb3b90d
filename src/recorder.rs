//! Implementation of the address recorder.

use crate::errors::RecordError;
use crate::mapping::{AddressMap, Upsert, DEFAULT_CONTRACT_NAME};
use crate::network::resolve_network_id;
use deploy_addresses_common::{AddressHexExt, DeployedContract, NetworkId};
use log::info;
use std::path::PathBuf;

/// Records deployed contract addresses in an address map file.
#[derive(Clone, Debug)]
pub struct AddressRecorder {
    path: PathBuf,
    contract_name: Option<String>,
}

/// What was recorded for a deployed contract.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recorded {
    /// The network the address was recorded under.
    pub network_id: NetworkId,
    /// The contract key in the address map.
    pub contract: String,
    /// The recorded EIP-55 address.
    pub address: String,
    /// How the address map changed.
    pub outcome: Upsert,
}

impl AddressRecorder {
    /// Create a new recorder for the address map at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AddressRecorder {
            path: path.into(),
            contract_name: None,
        }
    }

    /// Set an override for the contract key used in the address map. By
    /// default the deployed contract's name is used.
    pub fn contract_name(mut self, name: impl Into<String>) -> Self {
        self.contract_name = Some(name.into());
        self
    }

    /// The key the contract is recorded under in the address map.
    pub fn contract_key<'a>(&'a self, contract: &'a DeployedContract) -> &'a str {
        match &self.contract_name {
            Some(name) => name.as_str(),
            None if contract.name.is_empty() => DEFAULT_CONTRACT_NAME,
            None => contract.name.as_str(),
        }
    }

    /// Records the contract's current address under its current network.
    ///
    /// The address map is read, updated and written back to the same path,
    /// even when the address was already recorded.
    pub fn record(&self, contract: &DeployedContract) -> Result<Recorded, RecordError> {
        let network_id = resolve_network_id(contract);
        let key = self.contract_key(contract);
        let address = contract.address.to_checksum();

        let mut addresses = AddressMap::load(&self.path)?;
        let outcome = addresses.upsert_address(&network_id, key, &address);
        match &outcome {
            Upsert::Inserted => info!("recorded {} at {} on network {}", key, address, network_id),
            Upsert::Replaced(previous) => info!(
                "replaced {} address {:?} with {} on network {}",
                key, previous, address, network_id,
            ),
            Upsert::Unchanged => info!(
                "{} at {} already recorded on network {}",
                key, address, network_id,
            ),
        }
        addresses.save(&self.path)?;

        Ok(Recorded {
            network_id,
            contract: key.to_string(),
            address,
            outcome,
        })
    }
}
