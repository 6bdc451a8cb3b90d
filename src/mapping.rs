//! The address map read by the front end.
//!
//! The map is a JSON object keyed by network ID, where each network holds the
//! addresses of one or more contracts:
//!
//! ```json
//! {"5777":{"NftMarketPlace":["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"]}}
//! ```
//!
//! Although addresses are stored as a list, updating an existing network
//! replaces the list with a single address string. Front ends already in use
//! read both shapes, so this behaviour is kept as-is and both shapes are
//! round-tripped unchanged.
//!
//! Keys keep the order a JavaScript object would give them, so re-recording
//! an address leaves the file byte for byte as the front end wrote it:
//! integer network ids first in numeric order, then every other key in
//! insertion order.

use crate::errors::MappingError;
use deploy_addresses_common::NetworkId;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::mem;
use std::path::Path;

/// The contract key used when a deployed contract has no name.
pub const DEFAULT_CONTRACT_NAME: &str = "NftMarketPlace";

/// Contract addresses for a single network, keyed by contract name.
pub type NetworkContracts = IndexMap<String, ContractAddresses>;

/// Mapping from network ID to the contracts deployed on it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressMap(IndexMap<NetworkId, NetworkContracts>);

/// The recorded address(es) of a contract on a network.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractAddresses {
    /// A list of addresses, as written when a network is first recorded.
    List(Vec<String>),
    /// A single address, as written when a network's address is replaced.
    Single(String),
}

impl ContractAddresses {
    /// Returns `true` if the address is already recorded.
    ///
    /// Lists are checked for membership while single addresses are checked
    /// for containment, so `"0xABCD"` includes `"0xABC"`.
    pub fn includes(&self, address: &str) -> bool {
        match self {
            ContractAddresses::List(addresses) => addresses.iter().any(|a| a == address),
            ContractAddresses::Single(recorded) => recorded.contains(address),
        }
    }
}

/// The outcome of recording an address in an [`AddressMap`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Upsert {
    /// The network or contract was not in the map and was added.
    Inserted,
    /// The recorded address was replaced; holds what was previously recorded.
    Replaced(ContractAddresses),
    /// The address was already recorded; the map was not modified.
    Unchanged,
}

impl AddressMap {
    /// Creates a new empty address map.
    pub fn new() -> Self {
        AddressMap::default()
    }

    /// Parse an address map from JSON.
    pub fn from_json<S>(json: S) -> Result<Self, MappingError>
    where
        S: AsRef<str>,
    {
        let mut map: AddressMap = serde_json::from_str(json.as_ref())?;
        map.sort_networks();
        Ok(map)
    }

    /// Loads an address map from disk.
    pub fn load<P>(path: P) -> Result<Self, MappingError>
    where
        P: AsRef<Path>,
    {
        let json = fs::read_to_string(path)?;
        AddressMap::from_json(json)
    }

    /// Serializes the address map into compact JSON.
    pub fn to_json(&self) -> Result<String, MappingError> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Writes the address map to disk, replacing the file's contents.
    ///
    /// The file is overwritten in place, a concurrent reader or a crash in
    /// the middle of the write may observe a truncated file.
    pub fn save<P>(&self, path: P) -> Result<(), MappingError>
    where
        P: AsRef<Path>,
    {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Looks up the contracts recorded for a network.
    pub fn network(&self, network_id: &NetworkId) -> Option<&NetworkContracts> {
        self.0.get(network_id)
    }

    /// Looks up the addresses recorded for a contract on a network.
    pub fn get(&self, network_id: &NetworkId, contract: &str) -> Option<&ContractAddresses> {
        self.network(network_id)?.get(contract)
    }

    /// Records a contract address for a network.
    ///
    /// New networks and contracts get a single element list. When the
    /// contract is already recorded on the network with a different address,
    /// the recorded value is overwritten with the plain address string rather
    /// than appended to.
    pub fn upsert_address(
        &mut self,
        network_id: &NetworkId,
        contract: &str,
        address: &str,
    ) -> Upsert {
        if !self.0.contains_key(network_id) {
            self.0
                .insert(network_id.clone(), new_contracts(contract, address));
            self.sort_networks();
            return Upsert::Inserted;
        }

        match self.0[network_id].entry(contract.to_string()) {
            Entry::Occupied(o) if o.get().includes(address) => Upsert::Unchanged,
            Entry::Occupied(mut o) => {
                let previous = mem::replace(
                    o.get_mut(),
                    ContractAddresses::Single(address.to_string()),
                );
                Upsert::Replaced(previous)
            }
            Entry::Vacant(v) => {
                v.insert(ContractAddresses::List(vec![address.to_string()]));
                Upsert::Inserted
            }
        }
    }

    fn sort_networks(&mut self) {
        // `sort_by` is stable, non-integer ids stay in insertion order.
        self.0.sort_by(|a, _, b, _| a.key_order(b));
    }
}

fn new_contracts(contract: &str, address: &str) -> NetworkContracts {
    let mut contracts = IndexMap::new();
    contracts.insert(
        contract.to_string(),
        ContractAddresses::List(vec![address.to_string()]),
    );
    contracts
}
