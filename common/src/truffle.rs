//! Module for reading and examining deployment data produced by truffle.
//!
//! Truffle writes one JSON artifact per contract. We parse the following
//! fields and ignore everything else (`abi`, `bytecode`, ...):
//!
//! - `contractName`: name of the contract (optional);
//! - `networks`: info about known contract deployments (optional);
//! - `updatedAt`: when the artifact was last written (optional).

use crate::errors::ArtifactError;
use crate::network::NetworkId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use web3::types::{Address, H256};

/// Represents a truffle artifact.
#[derive(Clone, Debug, Deserialize)]
#[serde(default = "Artifact::empty")]
pub struct Artifact {
    /// The contract name. Unnamed contracts have an empty string as their name.
    #[serde(rename = "contractName")]
    pub contract_name: String,
    /// The configured networks by network ID for the contract.
    pub networks: BTreeMap<NetworkId, Network>,
    /// Timestamp of the last time truffle wrote this artifact.
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl Artifact {
    /// Creates an empty artifact instance.
    pub fn empty() -> Self {
        Artifact {
            contract_name: String::new(),
            networks: BTreeMap::new(),
            updated_at: None,
        }
    }

    /// Parse a truffle artifact from JSON.
    pub fn from_json<S>(json: S) -> Result<Self, ArtifactError>
    where
        S: AsRef<str>,
    {
        let artifact = serde_json::from_str(json.as_ref())?;
        Ok(artifact)
    }

    /// Loads a truffle artifact from disk.
    pub fn load<P>(path: P) -> Result<Self, ArtifactError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let artifact = serde_json::from_reader(BufReader::new(file))?;
        Ok(artifact)
    }

    /// Selects the current deployment of the contract, producing the view of
    /// the artifact that the deployment framework hands to migration scripts.
    pub fn deployed(self, deployment: Deployment) -> Result<DeployedContract, ArtifactError> {
        let address = match deployment {
            Deployment::Address(address) => address,
            Deployment::Network(network_id) => {
                self.networks
                    .get(&network_id)
                    .ok_or_else(|| {
                        ArtifactError::UnknownNetwork(
                            self.contract_name.clone(),
                            network_id.to_string(),
                        )
                    })?
                    .address
            }
            Deployment::Only => {
                let mut networks = self.networks.values();
                match (networks.next(), networks.len()) {
                    (Some(network), 0) => network.address,
                    (Some(_), remaining) => {
                        return Err(ArtifactError::AmbiguousDeployment(
                            self.contract_name,
                            remaining + 1,
                        ))
                    }
                    (None, _) => return Err(ArtifactError::NotDeployed(self.contract_name)),
                }
            }
        };

        Ok(DeployedContract {
            name: self.contract_name,
            address,
            networks: self.networks,
        })
    }
}

/// A contract's network configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Network {
    /// The address at which the contract is deployed on this network.
    pub address: Address,
    /// The hash of the transaction that deployed the contract on this network.
    #[serde(rename = "transactionHash", default)]
    pub transaction_hash: Option<H256>,
}

/// How to determine which of an artifact's deployments is the current one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Deployment {
    /// The contract was just deployed at this address.
    Address(Address),
    /// The contract was just deployed to this network.
    Network(NetworkId),
    /// The artifact only knows of a single deployment, which is the current
    /// one.
    Only,
}

/// A deployed contract: its current address along with every deployment
/// recorded in its artifact.
#[derive(Clone, Debug)]
pub struct DeployedContract {
    /// The contract name.
    pub name: String,
    /// The address of the current deployment.
    pub address: Address,
    /// The deployments recorded in the artifact by network ID.
    pub networks: BTreeMap<NetworkId, Network>,
}
