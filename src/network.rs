//! Resolution of the network a contract was just deployed to.

use deploy_addresses_common::{AddressHexExt, DeployedContract, NetworkId};
use log::{debug, info, warn};

/// Finds the network whose recorded deployment is at the contract's current
/// address.
///
/// Networks are inspected in [`NetworkId`] order and the last match wins.
/// When no network matches, the sentinel [`NetworkId::unknown`] (`"0"`) is
/// returned, and the address ends up recorded under that key.
pub fn resolve_network_id(contract: &DeployedContract) -> NetworkId {
    let mut network_id = None;
    for (id, network) in &contract.networks {
        debug!(
            "network id: {} | address: {} | current address: {}",
            id,
            network.address.to_checksum(),
            contract.address.to_checksum(),
        );
        if network.address == contract.address {
            network_id = Some(id);
        }
    }

    let network_id = network_id.cloned().unwrap_or_else(NetworkId::unknown);
    if network_id.is_unknown() {
        warn!(
            "using sentinel network id {} for {} at {}",
            network_id,
            contract.name,
            contract.address.to_checksum(),
        );
    } else {
        info!("network id: {}", network_id);
    }
    network_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploy_addresses_common::{parse_address, Address, Network};
    use std::collections::BTreeMap;

    fn address(s: &str) -> Address {
        parse_address(s).unwrap()
    }

    fn deployed(current: &str, networks: &[(&str, &str)]) -> DeployedContract {
        DeployedContract {
            name: "NftMarketPlace".to_string(),
            address: address(current),
            networks: networks
                .iter()
                .map(|(id, addr)| {
                    (
                        NetworkId::from(*id),
                        Network {
                            address: address(addr),
                            transaction_hash: None,
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn resolves_matching_network() {
        let contract = deployed(
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            &[
                ("4", "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
                ("5777", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            ],
        );

        assert_eq!(resolve_network_id(&contract), NetworkId::from("5777"));
    }

    #[test]
    fn falls_back_to_unknown_network() {
        let contract = deployed(
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            &[("5777", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")],
        );

        assert_eq!(resolve_network_id(&contract), NetworkId::from("0"));
        assert_eq!(
            resolve_network_id(&deployed(
                "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
                &[]
            )),
            NetworkId::unknown(),
        );
    }

    #[test]
    fn last_matching_network_wins() {
        let contract = deployed(
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            &[
                ("5777", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
                ("1337", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
                ("4", "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
            ],
        );

        assert_eq!(resolve_network_id(&contract), NetworkId::from("5777"));
    }
}
