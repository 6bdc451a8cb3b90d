//! Records a freshly deployed contract in the front end's network mapping.

use anyhow::{Context, Result};
use clap::Parser;
use deploy_addresses::{
    parse_address, AddressRecorder, Artifact, DeployStep, Deployment, NetworkId, UpdateFrontend,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "update-frontend")]
#[command(about = "Records a deployed contract's address in the front end's network mapping", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the truffle artifact of the deployed contract.
    #[arg(
        long,
        env = "CONTRACT_ARTIFACT",
        default_value = "build/contracts/NftMarketPlace.json"
    )]
    artifact: PathBuf,

    /// Path to the network mapping JSON file read by the front end.
    #[arg(
        long,
        env = "FRONT_END_CONTRACTS_FILE",
        default_value = "../next-js/constants/networkMapping.json"
    )]
    output: PathBuf,

    /// Address the contract was just deployed at.
    #[arg(long, env = "CONTRACT_ADDRESS")]
    address: Option<String>,

    /// Network the contract was just deployed to, used to look up its address
    /// in the artifact when no address is given.
    #[arg(long, env = "NETWORK_ID")]
    network_id: Option<String>,

    /// Key to record the contract under, defaults to the artifact's contract
    /// name.
    #[arg(long, env = "CONTRACT_NAME")]
    contract_name: Option<String>,

    /// Deployment tags to run, comma separated.
    #[arg(long, env = "DEPLOY_TAGS", value_delimiter = ',', default_value = "all")]
    tags: Vec<String>,

    /// Skip updating the front end.
    #[arg(
        long,
        env = "IS_FRONT_END_UP_TO_DATE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    skip: bool,

    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn deployment(&self) -> Result<Deployment> {
        if let Some(address) = &self.address {
            let address = parse_address(address)
                .with_context(|| format!("invalid contract address '{}'", address))?;
            return Ok(Deployment::Address(address));
        }
        Ok(match &self.network_id {
            Some(network_id) => Deployment::Network(NetworkId::new(network_id.as_str())),
            None => Deployment::Only,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).context("setting up logger")?;

    let deployment = args.deployment()?;
    let contract = Artifact::load(&args.artifact)
        .and_then(|artifact| artifact.deployed(deployment))
        .with_context(|| format!("failed to load deployment from {}", args.artifact.display()))?;

    let mut recorder = AddressRecorder::new(&args.output);
    if let Some(name) = &args.contract_name {
        recorder = recorder.contract_name(name);
    }

    UpdateFrontend::new(recorder, contract)
        .up_to_date(args.skip)
        .run_tagged(&args.tags)
        .with_context(|| format!("failed to update {}", args.output.display()))?;

    Ok(())
}
