//! Deployment steps run after contracts are deployed.
//!
//! Deployment tools group their steps by tags so that a subset of them can be
//! run, for example only the steps touching the front end. A step runs when
//! any of the requested tags is one of its own.

use crate::errors::RecordError;
use crate::recorder::{AddressRecorder, Recorded};
use deploy_addresses_common::DeployedContract;
use log::info;

/// A step of a deployment run.
pub trait DeployStep {
    /// The error returned when the step fails.
    type Error;

    /// A human-readable name for the step.
    fn name(&self) -> &str;

    /// The tags the step is registered under.
    fn tags(&self) -> &[&str];

    /// Executes the step.
    fn run(&self) -> Result<(), Self::Error>;

    /// Returns `true` if any of the requested tags selects this step.
    fn is_selected_by<S>(&self, requested: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        requested
            .iter()
            .any(|tag| self.tags().contains(&tag.as_ref()))
    }

    /// Runs the step if it is selected by the requested tags. Returns whether
    /// the step was run.
    fn run_tagged<S>(&self, requested: &[S]) -> Result<bool, Self::Error>
    where
        S: AsRef<str>,
    {
        if !self.is_selected_by(requested) {
            info!("skipping {}, not selected by tags", self.name());
            return Ok(false);
        }
        self.run()?;
        Ok(true)
    }
}

/// Deployment step updating the front end's address map with a freshly
/// deployed contract.
#[derive(Clone, Debug)]
pub struct UpdateFrontend {
    recorder: AddressRecorder,
    contract: DeployedContract,
    up_to_date: bool,
}

impl UpdateFrontend {
    /// The tags the step is registered under.
    pub const TAGS: &'static [&'static str] = &["all", "frontend"];

    /// Create a new step recording the contract with the given recorder.
    pub fn new(recorder: AddressRecorder, contract: DeployedContract) -> Self {
        UpdateFrontend {
            recorder,
            contract,
            up_to_date: false,
        }
    }

    /// Mark the front end as already up to date, turning the step into a
    /// no-op.
    pub fn up_to_date(mut self, up_to_date: bool) -> Self {
        self.up_to_date = up_to_date;
        self
    }

    /// Records the contract, returning what was recorded or `None` if the
    /// front end is already up to date.
    pub fn update(&self) -> Result<Option<Recorded>, RecordError> {
        if self.up_to_date {
            info!("front end is up to date, not updating");
            return Ok(None);
        }

        info!("Updating frontend...");
        self.recorder.record(&self.contract).map(Some)
    }
}

impl DeployStep for UpdateFrontend {
    type Error = RecordError;

    fn name(&self) -> &str {
        "update frontend"
    }

    fn tags(&self) -> &[&str] {
        Self::TAGS
    }

    fn run(&self) -> Result<(), Self::Error> {
        self.update()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::AddressMap;
    use deploy_addresses_common::truffle::Deployment;
    use deploy_addresses_common::Artifact;
    use std::fs;

    fn step(path: &std::path::Path) -> UpdateFrontend {
        let contract = Artifact::from_json(
            r#"{"contractName":"NftMarketPlace","networks":{"5777":{"address":"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"}}}"#,
        )
        .unwrap()
        .deployed(Deployment::Only)
        .unwrap();
        UpdateFrontend::new(AddressRecorder::new(path), contract)
    }

    #[test]
    fn selected_by_its_tags() {
        let step = step("networkMapping.json".as_ref());

        assert!(step.is_selected_by(&["all"]));
        assert!(step.is_selected_by(&["contracts", "frontend"]));
        assert!(!step.is_selected_by(&["contracts"]));
        assert!(!step.is_selected_by::<&str>(&[]));
    }

    #[test]
    fn runs_when_selected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        fs::write(&path, "{}").unwrap();

        assert!(step(&path).run_tagged(&["frontend"]).unwrap());

        let addresses = AddressMap::load(&path).unwrap();
        assert!(addresses.get(&"5777".into(), "NftMarketPlace").is_some());
    }

    #[test]
    fn does_not_touch_file_when_not_selected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        fs::write(&path, "{}").unwrap();

        assert!(!step(&path).run_tagged(&["contracts"]).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn up_to_date_front_end_is_not_updated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let recorded = step(&path).up_to_date(true).update().unwrap();

        assert!(recorded.is_none());
        assert!(!path.exists());
    }
}
