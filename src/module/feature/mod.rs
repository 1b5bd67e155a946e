use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::impl_module;
use crate::{
    client::Client,
    proto::Command,
    util::MaybeInt,
    Result,
};

pub mod proto;
pub use proto::cmd::{FeatureList, FeatureRecord};
use proto::cmd::{GetFeatures, UpdateFeature};

/// Feature values keyed by feature name, split on whether the feature is currently enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureSet {
    pub enabled: BTreeMap<String, MaybeInt>,
    pub disabled: BTreeMap<String, MaybeInt>,
}

impl From<Vec<FeatureRecord>> for FeatureSet {
    fn from(records: Vec<FeatureRecord>) -> Self {
        let mut set = FeatureSet::default();
        for rec in records {
            let bucket = if rec.enabled {
                &mut set.enabled
            } else {
                &mut set.disabled
            };
            bucket.insert(rec.feature, rec.value);
        }

        set
    }
}

impl_module!(Features);

impl<C: Client> Features<C> {
    /// Feature entries as the camera reports them, whatever keys they carry.
    pub fn list(&self) -> Result<Vec<Value>> {
        self.client.send_cmd(GetFeatures).map(|list| list.0)
    }

    pub fn records(&self) -> Result<Vec<FeatureRecord>> {
        self.client
            .send_cmd(GetFeatures)?
            .records(<GetFeatures as Command>::NAME)
    }

    pub fn get(&self) -> Result<FeatureSet> {
        self.records().map(From::from)
    }

    /// Updates a single feature, returns the feature list as it is after the update.
    pub fn set(
        &self,
        feature: impl Into<String>,
        value: impl Into<MaybeInt>,
    ) -> Result<Vec<Value>> {
        let cmd = UpdateFeature {
            feature: feature.into(),
            value: value.into(),
        };

        self.client.send_cmd(cmd).map(|list| list.0)
    }
}
