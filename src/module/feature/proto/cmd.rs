use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    ensure_field,
    proto::{cmd::impl_cmd, CommandName, Decode, Response},
    util::{maybe_int, truthy, MaybeInt},
    Error, Result,
};

impl_cmd!(GetFeatures, FeatureList, Features);

#[derive(Debug, Default, Serialize)]
pub struct GetFeatures;

impl_cmd!(UpdateFeature, FeatureList, UpdateFeature);

#[derive(Debug, Serialize)]
pub struct UpdateFeature {
    pub feature: String,
    pub value: MaybeInt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub feature: String,
    pub enabled: bool,
    pub value: MaybeInt,
    /// Remaining keys of the record, e.g. the option lists some features carry.
    pub details: Map<String, Value>,
}

impl FeatureRecord {
    pub fn from_json(cmd: CommandName, v: Value) -> Result<Self> {
        let mut obj = match v {
            Value::Object(obj) => obj,
            other => {
                return Err(Error::InvalidData(
                    format!("{} entry is not an object: {}", cmd, other).into(),
                ))
            }
        };

        let feature = match ensure_field!(obj, cmd, "feature") {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let enabled = truthy(ensure_field!(obj, cmd, "enabled"));
        let value = maybe_int(ensure_field!(obj, cmd, "value"));

        obj.remove("feature");
        obj.remove("enabled");
        obj.remove("value");

        Ok(FeatureRecord {
            feature,
            enabled,
            value,
            details: obj,
        })
    }
}

/// Feature entries exactly as the camera lists them; only the list shape is checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureList(pub Vec<Value>);

impl FeatureList {
    /// Typed view of the entries. Every entry needs `feature`, `enabled` and `value`.
    pub fn records(self, cmd: CommandName) -> Result<Vec<FeatureRecord>> {
        self.0
            .into_iter()
            .map(|v| FeatureRecord::from_json(cmd, v))
            .collect()
    }
}

impl Decode for FeatureList {
    fn decode(cmd: CommandName, resp: Response) -> Result<Self> {
        match resp.into_field(cmd, "features")? {
            Value::Array(entries) => Ok(FeatureList(entries)),

            other => Err(Error::InvalidData(
                format!("{} features is not a list: {}", cmd, other).into(),
            )),
        }
    }
}
