use serde::Serialize;
use serde_json::Value;

use crate::{
    proto::{cmd::impl_cmd, CommandName, Decode, Response},
    Error, Result,
};

impl_cmd!(GetSensors, SensorReadings, Sensors);

#[derive(Debug, Default, Serialize)]
pub struct GetSensors;

/// Readings of whatever ANT+/internal sensors the camera currently sees.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReadings(pub Response);

impl Decode for SensorReadings {
    fn decode(_cmd: CommandName, resp: Response) -> Result<Self> {
        let empty = match &resp {
            Response::Json(Value::Null) => true,
            Response::Json(Value::Array(a)) => a.is_empty(),
            Response::Json(Value::Object(o)) => o.is_empty(),
            Response::Json(Value::String(s)) => s.is_empty(),
            Response::Json(_) => false,
            Response::Text(t) => t.is_empty(),
        };

        if empty {
            return Err(Error::NoSensors);
        }

        Ok(SensorReadings(resp))
    }
}
