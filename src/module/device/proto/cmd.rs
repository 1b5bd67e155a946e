use serde::Serialize;
use serde_json::Value;

use crate::{
    proto::{cmd::impl_cmd, CommandName, Decode, Response, ResultFlag},
    Result,
};

impl_cmd!(Status, Response, Status);

#[derive(Debug, Default, Serialize)]
pub struct Status;

impl_cmd!(GetDeviceInfo, DeviceInfo, DeviceInfo);

#[derive(Debug, Default, Serialize)]
pub struct GetDeviceInfo;

/// Model, firmware and identification details, passed through as reported.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo(pub Value);

impl Decode for DeviceInfo {
    fn decode(cmd: CommandName, resp: Response) -> Result<Self> {
        resp.into_field(cmd, "deviceInfo").map(DeviceInfo)
    }
}

// makes the camera beep and flash
impl_cmd!(Locate, ResultFlag, Locate);

#[derive(Debug, Default, Serialize)]
pub struct Locate;

impl_cmd!(Found, ResultFlag, Found);

#[derive(Debug, Default, Serialize)]
pub struct Found;
