use super::impl_module;
use crate::{client::Client, proto::Response, Result};

pub mod proto;
use proto::cmd::{DeviceInfo, Found, GetDeviceInfo, Locate, Status};

impl_module!(Device);

impl<C: Client> Device<C> {
    pub fn status(&self) -> Result<Response> {
        self.client.send_cmd(Status)
    }

    pub fn device_info(&self) -> Result<DeviceInfo> {
        self.client.send_cmd(GetDeviceInfo)
    }

    /// Starts the camera's lost-device sound and flash.
    pub fn locate(&self) -> Result<bool> {
        self.client.send_cmd(Locate).map(From::from)
    }

    /// Stops what `locate` started.
    pub fn found(&self) -> Result<bool> {
        self.client.send_cmd(Found).map(From::from)
    }
}
