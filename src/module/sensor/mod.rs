use super::impl_module;
use crate::{client::Client, Result};

pub mod proto;
pub use proto::cmd::SensorReadings;
use proto::cmd::GetSensors;

impl_module!(Sensors);

impl<C: Client> Sensors<C> {
    /// Fails with [`crate::Error::NoSensors`] when nothing is connected.
    pub fn read(&self) -> Result<SensorReadings> {
        self.client.send_cmd(GetSensors)
    }
}
