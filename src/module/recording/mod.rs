use super::impl_module;
use crate::{client::Client, Result};

pub mod proto;
use proto::cmd::{StartRecording, StopRecording, StopStillRecording};

impl_module!(Recording);

impl<C: Client> Recording<C> {
    pub fn start(&self) -> Result<bool> {
        self.client.send_cmd(StartRecording).map(From::from)
    }

    pub fn stop(&self) -> Result<bool> {
        self.client.send_cmd(StopRecording).map(From::from)
    }

    pub fn stop_still(&self) -> Result<bool> {
        self.client.send_cmd(StopStillRecording).map(From::from)
    }
}
