use serde_json::{Map, Value};

use crate::{
    proto::{self, Command, Decode, Response},
    Result,
};

pub mod connection;
pub mod transport;

pub use connection::Connection;

pub trait Client {
    /// Posts `{command: cmd, ...params}` and returns the parsed body.
    fn post(&self, cmd: &str, params: Map<String, Value>) -> Result<Response>;

    /// Number of requests issued so far.
    fn requests(&self) -> u64;

    fn send_cmd<CMD: Command>(&self, cmd: CMD) -> Result<CMD::Response> {
        let params = proto::params(&cmd)?;
        let resp = self.post(CMD::NAME.as_str(), params)?;
        <CMD::Response as Decode>::decode(CMD::NAME, resp)
    }
}
