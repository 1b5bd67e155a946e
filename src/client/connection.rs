use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{
    transport::{Http, Transport},
    Client,
};
use crate::{network::Endpoint, proto::Response, Error, Result};

const COMMAND_KEY: &str = "command";

pub struct Connection<T: Transport = Http> {
    endpoint: Endpoint,
    url: String,
    trans: T,
    requests: AtomicU64,
}

impl Connection<Http> {
    pub fn connect(endpoint: Endpoint) -> Result<Self> {
        Http::new().map(|trans| Self::with_transport(endpoint, trans))
    }
}

impl<T: Transport> Connection<T> {
    pub fn with_transport(endpoint: Endpoint, trans: T) -> Self {
        let url = endpoint.command_url();
        Self {
            endpoint,
            url,
            trans,
            requests: AtomicU64::new(0),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.trans
    }
}

impl<T: Transport> Client for Connection<T> {
    fn post(&self, cmd: &str, mut params: Map<String, Value>) -> Result<Response> {
        if cmd.is_empty() {
            return Err(Error::InvalidData("empty command name".into()));
        }

        params.insert(COMMAND_KEY.to_owned(), Value::String(cmd.to_owned()));
        let body = serde_json::to_vec(&params)?;

        let start = Instant::now();
        let reply = self.trans.post(&self.url, body)?;
        let seq = self.requests.fetch_add(1, Ordering::Relaxed) + 1;

        debug!(
            cmd,
            seq,
            status = reply.status,
            latency = ?start.elapsed(),
            "command responded"
        );
        trace!(size = reply.body.len(), "response body");

        Ok(Response::parse(reply.body))
    }

    fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}
