use reqwest::{blocking, header::CONTENT_TYPE};
use tracing::trace;

use crate::Result;

#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

pub trait Transport: Send + Sync {
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Reply>;
}

/// Plain blocking http, with whatever timeouts reqwest defaults to.
pub struct Http {
    inner: blocking::Client,
}

impl Http {
    pub fn new() -> Result<Self> {
        blocking::Client::builder()
            .build()
            .map(|inner| Http { inner })
            .map_err(From::from)
    }
}

impl From<blocking::Client> for Http {
    fn from(inner: blocking::Client) -> Self {
        Http { inner }
    }
}

impl Transport for Http {
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Reply> {
        trace!(url, size = body.len(), "http post");
        let resp = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(Reply { status, body })
    }
}
