//! Firmware downloads from Garmin's public software host.
//!
//! The blob is handed over as is; the camera does its own checks when applying it.

use reqwest::blocking;
use tracing::{debug, info};

use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://download.garmin.com/software";
pub const DEFAULT_DEVICE: &str = "VIRB";
pub const DEFAULT_VERSION: f64 = 4.00;

pub struct Garmin {
    http: blocking::Client,
    base_url: String,
}

impl Garmin {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = blocking::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// `4.1` becomes `VIRB_410.gcd`.
    pub fn firmware_url(&self, device: &str, version: f64) -> String {
        format!(
            "{}/{}_{}.gcd",
            self.base_url,
            device,
            (version * 100.0).round() as u32
        )
    }

    pub fn fetch(&self, device: &str, version: f64) -> Result<Vec<u8>> {
        let url = self.firmware_url(device, version);
        info!(url = url.as_str(), "downloading firmware");

        let resp = self.http.get(&url).send()?.error_for_status()?;
        let data = resp.bytes()?.to_vec();

        debug!(size = data.len(), "firmware downloaded");
        Ok(data)
    }
}
