use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Address the camera answers on when we are joined to its access point.
pub const DEFAULT_HOST: &str = "192.168.0.1";
pub const DEFAULT_PORT: u16 = 80;

const COMMAND_PATH: &str = "virb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn command_url(&self) -> String {
        format!("http://{}:{}/{}", self.host, self.port, COMMAND_PATH)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Accepts `host` or `host:port`; ipv6 literals go in brackets, as in `[::1]:8080`.
impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidData("empty endpoint".into()));
        }

        let (host, port) = if s.starts_with('[') {
            let close = s
                .find(']')
                .ok_or_else(|| Error::InvalidData(format!("unclosed bracket in {}", s).into()))?;
            let port = match &s[close + 1..] {
                "" => None,
                rest => match rest.strip_prefix(':') {
                    Some(port) => Some(port),
                    None => {
                        return Err(Error::InvalidData(
                            format!("unexpected {:?} after host in {}", rest, s).into(),
                        ))
                    }
                },
            };
            (&s[..=close], port)
        } else {
            match s.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (s, None),
            }
        };

        if host.is_empty() || host == "[]" {
            return Err(Error::InvalidData(
                format!("missing host in endpoint {}", s).into(),
            ));
        }

        if !host.starts_with('[') && host.contains(':') {
            return Err(Error::InvalidData(
                format!("ipv6 host must be bracketed in {}", s).into(),
            ));
        }

        let port = match port {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| Error::InvalidData(format!("invalid port in {}", s).into()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self::new(host, port))
    }
}
