use serde_json::{Map, Value};

use crate::{Error, Result};

pub mod cmd;
pub mod resp;
pub use cmd::{Command, CommandName};
pub use resp::ResultFlag;

/// Body returned by the camera.
///
/// The camera answers with JSON for every known command, but nothing stops it from returning
/// an html error page or plain text; those are kept verbatim instead of failing the call.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Json(Value),
    Text(String),
}

impl Response {
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(v) => Response::Json(v),
            Err(_) => Response::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Response::Json(v) => Some(v),
            Response::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Json(_) => None,
            Response::Text(t) => Some(t.as_str()),
        }
    }

    /// Unwraps the json body, failing if the camera replied with raw text.
    pub fn into_json(self, cmd: CommandName) -> Result<Value> {
        match self {
            Response::Json(v) => Ok(v),
            Response::Text(t) => Err(Error::InvalidData(
                format!("non-json {} response: {:?}", cmd, t).into(),
            )),
        }
    }

    /// Takes a top level field out of a json object response.
    pub fn into_field(self, cmd: CommandName, field: &'static str) -> Result<Value> {
        match self.into_json(cmd)? {
            Value::Object(mut obj) => obj.remove(field).ok_or(Error::MissingField {
                cmd: cmd.as_str().into(),
                field,
            }),
            other => Err(Error::InvalidData(
                format!("{} response is not an object: {}", cmd, other).into(),
            )),
        }
    }
}

pub trait Decode: Sized {
    fn decode(cmd: CommandName, resp: Response) -> Result<Self>;
}

impl Decode for Response {
    #[inline]
    fn decode(_cmd: CommandName, resp: Response) -> Result<Self> {
        Ok(resp)
    }
}

/// Turns a command's serde fields into the parameters merged into the request body.
pub fn params<CMD: Command>(cmd: &CMD) -> Result<Map<String, Value>> {
    match serde_json::to_value(cmd)? {
        Value::Null => Ok(Map::new()),
        Value::Object(obj) => Ok(obj),
        other => Err(Error::InvalidData(
            format!("{} params must be an object, got {}", CMD::NAME, other).into(),
        )),
    }
}
