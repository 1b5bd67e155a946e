use std::borrow::Cow;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    IO(#[from] std::io::Error),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{field}` missing in {cmd} response")]
    MissingField {
        cmd: Cow<'static, str>,
        field: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(Cow<'static, str>),

    #[error("no sensors are currently available")]
    NoSensors,
}

macro_rules! ensure_field {
    ($obj:expr, $cmd:expr, $field:literal) => {
        match $obj.get($field) {
            Some(v) => v,
            None => {
                return Err($crate::Error::MissingField {
                    cmd: $cmd.as_str().into(),
                    field: $field,
                })
            }
        }
    };
}

pub(crate) use ensure_field;
