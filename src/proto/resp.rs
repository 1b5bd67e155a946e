use super::{CommandName, Decode, Response};
use crate::{util::as_int, Error, Result};

/// `{"result": "1"}` style acknowledgement; any non-zero integer means success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultFlag(pub bool);

impl From<ResultFlag> for bool {
    #[inline]
    fn from(v: ResultFlag) -> Self {
        v.0
    }
}

impl Decode for ResultFlag {
    fn decode(cmd: CommandName, resp: Response) -> Result<Self> {
        let result = resp.into_field(cmd, "result")?;
        as_int(&result).map(|i| ResultFlag(i != 0)).ok_or_else(|| {
            Error::InvalidData(format!("non-integer {} result: {}", cmd, result).into())
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn flag(body: serde_json::Value) -> Result<ResultFlag> {
        ResultFlag::decode(CommandName::Locate, Response::Json(body))
    }

    #[test]
    fn result_strings_and_numbers() {
        assert_eq!(flag(json!({"result": "1"})).unwrap(), ResultFlag(true));
        assert_eq!(flag(json!({"result": "0"})).unwrap(), ResultFlag(false));
        assert_eq!(flag(json!({"result": 1})).unwrap(), ResultFlag(true));
        assert_eq!(flag(json!({"result": 0})).unwrap(), ResultFlag(false));
    }

    #[test]
    fn result_must_be_integer() {
        assert!(matches!(
            flag(json!({"result": "yes"})),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            flag(json!({"status": 1})),
            Err(Error::MissingField { field: "result", .. })
        ));
    }
}
