use serde::Serialize;
use serde_json::Value;

use crate::{
    proto::{cmd::impl_cmd, CommandName, Decode, Response},
    Error, Result,
};

pub const DEFAULT_STREAM_TYPE: &str = "rtp";

impl_cmd!(MediaDirList, Response, MediaDirList);

#[derive(Debug, Default, Serialize)]
pub struct MediaDirList;

impl_cmd!(MediaList, MediaEntries, MediaList);

#[derive(Debug, Default, Serialize)]
pub struct MediaList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Media descriptors as listed by the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEntries(pub Value);

impl Decode for MediaEntries {
    fn decode(cmd: CommandName, resp: Response) -> Result<Self> {
        resp.into_field(cmd, "media").map(MediaEntries)
    }
}

impl_cmd!(LivePreview, StreamUrl, LivePreview);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePreview {
    pub stream_type: String,
}

impl Default for LivePreview {
    fn default() -> Self {
        Self {
            stream_type: DEFAULT_STREAM_TYPE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamUrl(pub String);

impl Decode for StreamUrl {
    fn decode(cmd: CommandName, resp: Response) -> Result<Self> {
        match resp.into_field(cmd, "url")? {
            Value::String(url) => Ok(StreamUrl(url)),
            other => Err(Error::InvalidData(
                format!("{} url is not a string: {}", cmd, other).into(),
            )),
        }
    }
}

impl_cmd!(SnapPicture, Response, SnapPicture);

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapPicture {
    /// seconds
    pub self_timer: u32,
}
