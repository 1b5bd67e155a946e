use super::impl_module;
use crate::{client::Client, proto::Response, Result};

pub mod proto;
pub use proto::cmd::{MediaEntries, DEFAULT_STREAM_TYPE};
use proto::cmd::{LivePreview, MediaDirList, MediaList, SnapPicture};

impl_module!(Media);

impl<C: Client> Media<C> {
    pub fn dir_list(&self) -> Result<Response> {
        self.client.send_cmd(MediaDirList)
    }

    /// Lists media, optionally scoped to one of the directories from `dir_list`.
    pub fn list(&self, path: Option<&str>) -> Result<MediaEntries> {
        let cmd = MediaList {
            path: path.filter(|p| !p.is_empty()).map(ToOwned::to_owned),
        };

        self.client.send_cmd(cmd)
    }

    /// Returns the url of the live preview stream.
    pub fn live_preview(&self, stream_type: &str) -> Result<String> {
        let cmd = LivePreview {
            stream_type: stream_type.to_owned(),
        };

        self.client.send_cmd(cmd).map(|url| url.0)
    }

    pub fn snap_picture(&self, self_timer: u32) -> Result<Response> {
        self.client.send_cmd(SnapPicture { self_timer })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::module::testing;

    #[test]
    fn dir_list_is_raw() {
        let body = r#"{"mediaDirs":[{"name":"100_VIRB","type":"video"}]}"#;
        let client = testing::client(&[body]);
        let media = Media::new(client.clone());

        assert_eq!(
            media.dir_list().unwrap(),
            Response::Json(json!({"mediaDirs": [{"name": "100_VIRB", "type": "video"}]}))
        );
        assert_eq!(testing::sent(&client), vec![json!({"command": "mediaDirList"})]);
    }

    #[test]
    fn list_with_and_without_path() {
        let client = testing::client(&[
            r#"{"media":[{"name":"VIRB0001.MP4"}]}"#,
            r#"{"media":[]}"#,
            r#"{"media":[]}"#,
        ]);
        let media = Media::new(client.clone());

        let entries = media.list(None).unwrap();
        assert_eq!(entries.0, json!([{"name": "VIRB0001.MP4"}]));
        media.list(Some("/DCIM/100_VIRB")).unwrap();
        media.list(Some("")).unwrap();

        assert_eq!(
            testing::sent(&client),
            vec![
                json!({"command": "mediaList"}),
                json!({"command": "mediaList", "path": "/DCIM/100_VIRB"}),
                json!({"command": "mediaList"}),
            ]
        );
    }

    #[test]
    fn live_preview_url() {
        let client = testing::client(&[r#"{"result":1,"url":"rtsp://192.168.0.1/livePreviewStream"}"#]);
        let media = Media::new(client.clone());

        let url = media.live_preview(DEFAULT_STREAM_TYPE).unwrap();
        assert_eq!(url, "rtsp://192.168.0.1/livePreviewStream");
        assert_eq!(
            testing::sent(&client),
            vec![json!({"command": "livePreview", "streamType": "rtp"})]
        );
    }

    #[test]
    fn snap_picture_sends_timer() {
        let client = testing::client(&[r#"{"result":1,"media":{"name":"VIRB0002.JPG"}}"#]);
        let media = Media::new(client.clone());

        let resp = media.snap_picture(0).unwrap();
        assert!(resp.as_json().is_some());
        assert_eq!(
            testing::sent(&client),
            vec![json!({"command": "snapPicture", "selfTimer": 0})]
        );
    }
}
