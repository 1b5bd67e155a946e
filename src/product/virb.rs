use std::sync::Arc;

use serde_json::Value;

use crate::{
    client::{transport::Transport, Client, Connection},
    module::{
        device::{proto::cmd::DeviceInfo, Device},
        feature::{FeatureRecord, FeatureSet, Features},
        media::{Media, MediaEntries, DEFAULT_STREAM_TYPE},
        recording::Recording,
        sensor::{SensorReadings, Sensors},
    },
    network::Endpoint,
    proto::Response,
    util::MaybeInt,
    Result,
};

/// A VIRB camera reached over its wifi control endpoint.
pub struct Virb<C: Client> {
    client: Arc<C>,

    pub device: Device<C>,
    pub features: Features<C>,
    pub sensors: Sensors<C>,
    pub media: Media<C>,
    pub recording: Recording<C>,
}

impl Virb<Connection> {
    pub fn connect(endpoint: Endpoint) -> Result<Self> {
        Connection::connect(endpoint).map(|conn| Self::new(Arc::new(conn)))
    }
}

impl<T: Transport> Virb<Connection<T>> {
    pub fn endpoint(&self) -> &Endpoint {
        self.client.endpoint()
    }
}

impl<C: Client> Virb<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            device: Device::new(client.clone()),
            features: Features::new(client.clone()),
            sensors: Sensors::new(client.clone()),
            media: Media::new(client.clone()),
            recording: Recording::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn requests(&self) -> u64 {
        self.client.requests()
    }

    pub fn status(&self) -> Result<Response> {
        self.device.status()
    }

    pub fn device_info(&self) -> Result<DeviceInfo> {
        self.device.device_info()
    }

    pub fn features(&self) -> Result<Vec<Value>> {
        self.features.list()
    }

    pub fn feature_records(&self) -> Result<Vec<FeatureRecord>> {
        self.features.records()
    }

    pub fn get_features(&self) -> Result<FeatureSet> {
        self.features.get()
    }

    pub fn set_feature(
        &self,
        feature: impl Into<String>,
        value: impl Into<MaybeInt>,
    ) -> Result<Vec<Value>> {
        self.features.set(feature, value)
    }

    pub fn sensors(&self) -> Result<SensorReadings> {
        self.sensors.read()
    }

    pub fn locate(&self) -> Result<bool> {
        self.device.locate()
    }

    pub fn found(&self) -> Result<bool> {
        self.device.found()
    }

    pub fn media_dir_list(&self) -> Result<Response> {
        self.media.dir_list()
    }

    pub fn media_list(&self, path: Option<&str>) -> Result<MediaEntries> {
        self.media.list(path)
    }

    /// Live preview url for the default `rtp` stream.
    pub fn live_preview(&self) -> Result<String> {
        self.media.live_preview(DEFAULT_STREAM_TYPE)
    }

    pub fn snap_picture(&self, self_timer: u32) -> Result<Response> {
        self.media.snap_picture(self_timer)
    }

    pub fn start_recording(&self) -> Result<bool> {
        self.recording.start()
    }

    pub fn stop_recording(&self) -> Result<bool> {
        self.recording.stop()
    }

    pub fn stop_still_recording(&self) -> Result<bool> {
        self.recording.stop_still()
    }
}
