use serde::Serialize;

use crate::proto::{cmd::impl_cmd, ResultFlag};

impl_cmd!(StartRecording, ResultFlag, StartRecording);

#[derive(Debug, Default, Serialize)]
pub struct StartRecording;

impl_cmd!(StopRecording, ResultFlag, StopRecording);

#[derive(Debug, Default, Serialize)]
pub struct StopRecording;

// ends a time-lapse / burst still capture
impl_cmd!(StopStillRecording, ResultFlag, StopStillRecording);

#[derive(Debug, Default, Serialize)]
pub struct StopStillRecording;
