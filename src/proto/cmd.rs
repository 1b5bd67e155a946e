use std::fmt;

use serde::Serialize;

use super::Decode;

macro_rules! impl_command_names {
    ($($vname:ident = $wire:literal,)+) => {
        /// Command names understood by the camera's `/virb` endpoint.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CommandName {
            $(
                $vname,
             )+
        }

        impl CommandName {
            pub const ALL: &'static [CommandName] = &[$(CommandName::$vname,)+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                        CommandName::$vname => $wire,
                     )+
                }
            }
        }

        impl std::str::FromStr for CommandName {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Ok(match s {
                    $(
                        $wire => CommandName::$vname,
                     )+
                    other => return Err($crate::Error::InvalidData(format!("unknown command {}", other).into())),
                })
            }
        }
    };
}

impl_command_names!(
    Status = "status",
    DeviceInfo = "deviceInfo",
    Features = "features",
    UpdateFeature = "updateFeature",
    Sensors = "sensors",
    Locate = "locate",
    Found = "found",
    MediaDirList = "mediaDirList",
    MediaList = "mediaList",
    LivePreview = "livePreview",
    SnapPicture = "snapPicture",
    StartRecording = "startRecording",
    StopRecording = "stopRecording",
    StopStillRecording = "stopStillRecording",
);

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command: a single request-response round trip. The serde fields of the implementor are the
/// parameters sent next to the `command` key.
pub trait Command: Serialize {
    const NAME: CommandName;

    type Response: Decode;
}

macro_rules! impl_cmd {
    ($name:ident, $resp:ty, $cname:ident) => {
        impl $crate::proto::Command for $name {
            const NAME: $crate::proto::CommandName = $crate::proto::CommandName::$cname;

            type Response = $resp;
        }
    };
}

pub(crate) use impl_cmd;
