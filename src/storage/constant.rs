//! Layout of the camera's storage when it is mounted as a usb mass storage device.

pub const LOG_FILE: &str = "Garmin/elog.txt";
pub const TRACK_DIR: &str = "Garmin/GPX";
pub const ACTIVITY_DIR: &str = "Garmin/Activity";
pub const MEDIA_DIR: &str = "DCIM/100_VIRB";

/// The camera applies and then deletes this file on the next boot.
pub const FIRMWARE_UPDATE_FILE: &str = "Garmin/gupdate.gcd";

pub const LOG_SEPARATOR: &str = "-----------------------------------------";

pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &["jpg", "mp4"];
