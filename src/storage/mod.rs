use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    firmware::{Garmin, DEFAULT_DEVICE},
    Result,
};

pub mod constant;
use constant::{
    ACTIVITY_DIR, DEFAULT_MEDIA_EXTENSIONS, FIRMWARE_UPDATE_FILE, LOG_FILE, MEDIA_DIR, TRACK_DIR,
};

mod log;
pub use log::{LogEntries, LogEntry};

/// A VIRB mounted as a usb mass storage device.
#[derive(Debug, Clone)]
pub struct MassStorage {
    root: PathBuf,
}

impl MassStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// GPX tracks.
    pub fn tracks(&self) -> Result<Vec<String>> {
        self.list_files(TRACK_DIR, |_| true)
    }

    /// FIT activity files.
    pub fn activities(&self) -> Result<Vec<String>> {
        self.list_files(ACTIVITY_DIR, |_| true)
    }

    /// Pictures and videos whose lowercased extension is one of `extensions`.
    pub fn media(&self, extensions: &[&str]) -> Result<Vec<String>> {
        self.list_files(MEDIA_DIR, |name| {
            Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext = ext.to_lowercase();
                    extensions.iter().any(|want| *want == ext)
                })
                .unwrap_or(false)
        })
    }

    pub fn media_default(&self) -> Result<Vec<String>> {
        self.media(DEFAULT_MEDIA_EXTENSIONS)
    }

    pub fn log_entries(&self) -> Result<LogEntries<BufReader<File>>> {
        let file = File::open(self.root.join(LOG_FILE))?;
        Ok(LogEntries::new(BufReader::new(file)))
    }

    pub fn clear_log(&self) -> Result<()> {
        File::create(self.root.join(LOG_FILE))?;
        debug!(root = ?self.root, "log cleared");
        Ok(())
    }

    pub fn firmware_update_path(&self) -> PathBuf {
        self.root.join(FIRMWARE_UPDATE_FILE)
    }

    /// Places a firmware blob where the camera picks it up on its next boot.
    ///
    /// The file is written in place and synced before it is closed. Nothing makes this atomic:
    /// unplugging or powering off the camera before this returns leaves a corrupt update file
    /// behind.
    pub fn write_firmware(&self, data: &[u8]) -> Result<PathBuf> {
        let path = self.firmware_update_path();
        warn!(path = ?path, size = data.len(), "writing firmware to device, do not reboot or power down");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
        drop(file);

        info!(path = ?path, "firmware written, reboot the camera to apply it");
        Ok(path)
    }

    /// Downloads `version` and places it on the device. Returns false without a version.
    pub fn update_firmware(&self, garmin: &Garmin, version: Option<f64>) -> Result<bool> {
        let version = match version {
            Some(v) => v,
            None => return Ok(false),
        };

        let data = garmin.fetch(DEFAULT_DEVICE, version)?;
        self.write_firmware(&data)?;
        Ok(true)
    }

    fn list_files(&self, dir: &str, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
        let path = self.root.join(dir);
        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            // follows symlinks; entries that cannot be stat'ed (dangling links) are skipped
            let is_file = fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if keep(&name) {
                names.push(name);
            }
        }

        names.sort();
        debug!(path = ?path, count = names.len(), "files listed");
        Ok(names)
    }
}
