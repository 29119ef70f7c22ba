//! Destination layout on the device mount.

use std::path::{Path, PathBuf};

/// Top-level directory on the device volume.
pub const GARMIN_DIR: &str = "GARMIN";

/// Application directory under [`GARMIN_DIR`]; receives `.prg` files.
pub const APPS_DIR: &str = "Apps";

/// Settings directory under [`APPS_DIR`]; receives `.set` files.
pub const SETTINGS_DIR: &str = "Settings";

/// Destination directories resolved against a device mount root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLayout {
    root: PathBuf,
}

impl DeviceLayout {
    /// Creates a layout rooted at the given mount path.
    pub fn new(mount_path: impl Into<PathBuf>) -> Self {
        Self {
            root: mount_path.into(),
        }
    }

    /// Returns the mount root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `<root>/GARMIN/Apps`.
    pub fn apps_dir(&self) -> PathBuf {
        self.root.join(GARMIN_DIR).join(APPS_DIR)
    }

    /// Returns `<root>/GARMIN/Apps/Settings`.
    pub fn settings_dir(&self) -> PathBuf {
        self.apps_dir().join(SETTINGS_DIR)
    }
}
