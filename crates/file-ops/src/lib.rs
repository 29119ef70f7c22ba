//! File operations for installing Garmin apps onto a mounted device.
//!
//! Provides the fixed device layout, the three package installers
//! (zip archive, raw `.prg`, `.set` settings) and extension-based dispatch.
//! Nothing here writes to the console: progress is reported through
//! [`InstallEvent`] callbacks and failures through [`InstallError`].

mod archive;
mod dispatch;
mod error;
mod install;
mod layout;
mod types;

pub use archive::{entry_file_name, install_from_zip};
pub use dispatch::install_package;
pub use error::{DispatchError, InstallError, InstallErrorKind};
pub use install::{install_prg, install_set};
pub use layout::{APPS_DIR, DeviceLayout, GARMIN_DIR, SETTINGS_DIR};
pub use types::{InstallEvent, InstallReport, InstalledFile, PackageKind};
