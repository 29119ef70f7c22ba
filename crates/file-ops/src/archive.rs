//! Zip package installation.
//!
//! Every `.prg` entry in the archive is staged to a scoped temporary file
//! and then copied to `GARMIN/Apps/<entry base name>`. Other entries are
//! ignored. Staged files are removed as soon as their copy finishes or
//! fails.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tempfile::NamedTempFile;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::InstallError;
use crate::install::copy_to_device;
use crate::layout::DeviceLayout;
use crate::types::{InstallEvent, InstallReport, PackageKind};

const PRG_SUFFIX: &[u8] = b".prg";

/// Returns the destination file name for an archive entry, or `None` if the
/// entry is not a `.prg` payload.
///
/// The destination name is the last path component; both `/` and `\` are
/// treated as separators.
pub fn entry_file_name(entry_name: &str) -> Option<&str> {
    let bytes = entry_name.as_bytes();
    if bytes.len() < PRG_SUFFIX.len()
        || !bytes[bytes.len() - PRG_SUFFIX.len()..].eq_ignore_ascii_case(PRG_SUFFIX)
    {
        return None;
    }

    let base = entry_name.rsplit(['/', '\\']).next().unwrap_or(entry_name);
    if base.is_empty() { None } else { Some(base) }
}

/// Installs every `.prg` entry of a zip archive into `GARMIN/Apps`.
///
/// Stops at the first failure. Files copied before the failure stay on the
/// device.
pub fn install_from_zip(
    zip_file: &Path,
    layout: &DeviceLayout,
    staging_dir: &Path,
    on_event: &mut impl FnMut(InstallEvent),
) -> Result<InstallReport, InstallError> {
    on_event(InstallEvent::Unzipping);

    let open_failed = |source: ZipError| InstallError::ArchiveOpenFailed {
        path: zip_file.to_path_buf(),
        source,
    };
    let file = File::open(zip_file).map_err(|e| open_failed(ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(open_failed)?;

    tracing::debug!(
        archive = %zip_file.display(),
        entries = archive.len(),
        "opened archive"
    );

    let apps_dir = layout.apps_dir();
    let mut installed = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| InstallError::ExtractionFailed {
                entry: format!("entry #{index}"),
                source: e.into(),
            })?;

        if entry.is_dir() {
            continue;
        }
        let entry_name = entry.name().to_string();
        let Some(file_name) = entry_file_name(&entry_name) else {
            tracing::debug!(entry = %entry_name, "skipping non-app entry");
            continue;
        };

        let staged = stage_entry(&mut entry, &entry_name, staging_dir)?;

        on_event(InstallEvent::Copying {
            kind: PackageKind::Prg,
        });
        let file = copy_to_device(staged.path(), &apps_dir, file_name)?;
        on_event(InstallEvent::Installed(file.clone()));
        installed.push(file);
    }

    Ok(InstallReport {
        kind: PackageKind::Zip,
        installed,
    })
}

/// Extracts one entry into a temporary file under `staging_dir`.
fn stage_entry(
    entry: &mut impl Read,
    entry_name: &str,
    staging_dir: &Path,
) -> Result<NamedTempFile, InstallError> {
    let fail = |source: io::Error| InstallError::ExtractionFailed {
        entry: entry_name.to_string(),
        source,
    };

    let mut staged = tempfile::Builder::new()
        .prefix("gwfinstall-")
        .suffix(".prg")
        .tempfile_in(staging_dir)
        .map_err(fail)?;
    let size = io::copy(entry, &mut staged).map_err(fail)?;

    tracing::debug!(entry = %entry_name, size, staged = %staged.path().display(), "staged entry");
    Ok(staged)
}
