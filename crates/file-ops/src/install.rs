//! Direct `.prg` and `.set` installation, plus the shared copy step.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::layout::DeviceLayout;
use crate::types::{InstallEvent, InstallReport, InstalledFile, PackageKind};

/// Copies a `.prg` file into `GARMIN/Apps` under the mount root.
///
/// Any existing file of the same name is replaced.
pub fn install_prg(
    prg_file: &Path,
    layout: &DeviceLayout,
    on_event: &mut impl FnMut(InstallEvent),
) -> Result<InstallReport, InstallError> {
    install_single(PackageKind::Prg, prg_file, &layout.apps_dir(), on_event)
}

/// Copies a `.set` file into `GARMIN/Apps/Settings` under the mount root.
///
/// Any existing file of the same name is replaced.
pub fn install_set(
    set_file: &Path,
    layout: &DeviceLayout,
    on_event: &mut impl FnMut(InstallEvent),
) -> Result<InstallReport, InstallError> {
    install_single(PackageKind::Set, set_file, &layout.settings_dir(), on_event)
}

fn install_single(
    kind: PackageKind,
    source: &Path,
    dest_dir: &Path,
    on_event: &mut impl FnMut(InstallEvent),
) -> Result<InstallReport, InstallError> {
    on_event(InstallEvent::Copying { kind });

    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| InstallError::CopyFailed {
            from: source.to_path_buf(),
            to: dest_dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
        })?;

    let installed = copy_to_device(source, dest_dir, &file_name)?;
    on_event(InstallEvent::Installed(installed.clone()));

    Ok(InstallReport {
        kind,
        installed: vec![installed],
    })
}

/// Copies `source` to `dest_dir/file_name`, creating `dest_dir` first and
/// removing any file already at the destination.
pub(crate) fn copy_to_device(
    source: &Path,
    dest_dir: &Path,
    file_name: &str,
) -> Result<InstalledFile, InstallError> {
    let dest = dest_dir.join(file_name);
    let fail = |e: io::Error| copy_failed(source, &dest, e);

    std::fs::create_dir_all(dest_dir).map_err(fail)?;

    // Installing a file onto itself must not delete it.
    if is_same_file(source, &dest) {
        let size = std::fs::metadata(&dest).map_err(fail)?.len();
        tracing::debug!(dest = %dest.display(), "source already at destination");
        return Ok(InstalledFile {
            name: file_name.to_string(),
            destination: dest,
            size,
        });
    }

    match std::fs::remove_file(&dest) {
        Ok(()) => tracing::debug!(dest = %dest.display(), "removed existing file"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(fail(e)),
    }

    let size = std::fs::copy(source, &dest).map_err(fail)?;
    tracing::info!(dest = %dest.display(), size, "installed");

    Ok(InstalledFile {
        name: file_name.to_string(),
        destination: dest,
        size,
    })
}

fn copy_failed(from: &Path, to: &Path, source: io::Error) -> InstallError {
    InstallError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (canonical(a), canonical(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn canonical(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path).ok()
}
