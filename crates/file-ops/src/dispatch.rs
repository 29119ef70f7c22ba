//! Extension-based dispatch to the matching installer.

use std::path::Path;

use crate::archive::install_from_zip;
use crate::error::DispatchError;
use crate::install::{install_prg, install_set};
use crate::layout::DeviceLayout;
use crate::types::{InstallEvent, InstallReport, PackageKind};

/// Installs a local package file onto the device.
///
/// The installer is chosen from the file extension (`.zip`, `.prg`, `.set`,
/// any case). Any other input is rejected before anything is written.
/// `staging_dir` holds temporary files extracted from archives.
pub fn install_package(
    path: &Path,
    layout: &DeviceLayout,
    staging_dir: &Path,
    on_event: &mut impl FnMut(InstallEvent),
) -> Result<InstallReport, DispatchError> {
    let kind = PackageKind::from_path(path)
        .ok_or_else(|| DispatchError::UnsupportedInput(path.to_path_buf()))?;

    tracing::debug!(path = %path.display(), ?kind, "dispatching package");

    let report = match kind {
        PackageKind::Zip => install_from_zip(path, layout, staging_dir, on_event)?,
        PackageKind::Prg => install_prg(path, layout, on_event)?,
        PackageKind::Set => install_set(path, layout, on_event)?,
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallErrorKind;
    use std::fs;
    use std::io::Write;

    #[test]
    fn unsupported_extension_writes_nothing() {
        let mount = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let txt = work.path().join("notes.txt");
        fs::write(&txt, b"hello").unwrap();

        let layout = DeviceLayout::new(mount.path());
        let err = install_package(&txt, &layout, work.path(), &mut |_| {}).unwrap_err();

        assert!(matches!(err, DispatchError::UnsupportedInput(ref p) if p == &txt));
        assert_eq!(fs::read_dir(mount.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_extension_is_unsupported() {
        let mount = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();

        let err = install_package(
            Path::new("/tmp/package"),
            &DeviceLayout::new(mount.path()),
            work.path(),
            &mut |_| {},
        )
        .unwrap_err();
        assert!(matches!(err, DispatchError::UnsupportedInput(_)));
    }

    #[test]
    fn uppercase_set_goes_to_settings() {
        let mount = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let set = work.path().join("FACE.SET");
        fs::write(&set, b"cfg").unwrap();

        let layout = DeviceLayout::new(mount.path());
        let report = install_package(&set, &layout, work.path(), &mut |_| {}).unwrap();

        assert_eq!(report.kind, PackageKind::Set);
        assert!(layout.settings_dir().join("FACE.SET").exists());
    }

    #[test]
    fn prg_goes_to_apps() {
        let mount = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let prg = work.path().join("watch.PRG");
        fs::write(&prg, b"bin").unwrap();

        let layout = DeviceLayout::new(mount.path());
        let report = install_package(&prg, &layout, work.path(), &mut |_| {}).unwrap();

        assert_eq!(report.kind, PackageKind::Prg);
        assert_eq!(fs::read(layout.apps_dir().join("watch.PRG")).unwrap(), b"bin");
    }

    #[test]
    fn zip_goes_through_archive_installer() {
        let mount = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let zip_path = work.path().join("Face.ZIP");
        let mut zip = zip::ZipWriter::new(fs::File::create(&zip_path).unwrap());
        zip.start_file("app.prg", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"zipped").unwrap();
        zip.finish().unwrap();

        let layout = DeviceLayout::new(mount.path());
        let report = install_package(&zip_path, &layout, work.path(), &mut |_| {}).unwrap();

        assert_eq!(report.kind, PackageKind::Zip);
        assert_eq!(fs::read(layout.apps_dir().join("app.prg")).unwrap(), b"zipped");
    }

    #[test]
    fn install_errors_are_wrapped() {
        let mount = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();

        let err = install_package(
            &work.path().join("absent.zip"),
            &DeviceLayout::new(mount.path()),
            work.path(),
            &mut |_| {},
        )
        .unwrap_err();
        match err {
            DispatchError::Install(e) => assert_eq!(e.kind(), InstallErrorKind::ArchiveOpenFailed),
            other => panic!("unexpected error: {other}"),
        }
    }
}
