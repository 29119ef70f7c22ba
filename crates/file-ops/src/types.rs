//! Data types shared by the installers.

use std::path::{Path, PathBuf};

/// Kind of input package, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Zip archive carrying one or more `.prg` entries.
    Zip,
    /// Compiled application binary.
    Prg,
    /// Application settings file.
    Set,
}

impl PackageKind {
    /// Classifies a path by the text after the last `.` of its file name,
    /// ignoring case. Dot-names such as `.prg` count as that extension.
    ///
    /// Returns `None` for any other extension, or none at all.
    pub fn from_path(path: &Path) -> Option<Self> {
        let (_, ext) = path.file_name()?.to_str()?.rsplit_once('.')?;
        if ext.eq_ignore_ascii_case("zip") {
            Some(Self::Zip)
        } else if ext.eq_ignore_ascii_case("prg") {
            Some(Self::Prg)
        } else if ext.eq_ignore_ascii_case("set") {
            Some(Self::Set)
        } else {
            None
        }
    }
}

/// A payload written to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFile {
    /// File name at the destination.
    pub name: String,
    /// Full destination path.
    pub destination: PathBuf,
    /// Bytes copied.
    pub size: u64,
}

/// Outcome of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub kind: PackageKind,
    pub installed: Vec<InstalledFile>,
}

/// Progress event emitted while installing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// The archive is about to be opened.
    Unzipping,
    /// A payload of the given kind is about to be copied.
    Copying { kind: PackageKind },
    /// A payload was written to the device.
    Installed(InstalledFile),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_extensions() {
        assert_eq!(
            PackageKind::from_path(Path::new("face.zip")),
            Some(PackageKind::Zip)
        );
        assert_eq!(
            PackageKind::from_path(Path::new("/tmp/app.prg")),
            Some(PackageKind::Prg)
        );
        assert_eq!(
            PackageKind::from_path(Path::new("APP.SET")),
            Some(PackageKind::Set)
        );
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(
            PackageKind::from_path(Path::new("Face.ZiP")),
            Some(PackageKind::Zip)
        );
        assert_eq!(
            PackageKind::from_path(Path::new("watch.PRG")),
            Some(PackageKind::Prg)
        );
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(PackageKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(PackageKind::from_path(Path::new("README")), None);
        assert_eq!(PackageKind::from_path(Path::new("archive.zip.bak")), None);
        assert_eq!(PackageKind::from_path(Path::new("face.")), None);
    }

    #[test]
    fn dot_names_are_classified() {
        assert_eq!(
            PackageKind::from_path(Path::new("/x/.prg")),
            Some(PackageKind::Prg)
        );
        assert_eq!(
            PackageKind::from_path(Path::new(".SET")),
            Some(PackageKind::Set)
        );
    }
}
