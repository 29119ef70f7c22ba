//! Install error types.

use std::path::PathBuf;

/// Errors produced while installing a package onto the device.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to open archive {}: {source}", .path.display())]
    ArchiveOpenFailed {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to extract {entry}: {source}")]
    ExtractionFailed {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`InstallError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallErrorKind {
    ArchiveOpenFailed,
    ExtractionFailed,
    CopyFailed,
}

impl InstallError {
    pub fn kind(&self) -> InstallErrorKind {
        match self {
            Self::ArchiveOpenFailed { .. } => InstallErrorKind::ArchiveOpenFailed,
            Self::ExtractionFailed { .. } => InstallErrorKind::ExtractionFailed,
            Self::CopyFailed { .. } => InstallErrorKind::CopyFailed,
        }
    }
}

/// Errors produced by [`install_package`](crate::install_package).
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid input file: {}", .0.display())]
    UnsupportedInput(PathBuf),

    #[error(transparent)]
    Install(#[from] InstallError),
}
