//! HTTP download into a scoped temporary file.

use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

/// Errors from the downloader.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download failed with status {status}: {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid user agent")]
    InvalidUserAgent,
}

/// A downloaded package held in a temporary `.zip` file.
///
/// The file is deleted when this value is dropped.
#[derive(Debug)]
pub struct DownloadedArchive {
    file: NamedTempFile,
    size: u64,
}

impl DownloadedArchive {
    /// Path of the temporary file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Async HTTP downloader.
pub struct Downloader {
    http: reqwest::Client,
    temp_dir: PathBuf,
}

impl Downloader {
    /// Creates a downloader that sends the given `User-Agent` and stores
    /// files in the system temporary directory.
    pub fn new(user_agent: &str) -> Result<Self, DownloadError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|_| DownloadError::InvalidUserAgent)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            temp_dir: std::env::temp_dir(),
        })
    }

    /// Stores downloaded files under `dir` instead of the system default.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Fetches `url` and streams the body into a new temporary `.zip` file.
    ///
    /// The URL is requested as given. A non-success status is an error and
    /// leaves no file behind.
    pub async fn download(&self, url: &str) -> Result<DownloadedArchive, DownloadError> {
        let mut resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(DownloadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let file = tempfile::Builder::new()
            .prefix("gwfinstall-")
            .suffix(".zip")
            .tempfile_in(&self.temp_dir)?;
        let mut out = tokio::fs::File::from_std(file.as_file().try_clone()?);

        let mut size = 0u64;
        while let Some(chunk) = resp.chunk().await? {
            out.write_all(&chunk).await?;
            size += chunk.len() as u64;
        }
        out.flush().await?;

        tracing::info!(url, size, path = %file.path().display(), "downloaded package");
        Ok(DownloadedArchive { file, size })
    }
}
