//! Package download for URL inputs.
//!
//! Watch-face sites serve the app bundle as a zip when the request carries
//! the `file=app` query parameter. [`with_app_param`] adds it, and
//! [`Downloader`] streams the response into a temporary `.zip` file that is
//! deleted when the returned [`DownloadedArchive`] is dropped.

pub mod client;
pub mod url;

pub use client::{DownloadError, DownloadedArchive, Downloader};
pub use url::{APP_PARAM, DOWNLOAD_SCHEME, is_download_url, with_app_param};
