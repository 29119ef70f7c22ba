//! URL detection and query normalization.

/// Scheme prefix that marks an input as a download URL.
pub const DOWNLOAD_SCHEME: &str = "https://";

/// Query parameter that selects the app bundle.
pub const APP_PARAM: &str = "file=app";

/// Returns `true` if the input starts with `https://`, ignoring case.
pub fn is_download_url(input: &str) -> bool {
    let scheme = DOWNLOAD_SCHEME.as_bytes();
    input
        .as_bytes()
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Appends `file=app` to the URL unless it already contains it.
///
/// Uses `&` when the URL already has a query string, `?` otherwise.
pub fn with_app_param(url: &str) -> String {
    if url.contains(APP_PARAM) {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{APP_PARAM}")
}
