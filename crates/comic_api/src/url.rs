use url::Url;

use crate::error::ComicApiError;

/// Default base URL for comic metadata requests.
pub const DEFAULT_BASE_URL: &str = "https://xkcd.com/";

const INFO_DOCUMENT: &str = "info.0.json";

/// Normalize a base URL so relative endpoint joins keep its full path.
///
/// Blank input falls back to [`DEFAULT_BASE_URL`]; a missing trailing slash is
/// appended.
pub fn normalize_base_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_BASE_URL
    } else {
        input.trim()
    };

    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Endpoint for the latest comic.
pub fn current_comic_url(base_url: &str) -> Result<Url, ComicApiError> {
    join(base_url, INFO_DOCUMENT)
}

/// Endpoint for one numbered comic.
pub fn comic_url(base_url: &str, number: u32) -> Result<Url, ComicApiError> {
    join(base_url, &format!("{number}/{INFO_DOCUMENT}"))
}

fn join(base_url: &str, path: &str) -> Result<Url, ComicApiError> {
    let normalized = normalize_base_url(base_url);
    let base = Url::parse(&normalized).map_err(|source| ComicApiError::InvalidBaseUrl {
        url: normalized.clone(),
        source,
    })?;
    base.join(path)
        .map_err(|source| ComicApiError::InvalidBaseUrl {
            url: normalized,
            source,
        })
}
