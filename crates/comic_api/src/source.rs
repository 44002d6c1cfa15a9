use crate::error::ComicApiError;
use crate::model::Comic;

/// Read access to a comic catalog.
///
/// [`ComicApiClient`](crate::ComicApiClient) is the network-backed
/// implementation; tests substitute scripted sources.
pub trait ComicSource {
    /// Latest published comic.
    fn current_comic(&self) -> Result<Comic, ComicApiError>;

    /// Comic `number`, or `None` when the catalog has no such entry.
    fn comic_by_number(&self, number: u32) -> Result<Option<Comic>, ComicApiError>;

    /// Raw bytes behind an image URL.
    fn image_bytes(&self, url: &str) -> Result<Vec<u8>, ComicApiError>;
}

impl<S: ComicSource + ?Sized> ComicSource for &S {
    fn current_comic(&self) -> Result<Comic, ComicApiError> {
        (**self).current_comic()
    }

    fn comic_by_number(&self, number: u32) -> Result<Option<Comic>, ComicApiError> {
        (**self).comic_by_number(number)
    }

    fn image_bytes(&self, url: &str) -> Result<Vec<u8>, ComicApiError> {
        (**self).image_bytes(url)
    }
}
