//! Blocking client and selection policies for the xkcd-style comic JSON API.
//!
//! The API exposes one metadata document per comic (`<n>/info.0.json`) plus a
//! `info.0.json` document for the latest entry. Image bytes are fetched from
//! the absolute URL carried in each document.
//!
//! Selection ([`Selection`]) is written against the [`ComicSource`] trait so
//! the retry policy can be exercised without a network.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod select;
pub mod source;
pub mod url;

pub use client::ComicApiClient;
pub use config::ComicApiConfig;
pub use error::ComicApiError;
pub use model::Comic;
pub use select::{parse_comic_number, SelectError, Selection, MAX_RANDOM_ATTEMPTS};
pub use reqwest::StatusCode;
pub use source::ComicSource;
pub use crate::url::{comic_url, current_comic_url, normalize_base_url, DEFAULT_BASE_URL};
