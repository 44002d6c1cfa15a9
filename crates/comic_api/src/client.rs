use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::ComicApiConfig;
use crate::error::ComicApiError;
use crate::model::Comic;
use crate::source::ComicSource;
use crate::url::{comic_url, current_comic_url};

#[derive(Debug)]
pub struct ComicApiClient {
    http: Client,
    config: ComicApiConfig,
}

/// A response whose body has been read to completion.
#[derive(Debug)]
struct DrainedResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ComicApiClient {
    pub fn new(config: ComicApiConfig) -> Result<Self, ComicApiError> {
        let mut builder = Client::builder();
        if let Some(user_agent) = config.user_agent.as_deref() {
            builder = builder.user_agent(user_agent.to_owned());
        }
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(ComicApiError::Client)?;
        Ok(Self { http, config })
    }

    /// Latest comic. Any non-200 status is reported as
    /// [`ComicApiError::CurrentNotFound`]; this endpoint has no legitimate 404.
    pub fn fetch_current_comic(&self) -> Result<Comic, ComicApiError> {
        let url = current_comic_url(&self.config.base_url)?;
        let response = self.get(url.as_str())?;
        if response.status != StatusCode::OK {
            return Err(ComicApiError::CurrentNotFound {
                status: response.status,
            });
        }
        decode_comic(&response.body)
    }

    /// Comic `number`. A 404 is the API saying "no such comic" and maps to
    /// `Ok(None)`; every other non-200 status is an error.
    pub fn fetch_comic_by_number(&self, number: u32) -> Result<Option<Comic>, ComicApiError> {
        let url = comic_url(&self.config.base_url, number)?;
        let response = self.get(url.as_str())?;
        match response.status {
            StatusCode::OK => decode_comic(&response.body).map(Some),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ComicApiError::Status { status }),
        }
    }

    pub fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, ComicApiError> {
        let response = self.get(url)?;
        if response.status != StatusCode::OK {
            return Err(ComicApiError::Status {
                status: response.status,
            });
        }
        Ok(response.body)
    }

    /// Single blocking GET. The body is always read to the end before the
    /// response is dropped, whatever the status.
    fn get(&self, url: &str) -> Result<DrainedResponse, ComicApiError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(ComicApiError::Request)?;
        let status = response.status();
        let body = response.bytes().map_err(ComicApiError::ReadBody)?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "response drained");
        Ok(DrainedResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl ComicSource for ComicApiClient {
    fn current_comic(&self) -> Result<Comic, ComicApiError> {
        self.fetch_current_comic()
    }

    fn comic_by_number(&self, number: u32) -> Result<Option<Comic>, ComicApiError> {
        self.fetch_comic_by_number(number)
    }

    fn image_bytes(&self, url: &str) -> Result<Vec<u8>, ComicApiError> {
        self.fetch_image_bytes(url)
    }
}

fn decode_comic(body: &[u8]) -> Result<Comic, ComicApiError> {
    serde_json::from_slice(body).map_err(ComicApiError::Decode)
}
