use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::io::{self, Write};

use comic_api::{Comic, ComicApiError, ComicSource, StatusCode};

/// Whether `line` carries a kitty or iTerm2 image sequence.
pub fn is_image_line(line: &str) -> bool {
    line.contains("\x1b_G") || line.contains("\x1b]1337;File=")
}

pub const IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";

pub fn comic(number: u32) -> Comic {
    Comic {
        title: format!("Comic {number}"),
        image_url: format!("https://imgs.example/{number}.png"),
        caption: format!("Caption for {number}."),
        number,
    }
}

/// In-memory catalog numbered `1..=latest`, minus `gaps`.
pub struct ScriptedSource {
    pub latest: Result<Comic, StatusCode>,
    pub gaps: HashSet<u32>,
    pub image: Result<Vec<u8>, StatusCode>,
    pub requested: RefCell<Vec<u32>>,
    pub image_requests: RefCell<Vec<String>>,
    pub current_calls: Cell<usize>,
}

impl ScriptedSource {
    pub fn new(latest: Comic) -> Self {
        Self {
            latest: Ok(latest),
            gaps: HashSet::new(),
            image: Ok(IMAGE_BYTES.to_vec()),
            requested: RefCell::new(Vec::new()),
            image_requests: RefCell::new(Vec::new()),
            current_calls: Cell::new(0),
        }
    }

    pub fn with_gaps(mut self, gaps: impl IntoIterator<Item = u32>) -> Self {
        self.gaps.extend(gaps);
        self
    }

    pub fn with_image_status(mut self, status: StatusCode) -> Self {
        self.image = Err(status);
        self
    }

    pub fn with_latest_status(mut self, status: StatusCode) -> Self {
        self.latest = Err(status);
        self
    }

    fn latest_number(&self) -> u32 {
        self.latest.as_ref().map(|comic| comic.number).unwrap_or(0)
    }
}

impl ComicSource for ScriptedSource {
    fn current_comic(&self) -> Result<Comic, ComicApiError> {
        self.current_calls.set(self.current_calls.get() + 1);
        self.latest
            .clone()
            .map_err(|status| ComicApiError::CurrentNotFound { status })
    }

    fn comic_by_number(&self, number: u32) -> Result<Option<Comic>, ComicApiError> {
        self.requested.borrow_mut().push(number);
        if number > self.latest_number() || self.gaps.contains(&number) {
            return Ok(None);
        }
        Ok(Some(comic(number)))
    }

    fn image_bytes(&self, url: &str) -> Result<Vec<u8>, ComicApiError> {
        self.image_requests.borrow_mut().push(url.to_owned());
        self.image
            .clone()
            .map_err(|status| ComicApiError::Status { status })
    }
}

/// Accepts `limit` bytes, then fails every write.
pub struct LimitedWriter {
    pub written: Vec<u8>,
    pub limit: usize,
}

impl LimitedWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }
}

impl Write for LimitedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit.saturating_sub(self.written.len());
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"));
        }
        let accepted = room.min(buf.len());
        self.written.extend_from_slice(&buf[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
