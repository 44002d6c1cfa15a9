//! Inline image transmission for kitty and iTerm2 terminals.

use std::borrow::Cow;
use std::io::{self, Cursor, Write};

use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;
use tracing::{debug, warn};

/// `TERM` value that kitty sets for its child processes.
pub const KITTY_TERM: &str = "xterm-kitty";

/// Raw image bytes carried by one kitty graphics escape sequence.
pub const KITTY_CHUNK_SIZE: usize = 4096;

const KITTY_PREFIX: &str = "\x1b_G";
const KITTY_SUFFIX: &str = "\x1b\\";
const ITERM2_PREFIX: &str = "\x1b]1337;File=";
const ITERM2_SUFFIX: &str = "\x07";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProtocol {
    /// Chunked PNG transmission (`ESC _ G ... ESC \`).
    Kitty,
    /// Single-shot inline file (`ESC ] 1337 ; File= ... BEL`).
    Iterm2,
}

impl ImageProtocol {
    /// Protocol for a terminal identity string. Only kitty is recognized;
    /// everything else gets iTerm2.
    pub fn from_term(term: &str) -> Self {
        if term == KITTY_TERM {
            Self::Kitty
        } else {
            Self::Iterm2
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "kitty" => Some(Self::Kitty),
            "iterm2" | "iterm" => Some(Self::Iterm2),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Kitty => "kitty",
            Self::Iterm2 => "iterm2",
        }
    }
}

/// Transcode JPEG input to PNG for kitty's `f=100` format.
///
/// Input that is not JPEG, or that fails to decode or re-encode, is returned
/// unchanged.
pub fn ensure_png(image: &[u8]) -> Cow<'_, [u8]> {
    let decoded = match image::load_from_memory_with_format(image, ImageFormat::Jpeg) {
        Ok(decoded) => decoded,
        Err(error) => {
            if matches!(image::guess_format(image), Ok(ImageFormat::Jpeg)) {
                warn!(%error, "JPEG decode failed; sending original bytes");
            }
            return Cow::Borrowed(image);
        }
    };

    let mut png = Vec::new();
    match decoded.write_to(&mut Cursor::new(&mut png), ImageFormat::Png) {
        Ok(()) => {
            debug!(jpeg_bytes = image.len(), png_bytes = png.len(), "transcoded JPEG to PNG");
            Cow::Owned(png)
        }
        Err(error) => {
            warn!(%error, "PNG encode failed; sending original bytes");
            Cow::Borrowed(image)
        }
    }
}

/// Kitty transmit sequences for `png`, one per [`KITTY_CHUNK_SIZE`] slice.
///
/// Every sequence but the last carries `m=1`. Empty input yields no sequences.
pub fn encode_kitty(png: &[u8]) -> Vec<String> {
    let total = png.len().div_ceil(KITTY_CHUNK_SIZE);
    png.chunks(KITTY_CHUNK_SIZE)
        .enumerate()
        .map(|(index, chunk)| {
            let more = u8::from(index + 1 < total);
            format!(
                "{KITTY_PREFIX}a=T,f=100,m={more};{}{KITTY_SUFFIX}",
                general_purpose::STANDARD.encode(chunk)
            )
        })
        .collect()
}

/// iTerm2 inline-file sequence for `image` in any format the terminal decodes.
pub fn encode_iterm2(image: &[u8]) -> String {
    format!(
        "{ITERM2_PREFIX}size={};inline=1:{}{ITERM2_SUFFIX}",
        image.len(),
        general_purpose::STANDARD.encode(image)
    )
}

/// Write `image` to `out` using `protocol`.
pub fn render_image<W>(out: &mut W, protocol: ImageProtocol, image: &[u8]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match protocol {
        ImageProtocol::Kitty => {
            let png = ensure_png(image);
            let chunks = encode_kitty(&png);
            debug!(
                protocol = protocol.name(),
                bytes = png.len(),
                chunks = chunks.len(),
                "transmitting image"
            );
            for chunk in &chunks {
                out.write_all(chunk.as_bytes())?;
            }
        }
        ImageProtocol::Iterm2 => {
            debug!(protocol = protocol.name(), bytes = image.len(), "transmitting image");
            out.write_all(encode_iterm2(image).as_bytes())?;
        }
    }
    out.flush()
}
