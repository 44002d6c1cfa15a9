//! Fetch, render, and caption one comic.

use std::io::Write;

use anyhow::Context;
use comic_api::{Comic, ComicSource, Selection};
use comic_term::{render_image, wrap_caption, ImageProtocol, CAPTION_WIDTH};
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentOptions {
    /// Prefix the title with `#<number>`.
    pub show_number: bool,
    pub caption_width: usize,
    pub protocol: ImageProtocol,
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            show_number: true,
            caption_width: CAPTION_WIDTH,
            protocol: ImageProtocol::Iterm2,
        }
    }
}

/// Resolve `selection` and show the resulting comic.
pub fn run<S, R, W>(
    source: &S,
    selection: &Selection,
    rng: &mut R,
    options: &PresentOptions,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: ComicSource + ?Sized,
    R: Rng,
    W: Write + ?Sized,
{
    let comic = selection.resolve(source, rng)?;
    debug!(number = comic.number, ?selection, "comic selected");
    show_comic(source, &comic, options, out).context("show comic")
}

/// Image is fetched before anything is printed; text already written stays
/// on screen if rendering fails afterwards.
pub fn show_comic<S, W>(
    source: &S,
    comic: &Comic,
    options: &PresentOptions,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: ComicSource + ?Sized,
    W: Write + ?Sized,
{
    let image = source
        .image_bytes(&comic.image_url)
        .context("read image")?;

    write!(out, "{}\n\n", comic.heading(options.show_number)).context("write title")?;
    render_image(&mut *out, options.protocol, &image).context("inline image")?;
    write!(
        out,
        "\n\n{}\n",
        wrap_caption(&comic.caption, options.caption_width)
    )
    .context("write caption")?;
    out.flush().context("flush output")
}
