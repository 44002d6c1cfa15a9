use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Column limit for captions printed under the image.
pub const CAPTION_WIDTH: usize = 70;

/// Wrap `text` at `width` columns on spaces, filling each line greedily.
///
/// Words are never split: a word wider than `width` sits alone on its line.
/// Existing line breaks are kept.
pub fn wrap_caption(text: &str, width: usize) -> String {
    let options = Options::new(width.max(1))
        .break_words(false)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation);
    textwrap::fill(text, options)
}
