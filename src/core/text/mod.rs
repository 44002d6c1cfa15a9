//! Caption text helpers.

pub mod wrap;

pub use wrap::{wrap_caption, CAPTION_WIDTH};
