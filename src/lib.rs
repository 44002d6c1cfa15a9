//! Terminal rendering for webcomics.
//!
//! Images go out through one of two inline-image protocols chosen once from
//! the environment ([`EnvConfig::resolve_protocol`]); captions are word-wrapped
//! plain text.
//!
//! # Public API Overview
//! - [`render_image`] writes an image with a given [`ImageProtocol`].
//! - [`encode_kitty`] / [`encode_iterm2`] build the raw escape sequences.
//! - [`wrap_caption`] wraps caption text without splitting words.

pub mod config;
pub mod logging;

pub mod core;

/// Environment configuration.
pub use crate::config::EnvConfig;

/// Terminal image protocol selection, encoding, and rendering.
pub use crate::core::terminal_image::{
    encode_iterm2, encode_kitty, ensure_png, render_image, ImageProtocol, KITTY_CHUNK_SIZE,
    KITTY_TERM,
};

/// Caption wrapping.
pub use crate::core::text::{wrap_caption, CAPTION_WIDTH};
