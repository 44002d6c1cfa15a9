//! `xkcd` command-line client.
//!
//! Usage:
//!
//! - `xkcd` shows the latest comic
//! - `xkcd 353` shows comic #353
//! - `xkcd --random` shows a random comic (positional arguments are ignored)
//!
//! Images are drawn inline with the kitty graphics protocol when
//! `TERM=xterm-kitty` and with the iTerm2 protocol otherwise. Set
//! `COMIC_TERM_IMAGE_PROTOCOL=kitty|iterm2` to force one, `COMIC_TERM_BASE_URL`
//! to point at a mirror, and `COMIC_TERM_LOG` to a tracing filter for
//! diagnostics on stderr.

pub mod cli;
pub mod present;
