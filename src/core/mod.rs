//! Terminal-side building blocks: image protocols and caption text.

pub mod terminal_image;
pub mod text;
