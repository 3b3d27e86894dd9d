//! Injects the cross-origin isolation service worker registration into an HTML page.

pub mod file;
pub mod sw;

pub use file::{FileContent, HtmlFile, patch_file};
pub use sw::*;
