//! Rendering surface adapters

mod html_file;
mod terminal;

pub use html_file::HtmlFileSurface;
pub use terminal::{TerminalMode, TerminalSurface};
