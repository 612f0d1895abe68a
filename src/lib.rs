//! exhl library
//!
//! Extracts highlights from markdown notes and renders them as markdown lists,
//! frontmatter properties or companion notes.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod files;
pub mod highlights;

pub use config::{Config, State};
pub use highlights::{ExtractOptions, Extractor, Highlight, OutputMode, ResultBundle};
