//! Note files: link-safe names, frontmatter properties, and companion notes.

pub mod filename;
pub mod frontmatter;
pub mod notes;

pub use frontmatter::FrontmatterError;
pub use notes::{DirectoryStore, ExplodeReport, NoteStore, NoteStoreError};
