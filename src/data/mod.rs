//! Document persistence and interchange.
//!
//! This module covers everything that leaves the in-memory store: the JSON
//! interchange format, the draw.io exporter, keyed blob storage, and the
//! periodic auto-save loop.
//!
//! ## Error Handling
//!
//! Parsing and validation return `MapFileResult<T>` with a [`MapFileError`]
//! describing what was wrong with the file. Storage backends return
//! `anyhow::Result` since their failures are environmental, not structural.

mod autosave;
mod document;
mod drawio;
mod error;
mod storage;

pub use autosave::{clear_autosave, load_autosave, AutoSave, AutosaveSnapshot};
pub use document::{DocComponent, DocConnection, DocMetadata, MapDocument};
pub use drawio::export_drawio;
pub use error::{MapFileError, MapFileResult};
pub use storage::{FileStorage, MemoryStorage, Storage};
