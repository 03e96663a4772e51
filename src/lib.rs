//! Helper library for directory-listing tools.
//!
//! Formats file metadata (permission bits, ownership, size, timestamps,
//! inode) for human-readable display and provides a handful of file-type
//! predicates. Every function is a direct translation of a system metadata
//! field into a display string or boolean; there is no shared state, so each
//! call is independently reentrant.

pub mod app;
pub mod common;
pub mod error;
pub mod utils;
pub mod workers;

pub use common::meta::FileMetadata;
pub use error::{Error, Result};
