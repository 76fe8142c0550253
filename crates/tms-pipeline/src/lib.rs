//! Ingestion orchestration.
//!
//! One file, one pipeline: read bytes, dispatch to a parser by extension,
//! validate, summarize. Nothing here returns `Err` across the public
//! boundary; every outcome, including unreadable files and corrupt
//! containers, lands in a [`ParsedFileResult`] so callers have exactly one
//! failure-handling path.

mod ingest;
mod kind;

pub use ingest::{ingest_bytes, ingest_file, ingest_files};
pub use kind::FileKind;
