//! Run-history repository for consolidated reports.
//!
//! The pipeline never touches history; callers append finished tables
//! here and list them later. One JSON file, whole-file
//! read-modify-write, single-process access model.

pub mod store;

pub use store::{HistoryEntry, HistoryError, HistoryStore, JsonFileHistory};
