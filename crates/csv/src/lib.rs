//! CSV reader backend for report consolidation.
//!
//! Reads a headerless CSV export into a raw cell grid.

pub mod parser;

pub use parser::CsvReader;
