//! XLSX reader backend for report consolidation.
//!
//! Reads the first worksheet of an XLSX workbook into a raw cell grid.

pub mod parser;

pub use parser::XlsxReader;
