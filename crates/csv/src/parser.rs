//! CSV grid reader implementation.

use report_core::{Cell, Error, Grid, Result};
use std::io::Read;

/// Reader for CSV exports of the report template.
pub struct CsvReader;

impl CsvReader {
    /// Create a new CSV reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a CSV stream into a grid.
    ///
    /// The template has no CSV header row of its own (the real header
    /// is somewhere inside the data and located by the pipeline), and
    /// exports routinely have ragged rows, so both are allowed here.
    /// A field that is empty or whitespace-only reads as an absent
    /// cell, matching how spreadsheet exports leave unused cells
    /// blank (a cell holding stray spaces is still blank).
    pub fn parse<R: Read>(&self, reader: R) -> Result<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut grid = Grid::new();

        for (idx, record) in csv_reader.records().enumerate() {
            let record =
                record.map_err(|e| Error::CsvError(format!("Row {}: {}", idx, e)))?;

            let cells: Vec<Cell> = record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();

            grid.push_row(cells);
        }

        log::debug!("read {} CSV rows", grid.row_count());
        Ok(grid)
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}
