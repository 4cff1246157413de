//! XLSX grid reader implementation.

use calamine::{DataType, Range, Reader, Xlsx};
use report_core::{Cell, Error, Grid, Result};
use std::io::{Read, Seek};

/// Reader for XLSX (Office Open XML) workbooks.
pub struct XlsxReader;

impl XlsxReader {
    /// Create a new XLSX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read the first worksheet into a grid.
    ///
    /// Cell positions are absolute sheet positions: leading empty rows
    /// and columns are padded with absent cells so that the layout's
    /// column offsets line up with what the template author sees.
    pub fn parse<R: Read + Seek>(&self, reader: R) -> Result<Grid> {
        let mut workbook =
            Xlsx::new(reader).map_err(|e| Error::XlsxError(format!("Failed to open workbook: {}", e)))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| Error::XlsxError("Workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .ok_or_else(|| Error::XlsxError(format!("Sheet `{}` has no range", sheet_name)))?
            .map_err(|e| Error::XlsxError(format!("Failed to read sheet `{}`: {}", sheet_name, e)))?;

        log::debug!(
            "read sheet `{}`: {} rows x {} cols",
            sheet_name,
            range.height(),
            range.width()
        );

        Ok(range_to_grid(&range))
    }
}

impl Default for XlsxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a calamine range into a grid at absolute sheet positions.
fn range_to_grid(range: &Range<DataType>) -> Grid {
    let mut grid = Grid::new();

    let (start_row, start_col) = match range.start() {
        Some(start) => (start.0 as usize, start.1 as usize),
        None => return grid,
    };

    // Rows above the range exist on the sheet but hold nothing.
    for _ in 0..start_row {
        grid.push_row(Vec::new());
    }

    for row in range.rows() {
        let mut cells: Vec<Cell> = vec![None; start_col];
        cells.extend(row.iter().map(cell_value));
        grid.push_row(cells);
    }

    grid
}

/// Map one workbook cell to its text value, `None` when absent.
/// Everything is treated as text; numbers are stringified the way a
/// template author would have typed them.
fn cell_value(data: &DataType) -> Cell {
    match data {
        DataType::Empty | DataType::Error(_) => None,
        DataType::String(s) => Some(s.clone()),
        DataType::Float(f) | DataType::DateTime(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        DataType::Int(i) => Some(i.to_string()),
        DataType::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
