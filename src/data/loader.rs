//! CSV Data Loader Module
//! File-scoped reading and writing of two-column CSV data.

use crate::data::{CsvSeriesProcessor, ParseResult, Sample};
use crate::error::{Result, ViewerError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Decimal places shown in the data table (and therefore written on save).
pub const DEFAULT_TABLE_PRECISION: usize = 6;

/// One table row as displayed: `[x, y]`.
pub type TableRow = [String; 2];

/// Reads and writes CSV files. Each call opens and closes its own handle.
pub struct DataLoader;

impl DataLoader {
    /// Open `path` and parse it. Fails only if the file cannot be opened or read.
    pub fn load_csv(path: &Path) -> Result<ParseResult> {
        let file = File::open(path).map_err(|e| ViewerError::file_access(path, e))?;
        CsvSeriesProcessor::parse_reader(BufReader::new(file))
            .map_err(|e| ViewerError::file_access(path, e))
    }

    /// Write rows to `path`, one `x,y` line per row.
    pub fn save_csv(path: &Path, rows: &[TableRow]) -> Result<()> {
        let file = File::create(path).map_err(|e| ViewerError::file_access(path, e))?;
        let mut writer = BufWriter::new(file);

        for [x, y] in rows {
            writeln!(writer, "{},{}", x, y).map_err(|e| ViewerError::file_access(path, e))?;
        }

        writer.flush().map_err(|e| ViewerError::file_access(path, e))
    }

    /// Display text for the table grid.
    pub fn table_rows(samples: &[Sample], precision: usize) -> Vec<TableRow> {
        samples
            .iter()
            .map(|s| {
                [
                    format!("{:.p$}", s.x, p = precision),
                    format!("{:.p$}", s.y, p = precision),
                ]
            })
            .collect()
    }
}
