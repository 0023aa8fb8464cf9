//! Delimited (CSV/TSV) rendering

use super::ExportRow;
use crate::error::{EngineError, Result};

pub struct DelimitedExporter;

impl DelimitedExporter {
    /// Render a header row followed by one record per export row.
    /// Multi-line cells are quoted by the writer.
    pub fn format(headers: &[String], rows: &[ExportRow], delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        writer.write_record(headers)?;
        for row in rows {
            let cells = row.cells();
            if cells.len() != headers.len() {
                return Err(EngineError::Export(format!(
                    "row for {:?} has {} cells but the header has {}",
                    row.category,
                    cells.len(),
                    headers.len()
                )));
            }
            writer.write_record(&cells)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| EngineError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| EngineError::Export(e.to_string()))
    }
}
