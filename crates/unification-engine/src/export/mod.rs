//! Export of projected requirement groups
//!
//! One row per group with fixed columns (category, category description,
//! unified requirement, sub-requirements), then one column per *selected*
//! framework in canonical order, then an industry column when a sector is
//! set. Unselected frameworks get no column at all.
//!
//! # Example
//!
//! ```
//! use unification_engine::export::{export_rows, Exporter, OutputFormat};
//! use shared_types::{FrameworkKey, FrameworkSelection};
//!
//! let selection = FrameworkSelection::only(FrameworkKey::IsoA);
//! let rows = export_rows(&[], &selection, None, "; ");
//! let csv = Exporter::new(OutputFormat::Csv).render(&rows).unwrap();
//! assert!(csv.starts_with("Category,"));
//! ```

mod delimited;
mod json;

use crate::error::Result;
use serde::Serialize;
use shared_types::{ControlRef, FrameworkKey, FrameworkSelection, RequirementGroup};
use std::fs;
use std::path::Path;

pub use delimited::DelimitedExporter;
pub use json::JsonExporter;

pub const FIXED_HEADERS: [&str; 4] = [
    "Category",
    "Category Description",
    "Unified Requirement",
    "Sub-requirements",
];

pub const INDUSTRY_HEADER: &str = "Industry Requirements";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "tsv" => Some(OutputFormat::Tsv),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "json_pretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkCell {
    pub framework: FrameworkKey,
    pub controls: String,
}

/// One export row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub category: String,
    pub category_description: String,
    pub unified_requirement: String,
    pub sub_requirements: String,
    pub frameworks: Vec<FrameworkCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_requirements: Option<String>,
}

impl ExportRow {
    /// Cells in column order, matching `export_headers`
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = vec![
            self.category.as_str(),
            self.category_description.as_str(),
            self.unified_requirement.as_str(),
            self.sub_requirements.as_str(),
        ];
        cells.extend(self.frameworks.iter().map(|cell| cell.controls.as_str()));
        if let Some(industry) = &self.industry_requirements {
            cells.push(industry);
        }
        cells
    }
}

/// Header row for a selection/sector combination
pub fn export_headers(selection: &FrameworkSelection, sector_selected: bool) -> Vec<String> {
    let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
    headers.extend(selection.selected_keys().into_iter().map(|key| key.label().to_string()));
    if sector_selected {
        headers.push(INDUSTRY_HEADER.to_string());
    }
    headers
}

fn control_cell(controls: &[ControlRef]) -> String {
    controls
        .iter()
        .map(|control| format!("{}: {}", control.code, control.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build export rows from projected (and optionally enhanced) groups
pub fn export_rows(
    groups: &[RequirementGroup],
    selection: &FrameworkSelection,
    sector_id: Option<&str>,
    sub_requirement_separator: &str,
) -> Vec<ExportRow> {
    let keys = selection.selected_keys();

    groups
        .iter()
        .map(|group| ExportRow {
            category: group.category.clone(),
            category_description: group.category_description.clone(),
            unified_requirement: group.unified.title.clone(),
            sub_requirements: group.unified.sub_requirements.join(sub_requirement_separator),
            frameworks: keys
                .iter()
                .map(|key| FrameworkCell {
                    framework: *key,
                    controls: control_cell(group.frameworks.bucket(*key)),
                })
                .collect(),
            industry_requirements: sector_id.map(|_| {
                group
                    .industry_specific
                    .iter()
                    .flatten()
                    .map(|r| format!("{}: {} [{}]", r.code, r.title, r.relevance_level.as_str()))
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
        })
        .collect()
}

/// Exporter for a chosen output format
pub struct Exporter {
    format: OutputFormat,
    delimiter: u8,
}

impl Exporter {
    pub fn new(format: OutputFormat) -> Self {
        let delimiter = match format {
            OutputFormat::Tsv => b'\t',
            _ => b',',
        };
        Self { format, delimiter }
    }

    /// Override the CSV delimiter (ignored for TSV and JSON)
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        if self.format == OutputFormat::Csv && delimiter.is_ascii() {
            self.delimiter = delimiter as u8;
        }
        self
    }

    /// Render rows; `headers` come from [`export_headers`]
    pub fn render_with_headers(&self, headers: &[String], rows: &[ExportRow]) -> Result<String> {
        match self.format {
            OutputFormat::Csv | OutputFormat::Tsv => {
                DelimitedExporter::format(headers, rows, self.delimiter)
            }
            OutputFormat::Json => JsonExporter::format(rows, false),
            OutputFormat::JsonPretty => JsonExporter::format(rows, true),
        }
    }

    /// Render rows, deriving the header from the first row's columns
    pub fn render(&self, rows: &[ExportRow]) -> Result<String> {
        let headers = headers_from_rows(rows);
        self.render_with_headers(&headers, rows)
    }

    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        headers: &[String],
        rows: &[ExportRow],
        path: P,
    ) -> Result<()> {
        let output = self.render_with_headers(headers, rows)?;
        fs::write(path, output)?;
        Ok(())
    }
}

fn headers_from_rows(rows: &[ExportRow]) -> Vec<String> {
    let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
    if let Some(first) = rows.first() {
        headers.extend(first.frameworks.iter().map(|c| c.framework.label().to_string()));
        if first.industry_requirements.is_some() {
            headers.push(INDUSTRY_HEADER.to_string());
        }
    }
    headers
}
