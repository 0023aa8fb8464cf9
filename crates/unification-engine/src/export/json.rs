//! JSON rendering of export rows

use super::ExportRow;
use crate::error::{EngineError, Result};

pub struct JsonExporter;

impl JsonExporter {
    pub fn format(rows: &[ExportRow], pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(rows)
        } else {
            serde_json::to_string(rows)
        };
        output.map_err(|e| EngineError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::FrameworkCell;
    use shared_types::FrameworkKey;

    fn rows() -> Vec<ExportRow> {
        vec![ExportRow {
            category: "01. Governance".to_string(),
            category_description: String::new(),
            unified_requirement: "Governance".to_string(),
            sub_requirements: "a) Policy".to_string(),
            frameworks: vec![FrameworkCell {
                framework: FrameworkKey::TieredControls,
                controls: "1.1: Inventory".to_string(),
            }],
            industry_requirements: None,
        }]
    }

    #[test]
    fn test_json_format_compact() {
        let output = JsonExporter::format(&rows(), false).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"framework\":\"tieredControls\""));
        assert!(!output.contains("industryRequirements"));
    }

    #[test]
    fn test_json_format_pretty() {
        let output = JsonExporter::format(&rows(), true).unwrap();
        assert!(output.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["unifiedRequirement"], "Governance");
    }
}
