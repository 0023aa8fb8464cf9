//! Console summary of reduction statistics

use anyhow::Result;
use std::fmt::Write;
use unification_engine::{Stats, UnifiedView};

pub fn format_stats(view: &UnifiedView) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "Catalogue:  {}", view.snapshot_version)?;
    writeln!(output, "Selection:  {}", view.selection.cache_key())?;
    if let Some(sector) = &view.sector_id {
        writeln!(output, "Sector:     {}", sector)?;
    }
    writeln!(output)?;

    writeln!(
        output,
        "{:<28} {:>10} {:>10}",
        "", "Maximum", "Current"
    )?;
    writeln!(output, "────────────────────────────────────────────────────")?;
    let rows: [(&str, fn(&Stats) -> String); 5] = [
        ("Source requirements", |s| s.total_source_requirements.to_string()),
        ("Unified groups", |s| s.unified_group_count.to_string()),
        ("Reduction", |s| s.reduction.to_string()),
        ("Reduction %", |s| format!("{}%", s.reduction_percentage)),
        ("Efficiency ratio", |s| format!("{}:1", s.efficiency_ratio)),
    ];
    for (label, value) in rows {
        writeln!(
            output,
            "{:<28} {:>10} {:>10}",
            label,
            value(&view.stats.maximum),
            value(&view.stats.current)
        )?;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ControlRef, CatalogueSnapshot, FrameworkKey, FrameworkSelection, RequirementGroup};
    use unification_engine::{UnificationEngine, ViewRequest};

    #[test]
    fn test_format_stats_lists_both_columns() {
        let snapshot = CatalogueSnapshot::new(
            "2024-06",
            vec![RequirementGroup::new("g1", "Governance").with_bucket(
                FrameworkKey::IsoA,
                vec![ControlRef::new("A.5.1", "Policies"), ControlRef::new("A.5.2", "Roles")],
            )],
        );
        let view = UnificationEngine::default()
            .unify(&snapshot, &ViewRequest::new(FrameworkSelection::only(FrameworkKey::IsoA)));

        let output = format_stats(&view).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Catalogue:  2024-06");
        assert_eq!(lines[1], "Selection:  iso_a");
        assert!(output.contains("50.0%"));
        assert!(output.contains("2:1"));
        assert!(!output.contains("Sector:"));
    }
}
