//! Reduction and efficiency figures for a set of requirement groups

use serde::{Deserialize, Serialize};
use shared_types::RequirementGroup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Native controls summed over every bucket of every group
    pub total_source_requirements: usize,
    pub unified_group_count: usize,
    /// `total_source_requirements - unified_group_count`; negative only when
    /// the input contains groups with no mapped controls
    pub reduction: i64,
    /// Percentage with one decimal, `"0.0"` when there is nothing to reduce
    pub reduction_percentage: String,
    /// Source requirements per unified group, rounded; `0` with no groups
    pub efficiency_ratio: u64,
}

impl Stats {
    pub fn compute(groups: &[RequirementGroup]) -> Self {
        let total = groups
            .iter()
            .map(RequirementGroup::source_requirement_count)
            .sum::<usize>();
        let count = groups.len();
        let reduction = total as i64 - count as i64;

        let reduction_percentage = if total == 0 {
            "0.0".to_string()
        } else {
            format!("{:.1}", reduction as f64 / total as f64 * 100.0)
        };

        let efficiency_ratio = if count == 0 {
            0
        } else {
            (total as f64 / count as f64).round() as u64
        };

        Self {
            total_source_requirements: total,
            unified_group_count: count,
            reduction,
            reduction_percentage,
            efficiency_ratio,
        }
    }

    pub fn empty() -> Self {
        Self::compute(&[])
    }
}

/// Baseline figures (every framework on) next to the current selection's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsComparison {
    /// Catalogue version both figures were computed from
    pub snapshot_version: String,
    pub maximum: Stats,
    pub current: Stats,
}
