//! Projection of the catalogue onto the current framework selection
//!
//! The designated regulation group is mutually partitioned from everything
//! else: it shows only when the regulation is selected, and it never shows
//! content from any other framework.

use crate::ig_level::filter_controls;
use shared_types::{FrameworkKey, FrameworkSelection, Frameworks, RequirementGroup};
use tracing::debug;

/// Which partitions of the catalogue survive a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitions {
    pub regulation_group: bool,
    pub other_groups: bool,
}

impl Partitions {
    pub fn for_selection(selection: &FrameworkSelection) -> Self {
        match (selection.regulation, selection.has_non_regulation()) {
            (true, false) => Partitions {
                regulation_group: true,
                other_groups: false,
            },
            (true, true) => Partitions {
                regulation_group: true,
                other_groups: true,
            },
            // Nothing selected falls back to the non-regulation partition
            (false, _) => Partitions {
                regulation_group: false,
                other_groups: true,
            },
        }
    }
}

/// Project `catalogue` down to `selection`.
///
/// Output keeps the input's relative order. Groups whose buckets are all
/// empty after projection are dropped. Input is never mutated.
pub fn project(
    catalogue: &[RequirementGroup],
    selection: &FrameworkSelection,
    regulation_group_id: &str,
) -> Vec<RequirementGroup> {
    let partitions = Partitions::for_selection(selection);

    let projected: Vec<RequirementGroup> = catalogue
        .iter()
        .filter(|group| {
            if group.id == regulation_group_id {
                partitions.regulation_group
            } else {
                partitions.other_groups
            }
        })
        .map(|group| RequirementGroup {
            frameworks: project_frameworks(
                &group.frameworks,
                selection,
                group.id == regulation_group_id,
            ),
            ..group.clone()
        })
        .filter(|group| !group.frameworks.is_empty())
        .collect();

    debug!(
        catalogue = catalogue.len(),
        projected = projected.len(),
        selection = %selection.cache_key(),
        "projected catalogue"
    );

    projected
}

/// Rebuild the bucket map of one group for `selection`
fn project_frameworks(
    frameworks: &Frameworks,
    selection: &FrameworkSelection,
    is_regulation_group: bool,
) -> Frameworks {
    let mut projected = Frameworks::new();

    for (key, controls) in frameworks.iter() {
        let kept = if is_regulation_group {
            // The regulation group only ever shows its own bucket
            if key == FrameworkKey::Regulation && selection.regulation {
                controls.to_vec()
            } else {
                Vec::new()
            }
        } else if key == FrameworkKey::TieredControls {
            filter_controls(controls, selection.tiered_controls)
        } else if selection.is_selected(key) {
            controls.to_vec()
        } else {
            Vec::new()
        };
        projected.set(key, kept);
    }

    projected
}

/// Keep only groups with a non-empty bucket for `key`
pub fn retain_framework(groups: Vec<RequirementGroup>, key: FrameworkKey) -> Vec<RequirementGroup> {
    groups
        .into_iter()
        .filter(|group| !group.frameworks.bucket(key).is_empty())
        .collect()
}
