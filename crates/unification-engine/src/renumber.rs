//! Sequential category labels for projected groups
//!
//! Non-regulation groups are numbered `01`, `02`, ... by position; the
//! regulation group always takes the next number so it sorts last.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::RequirementGroup;

lazy_static! {
    /// Existing numeric prefix such as "07. " or "3) "
    static ref CATEGORY_PREFIX: Regex = Regex::new(r"^\s*\d+\s*[.)]\s*").unwrap();
}

/// Remove a leading numeric prefix from a category label
pub fn strip_category_prefix(category: &str) -> &str {
    match CATEGORY_PREFIX.find(category) {
        Some(m) => &category[m.end()..],
        None => category.trim_start(),
    }
}

/// Zero-padded label; `width` is shared by the whole batch so labels sort
/// as strings in numeric order
fn label(position: usize, width: usize, category: &str) -> String {
    format!("{:0width$}. {}", position, strip_category_prefix(category), width = width)
}

/// At least two digits, more when the highest position needs them
fn label_width(highest: usize) -> usize {
    highest.to_string().len().max(2)
}

/// Renumber categories. Returns new groups; the input is left untouched.
///
/// Relative order inside each partition is kept, and the regulation group(s)
/// move behind every other group. Applying this twice gives the same result
/// as applying it once.
pub fn renumber_categories(
    groups: &[RequirementGroup],
    regulation_group_id: &str,
) -> Vec<RequirementGroup> {
    let (regulation, others): (Vec<&RequirementGroup>, Vec<&RequirementGroup>) = groups
        .iter()
        .partition(|group| group.id == regulation_group_id);

    let regulation_position = others.len() + 1;
    let highest = if regulation.is_empty() {
        others.len()
    } else {
        regulation_position
    };
    let width = label_width(highest);

    let mut renumbered: Vec<RequirementGroup> = others
        .into_iter()
        .enumerate()
        .map(|(i, group)| RequirementGroup {
            category: label(i + 1, width, &group.category),
            ..group.clone()
        })
        .collect();

    renumbered.extend(regulation.into_iter().map(|group| RequirementGroup {
        category: label(regulation_position, width, &group.category),
        ..group.clone()
    }));

    renumbered
}
