//! Sector-specific enhancements for directive-covered industries
//!
//! Each sector module holds a table of additive content keyed by category
//! name. Enhancement only ever appends: sub-requirements are never reordered
//! or removed, and nothing changes unless the directive is selected and the
//! sector is known.

pub mod digital_infrastructure;
pub mod energy;
pub mod finance;
pub mod health;
pub mod transport;

use crate::renumber::strip_category_prefix;
use serde::{Deserialize, Serialize};
use shared_types::{IndustryRequirement, RelevanceLevel, RequirementGroup};
use tracing::warn;

/// Directive sectors with registered enhancement content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Health,
    Energy,
    Finance,
    Transport,
    DigitalInfrastructure,
}

impl Sector {
    pub const ALL: [Sector; 5] = [
        Sector::Health,
        Sector::Energy,
        Sector::Finance,
        Sector::Transport,
        Sector::DigitalInfrastructure,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Sector::Health => "health",
            Sector::Energy => "energy",
            Sector::Finance => "finance",
            Sector::Transport => "transport",
            Sector::DigitalInfrastructure => "digital_infrastructure",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sector::Health => "Health",
            Sector::Energy => "Energy",
            Sector::Finance => "Banking & Financial Market Infrastructure",
            Sector::Transport => "Transport",
            Sector::DigitalInfrastructure => "Digital Infrastructure",
        }
    }

    /// Parse a sector id or common alias (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "health" | "healthcare" => Some(Sector::Health),
            "energy" => Some(Sector::Energy),
            "finance" | "banking" | "financial" => Some(Sector::Finance),
            "transport" | "transportation" => Some(Sector::Transport),
            "digital_infrastructure" | "digital" => Some(Sector::DigitalInfrastructure),
            _ => None,
        }
    }

    fn content(&self) -> &'static [SectorContent] {
        match self {
            Sector::Health => health::CONTENT,
            Sector::Energy => energy::CONTENT,
            Sector::Finance => finance::CONTENT,
            Sector::Transport => transport::CONTENT,
            Sector::DigitalInfrastructure => digital_infrastructure::CONTENT,
        }
    }

    /// Registered content for a category label (numeric prefix ignored)
    pub fn content_for(&self, category: &str) -> Option<&'static SectorContent> {
        let name = strip_category_prefix(category).trim().to_lowercase();
        self.content()
            .iter()
            .find(|content| content.category.to_lowercase() == name)
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Additive content one sector registers for one category
#[derive(Debug)]
pub struct SectorContent {
    pub category: &'static str,
    pub sub_requirements: &'static [&'static str],
    pub industry: &'static [IndustryEntry],
}

#[derive(Debug)]
pub struct IndustryEntry {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub relevance: RelevanceLevel,
}

impl IndustryEntry {
    pub fn to_requirement(&self) -> IndustryRequirement {
        IndustryRequirement {
            code: self.code.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            relevance_level: self.relevance,
        }
    }
}

impl Sector {
    /// Append this sector's lines for `category`, skipping lines already present
    pub fn append_sub_requirements(&self, sub_requirements: &[String], category: &str) -> Vec<String> {
        let mut enhanced = sub_requirements.to_vec();
        let Some(content) = self.content_for(category) else {
            return enhanced;
        };

        for line in content.sub_requirements {
            if !enhanced.iter().any(|existing| existing == line) {
                enhanced.push(line.to_string());
            }
        }
        enhanced
    }

    /// Industry requirements this sector registers for `category`
    pub fn industry_for(&self, category: &str) -> Vec<IndustryRequirement> {
        self.content_for(category)
            .map(|content| {
                content
                    .industry
                    .iter()
                    .map(IndustryEntry::to_requirement)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Sector to enhance with, if any. `None` unless the directive is selected
/// and the id names a known sector; unknown ids are logged here.
pub fn resolve_sector(sector_id: Option<&str>, directive_selected: bool) -> Option<Sector> {
    if !directive_selected {
        return None;
    }
    let id = sector_id?;
    let sector = Sector::parse(id);
    if sector.is_none() {
        warn!(sector = id, "unknown sector, skipping enhancement");
    }
    sector
}

/// Append sector lines to `sub_requirements`.
///
/// Returns the input unchanged unless the directive is selected, the sector
/// is known and the category has registered content. Lines already present
/// are not appended again, so enhancing an enhanced list is a no-op.
pub fn enhance_sub_requirements(
    sub_requirements: &[String],
    category: &str,
    sector_id: Option<&str>,
    directive_selected: bool,
) -> Vec<String> {
    match resolve_sector(sector_id, directive_selected) {
        Some(sector) => sector.append_sub_requirements(sub_requirements, category),
        None => sub_requirements.to_vec(),
    }
}

/// Industry requirements to inject for a category
pub fn industry_requirements(
    category: &str,
    sector_id: Option<&str>,
    directive_selected: bool,
) -> Vec<IndustryRequirement> {
    resolve_sector(sector_id, directive_selected)
        .map(|sector| sector.industry_for(category))
        .unwrap_or_default()
}

/// Enhance one projected group with an already resolved sector:
/// sub-requirements plus industry entries. Existing industry entries are
/// kept; new ones are added by unseen code.
pub fn enhance_group(group: &RequirementGroup, sector: Option<Sector>) -> RequirementGroup {
    let Some(sector) = sector else {
        return group.clone();
    };

    let mut enhanced = group.clone();
    enhanced.unified.sub_requirements =
        sector.append_sub_requirements(&group.unified.sub_requirements, &group.category);

    let injected = sector.industry_for(&group.category);
    if !injected.is_empty() {
        let mut entries = group.industry_specific.clone().unwrap_or_default();
        for requirement in injected {
            if !entries.iter().any(|e| e.code == requirement.code) {
                entries.push(requirement);
            }
        }
        enhanced.industry_specific = Some(entries);
    }

    enhanced
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn category() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "Incident Management",
            "Asset Management",
            "Access Control",
            "Business Continuity",
            "Network Security",
            "Supply Chain Security",
            "Risk Management",
            "Cryptography",
            "Vulnerability Management",
            "Physical Security",
        ])
        .prop_flat_map(|name| (1u8..20).prop_map(move |n| format!("{:02}. {}", n, name)))
    }

    proptest! {
        #[test]
        fn enhancement_is_idempotent(
            category in category(),
            sector in prop::sample::select(Sector::ALL.to_vec()),
            subs in prop::collection::vec("[a-z ]{1,20}", 0..4),
        ) {
            let once = enhance_sub_requirements(&subs, &category, Some(sector.id()), true);
            let twice = enhance_sub_requirements(&once, &category, Some(sector.id()), true);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(&once[..subs.len()], &subs[..]);
        }

        #[test]
        fn nothing_changes_without_directive(
            category in category(),
            sector in prop::sample::select(Sector::ALL.to_vec()),
            subs in prop::collection::vec("[a-z ]{1,20}", 0..4),
        ) {
            let out = enhance_sub_requirements(&subs, &category, Some(sector.id()), false);
            prop_assert_eq!(out, subs);
        }
    }
}
