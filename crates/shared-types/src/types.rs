use crate::framework::FrameworkKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A native control of one source framework (e.g. ISO 27001 "A.5.1", CIS "4.1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlRef {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ControlRef {
    pub fn new(code: &str, title: &str) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            description: String::new(),
        }
    }
}

/// Per-framework buckets of a requirement group.
///
/// A missing key reads as an empty bucket, so a catalogue entry that omits a
/// framework (or the whole map) is still usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frameworks(BTreeMap<FrameworkKey, Vec<ControlRef>>);

impl Frameworks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls mapped from `key`; empty when the bucket is absent
    pub fn bucket(&self, key: FrameworkKey) -> &[ControlRef] {
        self.0.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace a bucket. Every key is kept in the map, even when empty,
    /// so projected groups always carry exactly one bucket per framework.
    pub fn set(&mut self, key: FrameworkKey, controls: Vec<ControlRef>) {
        self.0.insert(key, controls);
    }

    pub fn with(mut self, key: FrameworkKey, controls: Vec<ControlRef>) -> Self {
        self.set(key, controls);
        self
    }

    /// Buckets in canonical order, including absent ones as empty slices
    pub fn iter(&self) -> impl Iterator<Item = (FrameworkKey, &[ControlRef])> + '_ {
        FrameworkKey::ALL
            .into_iter()
            .map(move |key| (key, self.bucket(key)))
    }

    /// Number of controls across every bucket
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The human-authored requirement that replaces N native controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRequirement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Ordered; the order drives display sections and is preserved by every
    /// transformation that does not explicitly reorder it
    #[serde(default)]
    pub sub_requirements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceLevel {
    Critical,
    High,
    Standard,
    Optional,
}

impl RelevanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceLevel::Critical => "critical",
            RelevanceLevel::High => "high",
            RelevanceLevel::Standard => "standard",
            RelevanceLevel::Optional => "optional",
        }
    }
}

/// Sector-specific requirement attached to a group when a sector is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryRequirement {
    pub code: String,
    pub title: String,
    pub description: String,
    pub relevance_level: RelevanceLevel,
}

/// One deduplicated concern: native controls from every framework plus
/// the unified requirement that covers them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementGroup {
    /// Stable across selections; UI state is joined on it
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub category_description: String,
    #[serde(default)]
    pub frameworks: Frameworks,
    #[serde(default)]
    pub unified: UnifiedRequirement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_specific: Option<Vec<IndustryRequirement>>,
}

impl RequirementGroup {
    pub fn new(id: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            category_description: String::new(),
            frameworks: Frameworks::new(),
            unified: UnifiedRequirement::default(),
            industry_specific: None,
        }
    }

    pub fn with_bucket(mut self, key: FrameworkKey, controls: Vec<ControlRef>) -> Self {
        self.frameworks.set(key, controls);
        self
    }

    pub fn with_unified(mut self, unified: UnifiedRequirement) -> Self {
        self.unified = unified;
        self
    }

    /// Number of native controls mapped to this group across all frameworks
    pub fn source_requirement_count(&self) -> usize {
        self.frameworks.total()
    }
}
