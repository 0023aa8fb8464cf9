//! A versioned snapshot of the requirement-group catalogue

use crate::types::RequirementGroup;
use serde::{Deserialize, Serialize};

pub const UNVERSIONED: &str = "unversioned";

/// One consistent version of the catalogue.
///
/// Both the "maximum" and the "current selection" statistics are computed
/// from the same snapshot, so the two figures always describe the same data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueSnapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub groups: Vec<RequirementGroup>,
}

fn default_version() -> String {
    UNVERSIONED.to_string()
}

impl CatalogueSnapshot {
    pub fn new(version: &str, groups: Vec<RequirementGroup>) -> Self {
        Self {
            version: version.to_string(),
            groups,
        }
    }

    /// A catalogue that has not loaded yet
    pub fn empty() -> Self {
        Self::new(UNVERSIONED, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Accepted on-disk shapes: a bare array of groups or a versioned object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogueDocument {
    Versioned(CatalogueSnapshot),
    Bare(Vec<RequirementGroup>),
}

impl From<CatalogueDocument> for CatalogueSnapshot {
    fn from(doc: CatalogueDocument) -> Self {
        match doc {
            CatalogueDocument::Versioned(snapshot) => snapshot,
            CatalogueDocument::Bare(groups) => CatalogueSnapshot::new(UNVERSIONED, groups),
        }
    }
}
