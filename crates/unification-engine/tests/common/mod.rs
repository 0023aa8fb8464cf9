//! Shared catalogue fixtures

#![allow(dead_code)]

use shared_types::{
    CatalogueSnapshot, ControlRef, FrameworkKey, RequirementGroup, UnifiedRequirement,
};

pub const REGULATION_GROUP: &str = "gdpr";

pub fn controls(codes: &[&str]) -> Vec<ControlRef> {
    codes
        .iter()
        .map(|code| ControlRef::new(code, &format!("Control {}", code)))
        .collect()
}

/// G1: 2 ISO 27001 + 3 CIS controls, G2: the regulation group with 4
/// articles, G3: 1 NIS2 measure
pub fn three_group_catalogue() -> Vec<RequirementGroup> {
    vec![
        RequirementGroup::new("g1", "Asset Management")
            .with_bucket(FrameworkKey::IsoA, controls(&["A.5.9", "A.5.10"]))
            .with_bucket(FrameworkKey::TieredControls, controls(&["1.1", "1.5", "13.1"]))
            .with_unified(UnifiedRequirement {
                title: "Maintain an asset inventory".to_string(),
                description: "Track hardware and software. CIS Controls IG1 covers the basics."
                    .to_string(),
                sub_requirements: vec![
                    "a) Keep an inventory of assets".to_string(),
                    "b) Review the inventory yearly per ISO 27001 A.5.9.".to_string(),
                ],
            }),
        RequirementGroup::new(REGULATION_GROUP, "Data Protection")
            .with_bucket(
                FrameworkKey::Regulation,
                controls(&["Art. 5", "Art. 25", "Art. 32", "Art. 33"]),
            ),
        RequirementGroup::new("g3", "Incident Management")
            .with_bucket(FrameworkKey::Directive, controls(&["21.2(b)"]))
            .with_unified(UnifiedRequirement {
                title: "Handle incidents".to_string(),
                description: String::new(),
                sub_requirements: vec!["a) Maintain an incident response plan".to_string()],
            }),
    ]
}

pub fn snapshot() -> CatalogueSnapshot {
    CatalogueSnapshot::new("fixture-1", three_group_catalogue())
}

pub fn codes(controls: &[ControlRef]) -> Vec<&str> {
    controls.iter().map(|c| c.code.as_str()).collect()
}
