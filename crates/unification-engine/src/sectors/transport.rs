//! Transport: air, rail, water and road operators

use super::{IndustryEntry, SectorContent};
use shared_types::RelevanceLevel;

pub const CONTENT: &[SectorContent] = &[
    SectorContent {
        category: "Incident Management",
        sub_requirements: &[
            "Report incidents affecting traffic management or passenger safety systems to the transport authority",
        ],
        industry: &[IndustryEntry {
            code: "TRN-IM-1",
            title: "Safety-relevant incident reporting",
            description: "Incidents touching signalling, traffic control or navigation are escalated to safety management.",
            relevance: RelevanceLevel::Critical,
        }],
    },
    SectorContent {
        category: "Asset Management",
        sub_requirements: &[
            "Inventory onboard and trackside systems including their safety integrity level",
        ],
        industry: &[IndustryEntry {
            code: "TRN-AM-1",
            title: "Onboard system inventory",
            description: "Vehicle and vessel systems are tracked with the same rigour as fixed infrastructure.",
            relevance: RelevanceLevel::High,
        }],
    },
    SectorContent {
        category: "Business Continuity",
        sub_requirements: &[
            "Define degraded modes of operation for loss of scheduling and ticketing systems",
        ],
        industry: &[IndustryEntry {
            code: "TRN-BC-1",
            title: "Degraded operations",
            description: "Operations can continue safely at reduced capacity without central IT.",
            relevance: RelevanceLevel::Standard,
        }],
    },
];
