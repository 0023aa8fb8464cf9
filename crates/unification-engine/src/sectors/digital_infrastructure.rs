//! Digital infrastructure: DNS, TLD registries, cloud, data centres, CDNs

use super::{IndustryEntry, SectorContent};
use shared_types::RelevanceLevel;

pub const CONTENT: &[SectorContent] = &[
    SectorContent {
        category: "Incident Management",
        sub_requirements: &[
            "Notify affected customers of significant incidents and of measures they can take",
        ],
        industry: &[IndustryEntry {
            code: "DIG-IM-1",
            title: "Customer notification",
            description: "Recipients of the service are informed of significant incidents and remedies without undue delay.",
            relevance: RelevanceLevel::Critical,
        }],
    },
    SectorContent {
        category: "Network Security",
        sub_requirements: &[
            "Protect public-facing services against volumetric denial-of-service attacks",
            "Sign authoritative DNS zones with DNSSEC",
        ],
        industry: &[IndustryEntry {
            code: "DIG-NS-1",
            title: "DDoS resilience",
            description: "Capacity and scrubbing arrangements are sized for attacks above observed peaks.",
            relevance: RelevanceLevel::High,
        }],
    },
    SectorContent {
        category: "Vulnerability Management",
        sub_requirements: &[
            "Operate a coordinated vulnerability disclosure policy for hosted platforms",
        ],
        industry: &[IndustryEntry {
            code: "DIG-VM-1",
            title: "Coordinated disclosure",
            description: "Researchers have a published channel and response timelines for reported flaws.",
            relevance: RelevanceLevel::Standard,
        }],
    },
];
