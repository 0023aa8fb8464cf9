//! Energy sector: electricity, gas, oil, district heating, hydrogen

use super::{IndustryEntry, SectorContent};
use shared_types::RelevanceLevel;

pub const CONTENT: &[SectorContent] = &[
    SectorContent {
        category: "Incident Management",
        sub_requirements: &[
            "Include operational technology and grid control systems in incident detection and response",
            "Notify the transmission system operator of incidents that may affect grid stability",
        ],
        industry: &[IndustryEntry {
            code: "ENR-IM-1",
            title: "OT incident response",
            description: "Incident playbooks cover SCADA and substation automation, including safe manual operation.",
            relevance: RelevanceLevel::Critical,
        }],
    },
    SectorContent {
        category: "Network Security",
        sub_requirements: &[
            "Segment industrial control networks from corporate IT with monitored conduits",
        ],
        industry: &[IndustryEntry {
            code: "ENR-NS-1",
            title: "IT/OT segmentation",
            description: "Zones and conduits follow IEC 62443 with no direct routing between IT and control networks.",
            relevance: RelevanceLevel::Critical,
        }],
    },
    SectorContent {
        category: "Supply Chain Security",
        sub_requirements: &[
            "Assess security of remote maintenance access granted to equipment vendors",
        ],
        industry: &[IndustryEntry {
            code: "ENR-SC-1",
            title: "Vendor remote access",
            description: "Vendor sessions into control systems are brokered, time-limited and recorded.",
            relevance: RelevanceLevel::High,
        }],
    },
    SectorContent {
        category: "Business Continuity",
        sub_requirements: &[
            "Plan black-start and islanded operation for loss of central control systems",
        ],
        industry: &[IndustryEntry {
            code: "ENR-BC-1",
            title: "Black-start readiness",
            description: "Restoration procedures are exercised with control rooms at least annually.",
            relevance: RelevanceLevel::High,
        }],
    },
];
