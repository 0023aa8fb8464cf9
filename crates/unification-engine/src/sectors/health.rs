//! Health sector: hospitals, laboratories, medical device manufacturers

use super::{IndustryEntry, SectorContent};
use shared_types::RelevanceLevel;

pub const CONTENT: &[SectorContent] = &[
    SectorContent {
        category: "Incident Management",
        sub_requirements: &[
            "Classify incidents that affect patient care or clinical systems as significant and report them without undue delay",
            "Coordinate incident handling with clinical engineering for networked medical devices",
        ],
        industry: &[IndustryEntry {
            code: "HLT-IM-1",
            title: "Clinical continuity during incidents",
            description: "Maintain downtime procedures so that patient care continues while clinical systems are unavailable.",
            relevance: RelevanceLevel::Critical,
        }],
    },
    SectorContent {
        category: "Asset Management",
        sub_requirements: &[
            "Keep an inventory of connected medical devices including firmware version and vendor support status",
        ],
        industry: &[IndustryEntry {
            code: "HLT-AM-1",
            title: "Medical device inventory",
            description: "Record every networked medical device with its owner, location and patch channel.",
            relevance: RelevanceLevel::High,
        }],
    },
    SectorContent {
        category: "Access Control",
        sub_requirements: &[
            "Provide emergency access to patient records with mandatory after-the-fact review",
        ],
        industry: &[IndustryEntry {
            code: "HLT-AC-1",
            title: "Break-glass access",
            description: "Emergency access to health data is logged and reviewed by the data protection function.",
            relevance: RelevanceLevel::High,
        }],
    },
    SectorContent {
        category: "Business Continuity",
        sub_requirements: &[
            "Test recovery of electronic health record systems against clinically acceptable downtime",
        ],
        industry: &[IndustryEntry {
            code: "HLT-BC-1",
            title: "Clinical recovery objectives",
            description: "Recovery time objectives for clinical systems are agreed with medical leadership.",
            relevance: RelevanceLevel::Critical,
        }],
    },
];
