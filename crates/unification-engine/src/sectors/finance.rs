//! Banking and financial market infrastructure

use super::{IndustryEntry, SectorContent};
use shared_types::RelevanceLevel;

pub const CONTENT: &[SectorContent] = &[
    SectorContent {
        category: "Incident Management",
        sub_requirements: &[
            "Align major ICT incident classification and reporting with DORA timelines",
        ],
        industry: &[IndustryEntry {
            code: "FIN-IM-1",
            title: "Major ICT incident reporting",
            description: "Initial notification, intermediate and final reports follow the financial supervisor's templates.",
            relevance: RelevanceLevel::Critical,
        }],
    },
    SectorContent {
        category: "Risk Management",
        sub_requirements: &[
            "Maintain an ICT risk management framework approved by the management body",
            "Perform threat-led penetration testing on critical functions every three years",
        ],
        industry: &[
            IndustryEntry {
                code: "FIN-RM-1",
                title: "ICT risk framework",
                description: "The management body approves and reviews the ICT risk framework annually.",
                relevance: RelevanceLevel::Critical,
            },
            IndustryEntry {
                code: "FIN-RM-2",
                title: "Threat-led penetration testing",
                description: "Critical functions are tested against current threat intelligence scenarios.",
                relevance: RelevanceLevel::High,
            },
        ],
    },
    SectorContent {
        category: "Supply Chain Security",
        sub_requirements: &[
            "Keep a register of ICT third-party arrangements supporting critical or important functions",
        ],
        industry: &[IndustryEntry {
            code: "FIN-SC-1",
            title: "Third-party register",
            description: "All ICT service contracts are recorded with exit strategies for critical providers.",
            relevance: RelevanceLevel::High,
        }],
    },
    SectorContent {
        category: "Cryptography",
        sub_requirements: &[
            "Protect payment and settlement data with keys held in certified hardware security modules",
        ],
        industry: &[IndustryEntry {
            code: "FIN-CR-1",
            title: "Payment key management",
            description: "Keys protecting payment data are generated and stored in HSMs.",
            relevance: RelevanceLevel::Standard,
        }],
    },
];
