//! Framework identities and the tiered maturity levels of the controls catalogue

use serde::{Deserialize, Serialize};

/// Source frameworks mapped into unified requirement groups.
///
/// Variant order is the canonical column order used everywhere a list of
/// frameworks is rendered (export headers, selection keys, bucket iteration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FrameworkKey {
    /// Information-security management standard (ISO/IEC 27001)
    #[serde(rename = "iso_a", alias = "isoA")]
    IsoA,
    /// Information-security controls guidance (ISO/IEC 27002)
    #[serde(rename = "iso_b", alias = "isoB")]
    IsoB,
    /// Controls catalogue with cumulative implementation groups (CIS Controls)
    #[serde(rename = "tieredControls", alias = "cisControls")]
    TieredControls,
    /// Data-protection regulation (GDPR)
    #[serde(rename = "regulation", alias = "gdpr")]
    Regulation,
    /// Cybersecurity directive (NIS2)
    #[serde(rename = "directive", alias = "nis2")]
    Directive,
}

impl FrameworkKey {
    /// Every framework in canonical order
    pub const ALL: [FrameworkKey; 5] = [
        FrameworkKey::IsoA,
        FrameworkKey::IsoB,
        FrameworkKey::TieredControls,
        FrameworkKey::Regulation,
        FrameworkKey::Directive,
    ];

    /// Human-readable framework name
    pub fn label(&self) -> &'static str {
        match self {
            FrameworkKey::IsoA => "ISO 27001",
            FrameworkKey::IsoB => "ISO 27002",
            FrameworkKey::TieredControls => "CIS Controls",
            FrameworkKey::Regulation => "GDPR",
            FrameworkKey::Directive => "NIS2",
        }
    }

    /// Wire identifier, matching the serde representation
    pub fn id(&self) -> &'static str {
        match self {
            FrameworkKey::IsoA => "iso_a",
            FrameworkKey::IsoB => "iso_b",
            FrameworkKey::TieredControls => "tieredControls",
            FrameworkKey::Regulation => "regulation",
            FrameworkKey::Directive => "directive",
        }
    }

    /// Identify the framework a catalogue standard name belongs to
    /// (e.g. "ISO/IEC 27001 2022", "CIS Controls IG2", "NIS 2 Directive")
    pub fn detect(standard_name: &str) -> Option<Self> {
        let name = standard_name.to_lowercase();

        if name.contains("iso") && name.contains("27001") {
            Some(FrameworkKey::IsoA)
        } else if name.contains("iso") && name.contains("27002") {
            Some(FrameworkKey::IsoB)
        } else if name.contains("cis") {
            Some(FrameworkKey::TieredControls)
        } else if name.contains("gdpr") || name.contains("general data protection") {
            Some(FrameworkKey::Regulation)
        } else if name.contains("nis2") || name.contains("nis 2") {
            Some(FrameworkKey::Directive)
        } else {
            None
        }
    }

    /// Parse a framework from its wire id, a common short name or a full
    /// standard name (see [`FrameworkKey::detect`])
    pub fn parse(s: &str) -> Option<Self> {
        Self::parse_id(s).or_else(|| Self::detect(s))
    }

    fn parse_id(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "iso_a" | "isoa" | "iso27001" | "iso_27001" => Some(FrameworkKey::IsoA),
            "iso_b" | "isob" | "iso27002" | "iso_27002" => Some(FrameworkKey::IsoB),
            "tieredcontrols" | "tiered_controls" | "cis" | "cis_controls" => {
                Some(FrameworkKey::TieredControls)
            }
            "regulation" | "gdpr" => Some(FrameworkKey::Regulation),
            "directive" | "nis2" => Some(FrameworkKey::Directive),
            _ => None,
        }
    }
}

impl std::fmt::Display for FrameworkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Implementation group of the tiered controls framework.
///
/// Levels are cumulative: everything in `Tier1` is in `Tier2`, and everything
/// in `Tier2` is in `Tier3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgLevel {
    #[serde(alias = "ig1")]
    Tier1,
    #[serde(alias = "ig2")]
    Tier2,
    #[serde(alias = "ig3")]
    Tier3,
}

impl IgLevel {
    pub const ALL: [IgLevel; 3] = [IgLevel::Tier1, IgLevel::Tier2, IgLevel::Tier3];

    pub fn as_str(&self) -> &'static str {
        match self {
            IgLevel::Tier1 => "tier1",
            IgLevel::Tier2 => "tier2",
            IgLevel::Tier3 => "tier3",
        }
    }

    /// Parse `tier1`/`ig1` style identifiers (case-insensitive), or a
    /// standard name carrying an IG suffix
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tier1" | "ig1" | "1" => Some(IgLevel::Tier1),
            "tier2" | "ig2" | "2" => Some(IgLevel::Tier2),
            "tier3" | "ig3" | "3" => Some(IgLevel::Tier3),
            _ => Self::detect(s),
        }
    }

    /// Extract the implementation group from a standard name such as "CIS Controls IG2"
    pub fn detect(standard_name: &str) -> Option<Self> {
        let name = standard_name.to_lowercase();
        if name.contains("ig3") {
            Some(IgLevel::Tier3)
        } else if name.contains("ig2") {
            Some(IgLevel::Tier2)
        } else if name.contains("ig1") {
            Some(IgLevel::Tier1)
        } else {
            None
        }
    }
}

impl std::fmt::Display for IgLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
