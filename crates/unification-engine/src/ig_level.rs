//! Implementation-group filtering for the tiered controls framework
//!
//! The level a control belongs to comes from two explicit tables, never
//! from a numeric threshold:
//! - `TIER3_ONLY_CONTROLS`: safeguards that only exist at the widest level
//! - `TIER1_EXCLUDED_PREFIXES`: the four most advanced control families,
//!   which contribute nothing at the narrowest level

use shared_types::{ControlRef, IgLevel};

/// Safeguards that belong to `Tier3` only
pub const TIER3_ONLY_CONTROLS: &[&str] = &[
    "1.5", "2.7", "3.13", "3.14", "4.12", "6.8", "8.12", "9.7", "10.7", "12.8", "13.7", "13.8",
    "13.11", "16.12", "16.13", "16.14", "18.4", "18.5",
];

/// Control families excluded entirely from `Tier1`
pub const TIER1_EXCLUDED_PREFIXES: &[&str] = &["13.", "16.", "17.", "18."];

/// Strip whitespace and any framework label in front of the safeguard
/// number ("CIS 4.1" -> "4.1")
pub fn normalize_code(code: &str) -> &str {
    let code = code.trim();
    match code.find(|c: char| c.is_ascii_digit()) {
        Some(start) => &code[start..],
        None => code,
    }
}

pub fn is_tier3_only(code: &str) -> bool {
    TIER3_ONLY_CONTROLS.contains(&normalize_code(code))
}

pub fn has_tier1_excluded_prefix(code: &str) -> bool {
    let code = normalize_code(code);
    TIER1_EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| code.starts_with(prefix))
}

/// Whether a control survives at `level`
pub fn included_at(code: &str, level: IgLevel) -> bool {
    match level {
        IgLevel::Tier3 => true,
        IgLevel::Tier2 => !is_tier3_only(code),
        IgLevel::Tier1 => !is_tier3_only(code) && !has_tier1_excluded_prefix(code),
    }
}

/// Filter a tiered bucket to the chosen implementation group.
/// With no level selected the framework contributes nothing.
pub fn filter_controls(controls: &[ControlRef], level: Option<IgLevel>) -> Vec<ControlRef> {
    let Some(level) = level else {
        return Vec::new();
    };
    controls
        .iter()
        .filter(|control| included_at(&control.code, level))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn controls(codes: &[&str]) -> Vec<ControlRef> {
        codes
            .iter()
            .map(|code| ControlRef::new(code, "safeguard"))
            .collect()
    }

    fn codes(controls: &[ControlRef]) -> Vec<&str> {
        controls.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_tier_levels_on_mixed_bucket() {
        let bucket = controls(&["1.1", "1.5", "13.1"]);

        assert_eq!(
            codes(&filter_controls(&bucket, Some(IgLevel::Tier1))),
            vec!["1.1"]
        );
        assert_eq!(
            codes(&filter_controls(&bucket, Some(IgLevel::Tier2))),
            vec!["1.1", "13.1"]
        );
        assert_eq!(
            codes(&filter_controls(&bucket, Some(IgLevel::Tier3))),
            vec!["1.1", "1.5", "13.1"]
        );
    }

    #[test]
    fn test_no_level_contributes_nothing() {
        let bucket = controls(&["1.1", "4.1"]);
        assert!(filter_controls(&bucket, None).is_empty());
    }

    #[test]
    fn test_labelled_codes_are_normalized() {
        assert_eq!(normalize_code("  CIS 1.5 "), "1.5");
        assert!(is_tier3_only("CIS 1.5"));
        assert!(has_tier1_excluded_prefix("CIS 18.1"));
        assert!(!has_tier1_excluded_prefix("1.13"));
    }

    #[test]
    fn test_prefix_does_not_match_longer_family_number() {
        // "113.1" is not in family 13
        assert!(included_at("113.1", IgLevel::Tier1));
    }

    #[test]
    fn test_every_tier3_only_control_is_dropped_below_tier3() {
        for code in TIER3_ONLY_CONTROLS {
            assert!(!included_at(code, IgLevel::Tier2), "{} at tier2", code);
            assert!(!included_at(code, IgLevel::Tier1), "{} at tier1", code);
            assert!(included_at(code, IgLevel::Tier3));
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let bucket = controls(&["4.1", "2.1", "3.3", "1.1"]);
        assert_eq!(
            codes(&filter_controls(&bucket, Some(IgLevel::Tier1))),
            vec!["4.1", "2.1", "3.3", "1.1"]
        );
    }
}
