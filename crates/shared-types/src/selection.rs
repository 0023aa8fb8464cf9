//! The set of frameworks a user currently has switched on

use crate::framework::{FrameworkKey, IgLevel};
use serde::{Deserialize, Serialize};

/// Current framework selection, the sole input controlling projection.
///
/// The tiered framework has no separate on/off flag: choosing an
/// implementation group *is* selecting it, so a level can never be set while
/// the framework is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSelection {
    #[serde(default)]
    pub iso_a: bool,
    #[serde(default)]
    pub iso_b: bool,
    #[serde(default)]
    pub tiered_controls: Option<IgLevel>,
    #[serde(default)]
    pub regulation: bool,
    #[serde(default)]
    pub directive: bool,
}

/// Accessor table: one entry per framework, in canonical order.
/// Adding a framework means adding a row here and a field above.
const SELECTED: [(FrameworkKey, fn(&FrameworkSelection) -> bool); 5] = [
    (FrameworkKey::IsoA, |s| s.iso_a),
    (FrameworkKey::IsoB, |s| s.iso_b),
    (FrameworkKey::TieredControls, |s| s.tiered_controls.is_some()),
    (FrameworkKey::Regulation, |s| s.regulation),
    (FrameworkKey::Directive, |s| s.directive),
];

impl FrameworkSelection {
    /// Nothing selected
    pub fn none() -> Self {
        Self::default()
    }

    /// Every framework on, tiered controls at the widest level.
    /// Used for the "maximum" statistics baseline.
    pub fn all() -> Self {
        Self {
            iso_a: true,
            iso_b: true,
            tiered_controls: Some(IgLevel::Tier3),
            regulation: true,
            directive: true,
        }
    }

    /// Only the given framework (tiered controls at `Tier3`)
    pub fn only(key: FrameworkKey) -> Self {
        Self::none().with(key)
    }

    /// Builder-style: switch a framework on (tiered controls at `Tier3`
    /// unless a level was already chosen)
    pub fn with(mut self, key: FrameworkKey) -> Self {
        match key {
            FrameworkKey::IsoA => self.iso_a = true,
            FrameworkKey::IsoB => self.iso_b = true,
            FrameworkKey::TieredControls => {
                self.tiered_controls = Some(self.tiered_controls.unwrap_or(IgLevel::Tier3))
            }
            FrameworkKey::Regulation => self.regulation = true,
            FrameworkKey::Directive => self.directive = true,
        }
        self
    }

    /// Builder-style: select the tiered framework at a specific level
    pub fn with_tier(mut self, level: IgLevel) -> Self {
        self.tiered_controls = Some(level);
        self
    }

    pub fn is_selected(&self, key: FrameworkKey) -> bool {
        SELECTED
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, selected)| selected(self))
            .unwrap_or(false)
    }

    /// Selected frameworks in canonical order
    pub fn selected_keys(&self) -> Vec<FrameworkKey> {
        SELECTED
            .iter()
            .filter(|(_, selected)| selected(self))
            .map(|(key, _)| *key)
            .collect()
    }

    /// True when any framework other than the regulation is on
    pub fn has_non_regulation(&self) -> bool {
        SELECTED
            .iter()
            .any(|(key, selected)| *key != FrameworkKey::Regulation && selected(self))
    }

    pub fn is_empty(&self) -> bool {
        !SELECTED.iter().any(|(_, selected)| selected(self))
    }

    /// Stable, order-independent key for memoizing projections
    /// (e.g. `iso_a,tieredControls:tier2,regulation`; `none` when empty)
    pub fn cache_key(&self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }
        self.selected_keys()
            .into_iter()
            .map(|key| match (key, self.tiered_controls) {
                (FrameworkKey::TieredControls, Some(level)) => format!("{}:{}", key.id(), level),
                _ => key.id().to_string(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_and_all() {
        assert!(FrameworkSelection::none().is_empty());
        assert_eq!(
            FrameworkSelection::all().selected_keys(),
            FrameworkKey::ALL.to_vec()
        );
        assert_eq!(
            FrameworkSelection::all().tiered_controls,
            Some(IgLevel::Tier3)
        );
    }

    #[test]
    fn test_has_non_regulation() {
        assert!(!FrameworkSelection::only(FrameworkKey::Regulation).has_non_regulation());
        assert!(FrameworkSelection::none()
            .with_tier(IgLevel::Tier1)
            .has_non_regulation());
        assert!(!FrameworkSelection::none().has_non_regulation());
    }

    #[test]
    fn test_with_keeps_chosen_tier() {
        let selection = FrameworkSelection::none()
            .with_tier(IgLevel::Tier1)
            .with(FrameworkKey::TieredControls);
        assert_eq!(selection.tiered_controls, Some(IgLevel::Tier1));
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(FrameworkSelection::none().cache_key(), "none");
        let selection = FrameworkSelection::none()
            .with(FrameworkKey::Regulation)
            .with(FrameworkKey::IsoA)
            .with_tier(IgLevel::Tier2);
        assert_eq!(
            selection.cache_key(),
            "iso_a,tieredControls:tier2,regulation"
        );
    }

    #[test]
    fn test_deserialize_camel_case() {
        let selection: FrameworkSelection =
            serde_json::from_str(r#"{"isoA":true,"tieredControls":"tier2"}"#).unwrap();
        assert!(selection.iso_a);
        assert!(!selection.iso_b);
        assert_eq!(selection.tiered_controls, Some(IgLevel::Tier2));

        let empty: FrameworkSelection = serde_json::from_str(r#"{"tieredControls":null}"#).unwrap();
        assert!(empty.is_empty());
    }
}
