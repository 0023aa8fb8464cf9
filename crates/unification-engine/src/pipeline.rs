//! End-to-end unification: projection, renumbering, statistics, display
//! filtering and sector enhancement over one catalogue snapshot

use crate::cache::{CacheKey, ProjectionCache};
use crate::config::EngineConfig;
use crate::export::{export_headers, export_rows, ExportRow, Exporter, OutputFormat};
use crate::projection::{project, retain_framework};
use crate::renumber::{renumber_categories, strip_category_prefix};
use crate::sectors::{enhance_group, resolve_sector};
use crate::stats::{Stats, StatsComparison};
use crate::text_filter::filter_unified_requirement;
use serde::{Deserialize, Serialize};
use shared_types::{CatalogueSnapshot, FrameworkKey, FrameworkSelection, RequirementGroup};
use std::sync::Arc;
use tracing::debug;

/// What the caller wants to see
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub selection: FrameworkSelection,
    #[serde(default)]
    pub sector_id: Option<String>,
    /// Restrict displayed groups to one category (name with or without
    /// number prefix) or group id
    #[serde(default)]
    pub category_filter: Option<String>,
    /// Legacy "only framework X" filter
    #[serde(default)]
    pub only_framework: Option<FrameworkKey>,
}

impl ViewRequest {
    pub fn new(selection: FrameworkSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn with_sector(mut self, sector_id: &str) -> Self {
        self.sector_id = Some(sector_id.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category_filter = Some(category.to_string());
        self
    }

    pub fn with_only_framework(mut self, key: FrameworkKey) -> Self {
        self.only_framework = Some(key);
        self
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedView {
    pub snapshot_version: String,
    pub selection: FrameworkSelection,
    pub sector_id: Option<String>,
    /// Projected, renumbered, filtered and enhanced groups for display
    pub groups: Vec<RequirementGroup>,
    pub stats: StatsComparison,
}

/// Framework unification engine
pub struct UnificationEngine {
    config: EngineConfig,
}

impl UnificationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn regulation_id(&self) -> &str {
        &self.config.regulation_group_id
    }

    /// Projected and renumbered groups, before display filtering
    pub fn project(
        &self,
        catalogue: &[RequirementGroup],
        selection: &FrameworkSelection,
        only_framework: Option<FrameworkKey>,
    ) -> Vec<RequirementGroup> {
        let mut projected = project(catalogue, selection, self.regulation_id());
        if let Some(key) = only_framework {
            projected = retain_framework(projected, key);
        }
        renumber_categories(&projected, self.regulation_id())
    }

    /// Baseline ("every framework on") and current-selection statistics,
    /// both read from the same snapshot
    pub fn statistics(
        &self,
        snapshot: &CatalogueSnapshot,
        selection: &FrameworkSelection,
    ) -> StatsComparison {
        let maximum = project(
            &snapshot.groups,
            &FrameworkSelection::all(),
            self.regulation_id(),
        );
        let current = project(&snapshot.groups, selection, self.regulation_id());

        StatsComparison {
            snapshot_version: snapshot.version.clone(),
            maximum: Stats::compute(&maximum),
            current: Stats::compute(&current),
        }
    }

    /// Run the full pipeline. An empty (or not yet loaded) catalogue gives
    /// an empty view with zeroed statistics.
    pub fn unify(&self, snapshot: &CatalogueSnapshot, request: &ViewRequest) -> UnifiedView {
        let selection = request.selection;
        let sector_id = request
            .sector_id
            .clone()
            .or_else(|| self.config.default_sector.clone());

        let projected = self.project(&snapshot.groups, &selection, request.only_framework);

        let maximum = project(
            &snapshot.groups,
            &FrameworkSelection::all(),
            self.regulation_id(),
        );
        let stats = StatsComparison {
            snapshot_version: snapshot.version.clone(),
            maximum: Stats::compute(&maximum),
            current: Stats::compute(&projected),
        };

        let sector = resolve_sector(sector_id.as_deref(), selection.directive);
        let groups: Vec<RequirementGroup> = projected
            .iter()
            .filter(|group| matches_category(group, request.category_filter.as_deref()))
            .map(|group| {
                let filtered = RequirementGroup {
                    unified: filter_unified_requirement(&group.unified, &selection),
                    ..group.clone()
                };
                enhance_group(&filtered, sector)
            })
            .collect();

        debug!(
            version = %snapshot.version,
            selection = %selection.cache_key(),
            sector = ?sector_id,
            groups = groups.len(),
            "unified view computed"
        );

        UnifiedView {
            snapshot_version: snapshot.version.clone(),
            selection,
            sector_id,
            groups,
            stats,
        }
    }

    /// `unify`, memoized on (snapshot version, selection, sector, category)
    pub fn unify_cached(
        &self,
        cache: &mut ProjectionCache,
        snapshot: &CatalogueSnapshot,
        request: &ViewRequest,
    ) -> Arc<UnifiedView> {
        let key = CacheKey::new(snapshot, request);
        cache.get_or_insert_with(key, || self.unify(snapshot, request))
    }

    /// Export header and rows for a computed view, using the configured
    /// sub-requirement separator
    pub fn export_view(&self, view: &UnifiedView) -> (Vec<String>, Vec<ExportRow>) {
        let headers = export_headers(&view.selection, view.sector_id.is_some());
        let rows = export_rows(
            &view.groups,
            &view.selection,
            view.sector_id.as_deref(),
            &self.config.export.sub_requirement_separator,
        );
        (headers, rows)
    }

    /// Exporter honouring the configured CSV delimiter
    pub fn exporter(&self, format: OutputFormat) -> Exporter {
        Exporter::new(format).with_delimiter(self.config.export.delimiter)
    }
}

impl Default for UnificationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn matches_category(group: &RequirementGroup, filter: Option<&str>) -> bool {
    let Some(filter) = filter.map(str::trim).filter(|f| !f.is_empty()) else {
        return true;
    };
    group.id == filter
        || group.category == filter
        || strip_category_prefix(&group.category).eq_ignore_ascii_case(strip_category_prefix(filter))
}
