//! Memoization of unified views
//!
//! A view is a pure function of the catalogue snapshot and the request, so
//! results are keyed on the snapshot version plus every request input.
//! Loading a new snapshot version naturally misses; `invalidate` drops
//! everything for callers that reload a catalogue under the same version.

use crate::pipeline::{UnifiedView, ViewRequest};
use shared_types::CatalogueSnapshot;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    snapshot_version: String,
    selection: String,
    sector_id: Option<String>,
    category_filter: Option<String>,
    only_framework: Option<String>,
}

impl CacheKey {
    pub fn new(snapshot: &CatalogueSnapshot, request: &ViewRequest) -> Self {
        Self {
            snapshot_version: snapshot.version.clone(),
            selection: request.selection.cache_key(),
            sector_id: request.sector_id.clone(),
            category_filter: request.category_filter.clone(),
            only_framework: request.only_framework.map(|key| key.id().to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectionCache {
    entries: HashMap<CacheKey, Arc<UnifiedView>>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<UnifiedView>> {
        self.entries.get(key).cloned()
    }

    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, compute: F) -> Arc<UnifiedView>
    where
        F: FnOnce() -> UnifiedView,
    {
        if let Some(view) = self.entries.get(&key) {
            debug!(version = %key.snapshot_version, selection = %key.selection, "view cache hit");
            return Arc::clone(view);
        }

        debug!(version = %key.snapshot_version, selection = %key.selection, "view cache miss");
        let view = Arc::new(compute());
        self.entries.insert(key, Arc::clone(&view));
        view
    }

    /// Drop every cached view
    pub fn invalidate(&mut self) {
        debug!(entries = self.entries.len(), "view cache invalidated");
        self.entries.clear();
    }

    /// Drop views computed from one snapshot version
    pub fn invalidate_version(&mut self, version: &str) {
        self.entries.retain(|key, _| key.snapshot_version != version);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::UnificationEngine;
    use shared_types::{ControlRef, FrameworkKey, FrameworkSelection, RequirementGroup};

    fn snapshot(version: &str) -> CatalogueSnapshot {
        CatalogueSnapshot::new(
            version,
            vec![RequirementGroup::new("g1", "Governance")
                .with_bucket(FrameworkKey::IsoA, vec![ControlRef::new("A.5.1", "Policies")])],
        )
    }

    #[test]
    fn test_repeated_request_hits_cache() {
        let engine = UnificationEngine::default();
        let mut cache = ProjectionCache::new();
        let request = ViewRequest::new(FrameworkSelection::all());

        let first = engine.unify_cached(&mut cache, &snapshot("v1"), &request);
        let second = engine.unify_cached(&mut cache, &snapshot("v1"), &request);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_inputs_get_distinct_entries() {
        let engine = UnificationEngine::default();
        let mut cache = ProjectionCache::new();

        engine.unify_cached(&mut cache, &snapshot("v1"), &ViewRequest::new(FrameworkSelection::all()));
        engine.unify_cached(
            &mut cache,
            &snapshot("v1"),
            &ViewRequest::new(FrameworkSelection::only(FrameworkKey::IsoA)),
        );
        engine.unify_cached(&mut cache, &snapshot("v2"), &ViewRequest::new(FrameworkSelection::all()));
        engine.unify_cached(
            &mut cache,
            &snapshot("v1"),
            &ViewRequest::new(FrameworkSelection::all()).with_sector("health"),
        );

        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_invalidate() {
        let engine = UnificationEngine::default();
        let mut cache = ProjectionCache::new();
        let request = ViewRequest::new(FrameworkSelection::all());

        engine.unify_cached(&mut cache, &snapshot("v1"), &request);
        engine.unify_cached(&mut cache, &snapshot("v2"), &request);

        cache.invalidate_version("v1");
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&CacheKey::new(&snapshot("v2"), &request)).is_some());

        cache.invalidate();
        assert!(cache.is_empty());
    }
}
