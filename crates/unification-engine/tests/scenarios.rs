//! End-to-end projection scenarios over a small three-group catalogue

mod common;

use common::{codes, snapshot, three_group_catalogue, REGULATION_GROUP};
use pretty_assertions::assert_eq;
use shared_types::{ControlRef, FrameworkKey, FrameworkSelection, IgLevel};
use unification_engine::export::{export_headers, export_rows};
use unification_engine::ig_level::filter_controls;
use unification_engine::projection::project;
use unification_engine::renumber::renumber_categories;
use unification_engine::{
    parse_catalogue, Exporter, OutputFormat, ProjectionCache, Stats, UnificationEngine,
    ViewRequest,
};

// ============================================================================
// Projection
// ============================================================================

#[test]
fn iso_a_only_projects_first_group() {
    let selection = FrameworkSelection::only(FrameworkKey::IsoA);
    let projected = project(&three_group_catalogue(), &selection, REGULATION_GROUP);

    assert_eq!(projected.len(), 1);
    let g1 = &projected[0];
    assert_eq!(g1.id, "g1");
    assert_eq!(g1.frameworks.bucket(FrameworkKey::IsoA).len(), 2);
    for key in [
        FrameworkKey::IsoB,
        FrameworkKey::TieredControls,
        FrameworkKey::Regulation,
        FrameworkKey::Directive,
    ] {
        assert!(g1.frameworks.bucket(key).is_empty(), "{} should be empty", key);
    }

    assert_eq!(
        Stats::compute(&projected),
        Stats {
            total_source_requirements: 2,
            unified_group_count: 1,
            reduction: 1,
            reduction_percentage: "50.0".to_string(),
            efficiency_ratio: 2,
        }
    );
}

#[test]
fn regulation_with_iso_a_keeps_both_partitions() {
    let selection = FrameworkSelection::only(FrameworkKey::Regulation).with(FrameworkKey::IsoA);
    let projected = project(&three_group_catalogue(), &selection, REGULATION_GROUP);
    let renumbered = renumber_categories(&projected, REGULATION_GROUP);

    let labels: Vec<(&str, &str)> = renumbered
        .iter()
        .map(|g| (g.id.as_str(), g.category.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![("g1", "01. Asset Management"), ("gdpr", "02. Data Protection")]
    );
    assert_eq!(renumbered[1].frameworks.bucket(FrameworkKey::Regulation).len(), 4);
}

#[test]
fn regulation_only_shows_just_the_regulation_group() {
    let selection = FrameworkSelection::only(FrameworkKey::Regulation);
    let projected = project(&three_group_catalogue(), &selection, REGULATION_GROUP);

    assert_eq!(projected.len(), 1);
    assert_eq!(projected[0].id, REGULATION_GROUP);
}

#[test]
fn empty_selection_projects_nothing() {
    let projected = project(
        &three_group_catalogue(),
        &FrameworkSelection::none(),
        REGULATION_GROUP,
    );
    assert!(projected.is_empty());
}

#[test]
fn tier_levels_filter_cumulatively() {
    let bucket = vec![
        ControlRef::new("1.1", "Inventory"),
        ControlRef::new("1.5", "Asset log"),
        ControlRef::new("13.1", "Network monitoring"),
    ];

    assert_eq!(codes(&filter_controls(&bucket, Some(IgLevel::Tier1))), vec!["1.1"]);
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
fn tier_filter_flows_through_projection() {
    let selection = FrameworkSelection::none().with_tier(IgLevel::Tier1);
    let projected = project(&three_group_catalogue(), &selection, REGULATION_GROUP);

    assert_eq!(projected.len(), 1);
    assert_eq!(
        codes(projected[0].frameworks.bucket(FrameworkKey::TieredControls)),
        vec!["1.1"]
    );
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn pipeline_reports_maximum_and_current_from_same_snapshot() {
    let engine = UnificationEngine::default();
    let view = engine.unify(
        &snapshot(),
        &ViewRequest::new(FrameworkSelection::only(FrameworkKey::IsoA)),
    );

    assert_eq!(view.snapshot_version, "fixture-1");
    assert_eq!(view.stats.snapshot_version, "fixture-1");
    assert_eq!(view.stats.maximum.total_source_requirements, 10);
    assert_eq!(view.stats.maximum.unified_group_count, 3);
    assert_eq!(view.stats.current.total_source_requirements, 2);
}

#[test]
fn pipeline_strips_prose_about_unselected_frameworks() {
    let engine = UnificationEngine::default();
    let view = engine.unify(
        &snapshot(),
        &ViewRequest::new(FrameworkSelection::only(FrameworkKey::IsoA)),
    );

    let unified = &view.groups[0].unified;
    assert_eq!(unified.description, "Track hardware and software.");
    assert_eq!(unified.sub_requirements.len(), 2);
}

#[test]
fn pipeline_enhances_for_sector_when_directive_selected() {
    let engine = UnificationEngine::default();
    let request = ViewRequest::new(FrameworkSelection::only(FrameworkKey::Directive))
        .with_sector("transport");
    let view = engine.unify(&snapshot(), &request);

    let g3 = &view.groups[0];
    assert_eq!(g3.category, "01. Incident Management");
    assert!(g3.unified.sub_requirements.len() > 1);
    assert!(g3
        .industry_specific
        .as_ref()
        .is_some_and(|entries| !entries.is_empty()));
}

#[test]
fn catalogue_json_round_trips_through_pipeline() {
    let json = serde_json::to_string(&snapshot()).unwrap();
    let parsed = parse_catalogue(&json).unwrap();
    assert_eq!(parsed, snapshot());

    let engine = UnificationEngine::default();
    let mut cache = ProjectionCache::new();
    let request = ViewRequest::new(FrameworkSelection::all());
    let first = engine.unify_cached(&mut cache, &parsed, &request);
    let second = engine.unify_cached(&mut cache, &parsed, &request);
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_has_columns_only_for_selected_frameworks() {
    let selection = FrameworkSelection::only(FrameworkKey::Regulation).with(FrameworkKey::IsoA);
    let engine = UnificationEngine::default();
    let view = engine.unify(&snapshot(), &ViewRequest::new(selection));

    let headers = export_headers(&selection, false);
    assert_eq!(
        headers[4..].to_vec(),
        vec!["ISO 27001".to_string(), "GDPR".to_string()]
    );

    let rows = export_rows(&view.groups, &selection, None, "; ");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.cells().len() == headers.len()));
    assert_eq!(rows[1].cells()[5], "Art. 5: Control Art. 5\nArt. 25: Control Art. 25\nArt. 32: Control Art. 32\nArt. 33: Control Art. 33");
    assert_eq!(rows[0].cells()[5], "");
}

#[test]
fn export_adds_industry_column_with_sector() {
    let selection = FrameworkSelection::only(FrameworkKey::Directive);
    let engine = UnificationEngine::default();
    let view = engine.unify(
        &snapshot(),
        &ViewRequest::new(selection).with_sector("energy"),
    );

    let (headers, rows) = engine.export_view(&view);
    assert_eq!(headers.last().map(String::as_str), Some("Industry Requirements"));
    assert!(rows[0]
        .industry_requirements
        .as_deref()
        .is_some_and(|cell| cell.contains("[")));

    let tsv = Exporter::new(OutputFormat::Tsv)
        .render_with_headers(&headers, &rows)
        .unwrap();
    assert!(tsv.lines().next().unwrap().ends_with("NIS2\tIndustry Requirements"));
}
