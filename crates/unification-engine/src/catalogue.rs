//! Loading catalogue snapshots from JSON

use crate::error::{EngineError, Result};
use serde_json::{Map, Value};
use shared_types::{CatalogueDocument, CatalogueSnapshot, FrameworkKey};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Rewrite each group's `frameworks` keys to wire ids. Keys may be wire ids
/// or standard names such as "ISO/IEC 27001:2022" or "CIS Controls IG1";
/// buckets naming the same framework are merged into one and
/// unrecognised names are dropped.
fn normalize_framework_names(document: &mut Value) {
    let groups = match document {
        Value::Array(groups) => groups,
        Value::Object(map) => match map.get_mut("groups") {
            Some(Value::Array(groups)) => groups,
            _ => return,
        },
        _ => return,
    };

    for group in groups.iter_mut() {
        let Some(Value::Object(frameworks)) = group.get_mut("frameworks") else {
            continue;
        };

        let mut normalized = Map::new();
        for (name, controls) in std::mem::take(frameworks) {
            let Some(key) = FrameworkKey::parse(&name) else {
                warn!(standard = %name, "unrecognised framework name, dropping its controls");
                continue;
            };
            let bucket = normalized
                .entry(key.id())
                .or_insert_with(|| Value::Array(Vec::new()));
            match (bucket, controls) {
                (Value::Array(existing), Value::Array(more)) => existing.extend(more),
                (_, other) => {
                    warn!(standard = %name, value = %other, "framework bucket is not a list, dropping it");
                }
            }
        }
        *frameworks = normalized;
    }
}

/// Parse a catalogue document (bare array or `{version, groups}` object)
pub fn parse_catalogue(json: &str) -> Result<CatalogueSnapshot> {
    let mut value: Value = serde_json::from_str(json)?;
    normalize_framework_names(&mut value);
    let document: CatalogueDocument = serde_json::from_value(value)?;
    let snapshot = CatalogueSnapshot::from(document);

    for group in snapshot.groups.iter().filter(|g| g.frameworks.is_empty()) {
        warn!(group = %group.id, "catalogue group has no mapped controls; it will never be shown");
    }
    debug!(
        version = %snapshot.version,
        groups = snapshot.groups.len(),
        "loaded catalogue"
    );

    Ok(snapshot)
}

pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<CatalogueSnapshot> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| EngineError::CatalogueRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalogue(&content)
}
