//! Framework unification engine
//!
//! Projects a catalogue of cross-framework requirement groups onto the
//! frameworks a user has selected, renumbers categories, computes reduction
//! statistics, strips prose about unselected frameworks, injects
//! sector-specific content and exports the result.

pub mod cache;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod export;
pub mod ig_level;
pub mod pipeline;
pub mod projection;
pub mod renumber;
pub mod sectors;
pub mod stats;
pub mod store;
pub mod text_filter;

pub use cache::ProjectionCache;
pub use catalogue::{load_catalogue, parse_catalogue};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use export::{export_headers, export_rows, Exporter, OutputFormat};
pub use pipeline::{UnificationEngine, UnifiedView, ViewRequest};
pub use sectors::Sector;
pub use stats::{Stats, StatsComparison};
pub use store::{ApplicableStandards, ApplicableStandardsStore, JsonFileStore, MemoryStore};
