//! Framework unification CLI
//!
//! Loads a requirement catalogue, applies a framework selection and prints,
//! summarises or exports the unified view.

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared_types::{FrameworkKey, FrameworkSelection, IgLevel};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unification_engine::{
    load_catalogue, ApplicableStandards, ApplicableStandardsStore, EngineConfig, JsonFileStore,
    OutputFormat, UnificationEngine, UnifiedView, ViewRequest,
};

#[derive(Parser, Debug)]
#[command(name = "unify")]
#[command(
    version,
    about = "Project a unified compliance catalogue onto selected frameworks"
)]
struct Args {
    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalogue JSON (bare group array or {version, groups})
    #[arg(long, global = true)]
    catalogue: Option<PathBuf>,

    #[command(flatten)]
    frameworks: FrameworkArgs,

    /// Sector for NIS2 enhancement (health, energy, finance, transport, digital_infrastructure)
    #[arg(long, global = true)]
    sector: Option<String>,

    /// Show a single category (name or group id)
    #[arg(long, global = true)]
    category: Option<String>,

    /// Show only groups mapped to this framework
    #[arg(long, global = true)]
    only: Option<String>,

    /// Remember the selection in this state file
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug, Default)]
struct FrameworkArgs {
    #[arg(long, global = true)]
    iso_a: bool,

    #[arg(long, global = true)]
    iso_b: bool,

    /// CIS Controls implementation group: tier1, tier2 or tier3
    #[arg(long, global = true)]
    tier: Option<String>,

    #[arg(long, global = true)]
    regulation: bool,

    #[arg(long, global = true)]
    directive: bool,

    /// Select every framework at tier3
    #[arg(long, global = true)]
    all: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the unified view as JSON
    Project,
    /// Print maximum and current reduction statistics
    Stats {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write export rows
    Export {
        /// csv, tsv, json or json-pretty
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Clear the remembered selection
    Forget,
}

impl FrameworkArgs {
    fn is_explicit(&self) -> bool {
        self.iso_a || self.iso_b || self.tier.is_some() || self.regulation || self.directive || self.all
    }

    fn selection(&self) -> Result<FrameworkSelection> {
        if self.all {
            return Ok(FrameworkSelection::all());
        }

        let mut selection = FrameworkSelection::none();
        if self.iso_a {
            selection = selection.with(FrameworkKey::IsoA);
        }
        if self.iso_b {
            selection = selection.with(FrameworkKey::IsoB);
        }
        if let Some(tier) = &self.tier {
            let level = IgLevel::parse(tier)
                .with_context(|| format!("Unknown tier '{}'. Use tier1, tier2 or tier3", tier))?;
            selection = selection.with_tier(level);
        }
        if self.regulation {
            selection = selection.with(FrameworkKey::Regulation);
        }
        if self.directive {
            selection = selection.with(FrameworkKey::Directive);
        }
        Ok(selection)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries results, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = args.state.as_ref().map(JsonFileStore::new);

    match &args.command {
        Command::Forget => {
            let store = store.context("--state is required for forget")?;
            store
                .clear()
                .context("Failed to clear remembered selection")?;
            tracing::info!("Cleared {}", store.path().display());
        }
        Command::Project => {
            let (_, view) = build_view(&args, store.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Stats { json } => {
            let (_, view) = build_view(&args, store.as_ref())?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&view.stats)?);
            } else {
                print!("{}", report::format_stats(&view)?);
            }
        }
        Command::Export { format, output } => {
            let format = OutputFormat::parse(format).with_context(|| {
                format!("Unknown format '{}'. Use csv, tsv, json or json-pretty", format)
            })?;
            let (engine, view) = build_view(&args, store.as_ref())?;
            let (headers, rows) = engine.export_view(&view);
            let exporter = engine.exporter(format);
            match output {
                Some(path) => {
                    exporter
                        .write_to_file(&headers, &rows, path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {} rows to {}", rows.len(), path.display());
                }
                None => print!("{}", exporter.render_with_headers(&headers, &rows)?),
            }
        }
    }

    Ok(())
}

fn build_view(args: &Args, store: Option<&JsonFileStore>) -> Result<(UnificationEngine, UnifiedView)> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let catalogue_path = args.catalogue.as_ref().context("--catalogue is required")?;
    let snapshot = load_catalogue(catalogue_path)?;

    let applicable = resolve_standards(args, store)?;

    let mut request = ViewRequest::new(applicable.selection);
    request.sector_id = applicable.sector_id;
    request.category_filter = args.category.clone();
    if let Some(only) = &args.only {
        let key = FrameworkKey::parse(only)
            .with_context(|| format!("Unknown framework '{}'", only))?;
        request = request.with_only_framework(key);
    }

    let engine = UnificationEngine::new(config);
    let view = engine.unify(&snapshot, &request);
    Ok((engine, view))
}

/// Selection and sector from flags, falling back to the remembered state.
/// Explicit flags are written back when a state file is in use.
fn resolve_standards(
    args: &Args,
    store: Option<&JsonFileStore>,
) -> Result<ApplicableStandards> {
    let explicit = args.frameworks.is_explicit() || args.sector.is_some();

    let remembered = match store {
        Some(store) => {
            store.init(&ApplicableStandards {
                selection: FrameworkSelection::all(),
                sector_id: None,
            })?;
            store.read()?
        }
        None => None,
    };

    let standards = if explicit {
        let selection = if args.frameworks.is_explicit() {
            args.frameworks.selection()?
        } else {
            remembered
                .as_ref()
                .map(|r| r.selection)
                .unwrap_or_else(FrameworkSelection::all)
        };
        ApplicableStandards {
            selection,
            sector_id: args
                .sector
                .clone()
                .or_else(|| remembered.as_ref().and_then(|r| r.sector_id.clone())),
        }
    } else {
        remembered.unwrap_or(ApplicableStandards {
            selection: FrameworkSelection::all(),
            sector_id: None,
        })
    };

    if explicit {
        if let Some(store) = store {
            store.write(&standards)?;
        }
    }
    Ok(standards)
}
