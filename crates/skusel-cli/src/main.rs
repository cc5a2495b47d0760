mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skusel_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

const THRESHOLD_VAR: &str = "SKUSEL_LOW_STOCK_THRESHOLD";

#[derive(Debug, Parser)]
#[command(name = "skusel-cli")]
#[command(about = "Resolve product variant selections from catalog snapshots")]
struct Cli {
    /// Upper bound of the low-stock bucket; overrides `SKUSEL_LOW_STOCK_THRESHOLD`.
    #[arg(long, global = true)]
    low_stock_threshold: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print variant aggregate stats and headline price/stock figures.
    Summary {
        /// Catalog snapshot (JSON, or YAML by extension).
        file: PathBuf,
    },
    /// Print option states, the matched variant and the update gate.
    Resolve {
        /// Catalog snapshot (JSON, or YAML by extension).
        file: PathBuf,
        /// A pick as `attribute=value`; repeat to build up the selection.
        #[arg(long = "select", value_parser = parse_pick)]
        picks: Vec<(String, String)>,
        /// Start from the first in-stock variant before applying picks.
        #[arg(long)]
        default: bool,
    },
    /// Print the attribute set and every value each attribute takes.
    Attributes {
        /// Catalog snapshot (JSON, or YAML by extension).
        file: PathBuf,
    },
}

/// Parses `attribute=value`. The value may itself contain `=`.
fn parse_pick(raw: &str) -> Result<(String, String), String> {
    let (attribute, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected attribute=value, got '{raw}'"))?;
    let attribute = attribute.trim();
    if attribute.is_empty() {
        return Err(format!("missing attribute name in '{raw}'"));
    }
    Ok((attribute.to_string(), value.to_string()))
}

/// Builds the app config, letting `--low-stock-threshold` stand in for
/// `SKUSEL_LOW_STOCK_THRESHOLD` so a bad env value does not block the flag.
fn app_config<F>(low_stock_threshold: Option<u32>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    skusel_core::build_app_config(|key| match low_stock_threshold {
        Some(threshold) if key == THRESHOLD_VAR => Ok(threshold.to_string()),
        _ => lookup(key),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = app_config(cli.low_stock_threshold, |key| std::env::var(key))?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = config.stock_policy();

    let output = match cli.command {
        Some(Commands::Summary { file }) => {
            let catalog = load(&file)?;
            serde_json::to_value(report::summary(&catalog, &policy))?
        }
        Some(Commands::Resolve {
            file,
            picks,
            default,
        }) => {
            let catalog = load(&file)?;
            serde_json::to_value(report::resolution(&catalog, &picks, default, &policy))?
        }
        Some(Commands::Attributes { file }) => {
            let catalog = load(&file)?;
            serde_json::to_value(report::attributes(&catalog))?
        }
        None => {
            println!("skusel-cli: pass a subcommand (summary, resolve, attributes); see --help");
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load(path: &std::path::Path) -> anyhow::Result<skusel_core::Catalog> {
    let catalog = skusel_resolver::load_catalog(path)
        .with_context(|| format!("loading catalog {}", path.display()))?;
    tracing::info!(
        product_id = %catalog.product_id,
        variants = catalog.variants.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
