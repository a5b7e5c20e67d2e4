//! Meteomapa - regional weather-alert overlays and alert tables.
//!
//! Meteomapa pairs two inputs that are downloaded by hand: a Meteoalarm
//! CAP/Atom alert feed and per-region GeoJSON polygon files. It extracts the
//! alerts from the feed into a table ranked by severity, and projects a
//! region's polygons as a single colored overlay on a map.
//!
//! # Overview
//!
//! The interesting work lives in two independent components:
//!
//! - [`alerts`] - extracts alert records from the feed text with six
//!   positional field scans and ranks them extreme > severe > rest
//! - [`overlay`] - owns the single live map layer for a region's polygons
//!   and replaces or recolors it on demand
//!
//! The remaining modules are wiring: [`config`] for YAML settings with
//! environment overrides, [`regions`] for the region index, and this file
//! for the command line.
//!
//! # Usage
//!
//! Print the alert table from a downloaded feed:
//!
//! ```bash
//! meteomapa --feed meteoalarm-legacy-atom-spain.xml
//! ```
//!
//! Load a region's polygons at the orange level, then recolor to red:
//!
//! ```bash
//! meteomapa --region R07.geojson --level naranja --recolor rojo
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `METEOMAPA_*` - Overrides configuration values (see [`config`])

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use crate::alerts::{FeedParser, render_table};
use crate::config::Config;
use crate::overlay::{LogMap, OverlayManager, SeverityLevel};

mod alerts;
mod config;
mod overlay;
mod regions;

/// Command-line arguments for meteomapa.
///
/// All inputs are local files the user has downloaded beforehand; nothing
/// is fetched from the network.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Missing files are fine: defaults apply, overridable through
    /// `METEOMAPA_`-prefixed environment variables.
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Path to a region GeoJSON file to load as the map overlay.
    #[arg(short, long)]
    region: Option<String>,

    /// Severity level to color the loaded region with.
    ///
    /// One of `amarillo`, `naranja` or `rojo`. Defaults to the configured
    /// `overlay.default_level`.
    #[arg(short, long)]
    level: Option<SeverityLevel>,

    /// Recolor the live overlay to this level after loading.
    #[arg(long)]
    recolor: Option<SeverityLevel>,

    /// Path to a downloaded Meteoalarm alert feed to parse.
    ///
    /// The file name must start with the configured feed prefix.
    #[arg(short, long)]
    feed: Option<String>,

    /// Print the region index and exit.
    #[arg(long)]
    list_regions: bool,
}

/// Main entry point.
///
/// Initializes logging, loads the configuration and runs the requested
/// actions. Failures are logged and abort only the current invocation.
fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("starting meteomapa {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("failed to load config file: {}", e);
            return;
        }
    };

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Runs the actions selected on the command line.
fn run(args: &Args, config: &Config) -> anyhow::Result<()> {
    if args.list_regions {
        for region in regions::region_ids(config.regions.count) {
            println!("{}", regions::geojson_filename(&region));
        }
        return Ok(());
    }

    let mut manager = OverlayManager::new(LogMap::new());
    let level = args.level.unwrap_or(config.overlay.default_level);

    if let Some(region_path) = &args.region {
        load_region(&mut manager, region_path, level)?;
    }

    if let Some(recolor_level) = args.recolor {
        // Surfaced as a user instruction rather than a failure
        if let Err(e) = manager.recolor(recolor_level) {
            warn!("{}", e);
        }
    }

    if let Some(feed_path) = &args.feed {
        print_alert_table(feed_path, &config.feed.file_prefix)?;
    }

    Ok(())
}

/// Reads a region GeoJSON file and installs it as the live overlay.
fn load_region(
    manager: &mut OverlayManager<LogMap>,
    path: &str,
    level: SeverityLevel,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read region file {path}"))?;
    let geometry = serde_json::from_str(&raw)
        .with_context(|| format!("region file {path} is not valid JSON"))?;

    manager.load(geometry, level);

    Ok(())
}

/// Parses a downloaded alert feed and prints the ranked table.
fn print_alert_table(path: &str, prefix: &str) -> anyhow::Result<()> {
    let file_name = std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    if !regions::is_alert_feed(file_name, prefix) {
        anyhow::bail!("feed file name {file_name} does not start with {prefix}");
    }

    let feed =
        std::fs::read_to_string(path).with_context(|| format!("failed to read feed {path}"))?;

    let outcome = FeedParser::new().parse(&feed);
    if outcome.discarded > 0 {
        warn!(
            "{} field values in the feed could not be paired into alerts",
            outcome.discarded
        );
    }

    print!("{}", render_table(&outcome.records));

    Ok(())
}
