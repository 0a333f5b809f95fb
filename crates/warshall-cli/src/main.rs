// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! `warshall`: all-pairs shortest paths from the command line.
//!
//! Reads an adjacency matrix (see `warshall_core::parse_adjacency` for the
//! format), runs the engine, and renders every relaxation round, the final
//! distances, and each reconstructed path. Preferences persist as JSON in the
//! platform config directory; flags override them for one run.

mod render;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use warshall_app_core::config::ConfigService;
use warshall_app_core::prefs::{CliPrefs, LabelBase, CLI_PREFS_KEY};
use warshall_config_fs::FsConfigStore;
use warshall_core::{parse_adjacency, PathEngine, WeightPolicy};

#[derive(Parser)]
#[command(
    name = "warshall",
    version,
    about = "All-pairs shortest paths with per-round snapshots",
    disable_help_subcommand = true
)]
struct Cli {
    /// Store preferences in this directory instead of the platform config dir.
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Ignore stored preferences entirely.
    #[arg(long, global = true, conflicts_with = "config_dir")]
    no_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a graph read from FILE (or stdin) and print the results.
    Solve(SolveArgs),
    /// Inspect or persist preferences.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective preferences as JSON.
    Show(Overrides),
    /// Persist the effective preferences.
    Save(Overrides),
}

#[derive(Args)]
struct SolveArgs {
    /// Adjacency matrix file; `-` or omitted reads stdin.
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(flatten)]
    overrides: Overrides,
}

// Per-run overrides layered on top of stored preferences.
#[derive(Args)]
struct Overrides {
    /// Vertex labelling in text output.
    #[arg(long, value_enum)]
    labels: Option<Labels>,

    /// Reject malformed weight cells instead of treating them as "no edge".
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Treat malformed weight cells as "no edge".
    #[arg(long)]
    lenient: bool,

    /// Largest accepted vertex count.
    #[arg(long, value_name = "N")]
    max_vertices: Option<usize>,

    /// Worker threads per relaxation round.
    #[arg(long, value_name = "N")]
    workers: Option<usize>,

    /// Skip the per-round tables.
    #[arg(long)]
    no_iterations: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Labels {
    One,
    Zero,
}

impl Overrides {
    fn apply(&self, mut prefs: CliPrefs) -> CliPrefs {
        if let Some(labels) = self.labels {
            prefs.labels = match labels {
                Labels::One => LabelBase::One,
                Labels::Zero => LabelBase::Zero,
            };
        }
        if self.strict {
            prefs.engine.weight_policy = WeightPolicy::Strict;
        }
        if self.lenient {
            prefs.engine.weight_policy = WeightPolicy::Lenient;
        }
        if let Some(max) = self.max_vertices {
            prefs.engine.max_vertices = max;
        }
        if let Some(workers) = self.workers {
            prefs.engine.workers = workers;
        }
        if self.no_iterations {
            prefs.show_iterations = false;
        }
        prefs
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let service = config_service(&cli);
    let stored = load_prefs(service.as_ref());

    match cli.command {
        Commands::Solve(args) => run_solve(&args, args.overrides.apply(stored)),
        Commands::Config { action } => match action {
            ConfigAction::Show(overrides) => {
                let prefs = overrides.apply(stored);
                let mut out = io::stdout().lock();
                serde_json::to_writer_pretty(&mut out, &prefs)?;
                writeln!(out)?;
                Ok(())
            }
            ConfigAction::Save(overrides) => {
                let Some(service) = service else {
                    bail!("no preference store available (pass --config-dir or drop --no-config)");
                };
                let prefs = overrides.apply(stored);
                service
                    .save(CLI_PREFS_KEY, &prefs)
                    .context("failed to save preferences")?;
                Ok(())
            }
        },
    }
}

fn config_service(cli: &Cli) -> Option<ConfigService<FsConfigStore>> {
    if cli.no_config {
        return None;
    }
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => match FsConfigStore::new() {
            Ok(store) => store,
            Err(err) => {
                warn!(%err, "no platform config dir; using defaults");
                return None;
            }
        },
    };
    debug!(base = %store.base().display(), "preference store");
    Some(ConfigService::new(store))
}

fn load_prefs(service: Option<&ConfigService<FsConfigStore>>) -> CliPrefs {
    let Some(service) = service else {
        return CliPrefs::default();
    };
    match service.load::<CliPrefs>(CLI_PREFS_KEY) {
        Ok(prefs) => prefs.unwrap_or_default(),
        Err(err) => {
            warn!(%err, "ignoring unreadable preferences");
            CliPrefs::default()
        }
    }
}

fn run_solve(args: &SolveArgs, prefs: CliPrefs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let adjacency = parse_adjacency(&text, prefs.engine.weight_policy)
        .context("invalid adjacency matrix")?;
    let solution = PathEngine::new(prefs.engine.clone())
        .solve(&adjacency)
        .context("cannot solve graph")?;

    let mut out = io::stdout().lock();
    match args.format {
        Format::Text => render::write_report(
            &mut out,
            &solution,
            prefs.labels.offset(),
            prefs.show_iterations,
        )?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &solution)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
