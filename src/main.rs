//! Region-Merge Puzzle Explorer
//!
//! Loads a region-merge level (a JSON file, stdin, or a built-in level),
//! explores every reachable state breadth-first, and reports how many
//! distinct states exist and how few moves solve the level.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;
use thiserror::Error;

use kami_graph::report::{format_layers, format_path, format_summary};
use kami_graph::{
    levels, ExploreConfig, Explorer, GraphSummary, LevelFile, RegionMergeConfig,
    RegionMergePuzzle, RegionState, StateGraph,
};

/// Explores the state graph of region-merge puzzles.
#[derive(Parser)]
#[command(name = "kami-graph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explore a level and print a summary of its state graph.
    Explore {
        #[command(flatten)]
        source: LevelSource,
        #[command(flatten)]
        limits: Limits,
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
        /// Also list every state, grouped by depth.
        #[arg(long)]
        layers: bool,
    },
    /// Print a shortest sequence of moves that solves a level.
    Solve {
        #[command(flatten)]
        source: LevelSource,
        #[command(flatten)]
        limits: Limits,
    },
    /// List the built-in levels.
    Levels,
}

#[derive(Args)]
struct LevelSource {
    /// Path to a level JSON file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read the level from stdin
    #[arg(long, conflicts_with = "file")]
    stdin: bool,

    /// Use a built-in level instead of a file
    #[arg(long, conflicts_with_all = ["file", "stdin"])]
    builtin: Option<String>,
}

#[derive(Args)]
struct Limits {
    /// Stop after discovering this many states
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Stop after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl From<&Limits> for ExploreConfig {
    fn from(limits: &Limits) -> Self {
        ExploreConfig {
            max_nodes: limits.max_nodes,
            timeout: limits.timeout.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Level(#[from] kami_graph::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no built-in level named '{0}' (see `kami-graph levels`)")]
    UnknownLevel(String),
    #[error("provide a level FILE, --stdin or --builtin NAME")]
    NoLevel,
}

/// JSON output of `explore --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExploreOutput {
    summary: GraphSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    shortest_solution: Option<Vec<String>>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Explore {
            source,
            limits,
            json,
            layers,
        } => run_explore(&source, &limits, json, layers),
        Command::Solve { source, limits } => run_solve(&source, &limits),
        Command::Levels => {
            run_levels();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_level(source: &LevelSource) -> Result<RegionMergeConfig, CliError> {
    if let Some(name) = &source.builtin {
        return levels::builtin(name).ok_or_else(|| CliError::UnknownLevel(name.clone()));
    }

    let level = if source.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(kami_graph::Error::from)?;
        LevelFile::from_json(&buffer)?
    } else if let Some(path) = &source.file {
        LevelFile::load(path)?
    } else {
        return Err(CliError::NoLevel);
    };

    Ok(level.into_config().map_err(kami_graph::Error::from)?)
}

/// Builds the puzzle and explores it within `limits`.
fn explore(
    source: &LevelSource,
    limits: &Limits,
) -> Result<(RegionMergePuzzle, StateGraph<RegionState>), CliError> {
    let config = load_level(source)?;
    let mut puzzle = RegionMergePuzzle::new(&config).map_err(kami_graph::Error::from)?;
    let graph = Explorer::new(&mut puzzle).run(&ExploreConfig::from(limits));
    Ok((puzzle, graph))
}

fn run_explore(
    source: &LevelSource,
    limits: &Limits,
    json: bool,
    layers: bool,
) -> Result<(), CliError> {
    let (mut puzzle, graph) = explore(source, limits)?;
    let summary = graph.summary();

    if json {
        let shortest_solution = graph.shortest_solution().map(|path| {
            path.iter()
                .filter_map(|&id| graph.node(id))
                .map(|node| node.state.to_string())
                .collect()
        });
        let output = ExploreOutput {
            summary,
            shortest_solution,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", format_summary(&summary));
    if layers {
        println!();
        println!("{}", format_layers(&graph));
    }
    if let Some(path) = graph.shortest_solution() {
        println!();
        println!("{}", format_path(&mut puzzle, &graph, &path));
    }
    Ok(())
}

fn run_solve(source: &LevelSource, limits: &Limits) -> Result<(), CliError> {
    let (mut puzzle, graph) = explore(source, limits)?;

    match graph.shortest_solution() {
        Some(path) => {
            println!("Solved in {} moves", path.len().saturating_sub(1));
            println!("{}", format_path(&mut puzzle, &graph, &path));
        }
        None if graph.is_exhausted() => println!("No solution exists"),
        None => println!(
            "No solution found within the limits ({} states explored)",
            graph.len()
        ),
    }
    Ok(())
}

fn run_levels() {
    for (name, build) in levels::LEVELS {
        let config = build();
        println!(
            "{name}: {} regions, {} colors",
            config.regions.len(),
            config.number_of_colors
        );
    }
}
