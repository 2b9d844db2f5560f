//! Headless battle simulator.
//!
//! Builds two rosters from NFT metadata files, lets the AI play both sides
//! and prints the battle log.
//!
//! ```bash
//! battle-sim --roster-a team_a.json --roster-b team_b.json --seed 42
//! RUST_LOG=battle_core=debug battle-sim -a team_a.json -b team_b.json --format json
//! battle-sim -a team_a.json -b team_b.json --battles 200
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use battle_content::{AbilityCatalog, AbilityLoader, ConfigLoader, RosterLoader};
use battle_core::BattleConfig;
use battle_runtime::{SimulationConfig, SimulationReport, SweepSummary, simulate, sweep};

/// Simulate a battle between two NFT rosters
#[derive(Parser)]
#[command(name = "battle-sim")]
#[command(about = "AI-vs-AI battle simulator for NFT rosters", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON metadata for the first roster (player side)
    #[arg(short = 'a', long, value_name = "FILE")]
    roster_a: PathBuf,

    /// JSON metadata for the second roster (opponent side)
    #[arg(short = 'b', long, value_name = "FILE")]
    roster_b: PathBuf,

    /// Battle seed; the same seed replays the same battle
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// TOML battle configuration (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RON file with extra or overriding abilities
    #[arg(long, value_name = "FILE")]
    abilities: Option<PathBuf>,

    /// Give up after this many unit turns
    #[arg(long, default_value_t = SimulationConfig::DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Play this many battles on seeds derived from --seed and report the
    /// tally instead of a log
    #[arg(long, default_value = "1")]
    battles: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "log")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per battle event, then a summary
    Log,
    /// One JSON object per battle event
    Json,
    /// Summary only
    Summary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let battle = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };
    let catalog = match &cli.abilities {
        Some(path) => AbilityCatalog::standard().merged(AbilityLoader::load(path)?),
        None => AbilityCatalog::standard(),
    };
    let roster_a = RosterLoader::load(&cli.roster_a)?;
    let roster_b = RosterLoader::load(&cli.roster_b)?;
    tracing::info!(
        roster_a = roster_a.len(),
        roster_b = roster_b.len(),
        abilities = catalog.len(),
        "Loaded battle content"
    );

    let config = SimulationConfig::new(cli.seed)
        .with_max_turns(cli.max_turns)
        .with_battle_config(battle);

    if cli.battles > 1 {
        let summary = sweep(&catalog, &roster_a, &roster_b, &config, cli.battles)
            .context("Sweep failed")?;
        print_sweep(&summary);
        return Ok(());
    }

    let report = simulate(catalog, roster_a, roster_b, &config).context("Simulation failed")?;

    match cli.format {
        OutputFormat::Log => {
            for event in &report.events {
                println!("[{:>4}] {}", event.timestamp, event.description);
            }
            println!();
            print_summary(&report);
        }
        OutputFormat::Json => {
            for event in &report.events {
                println!("{}", serde_json::to_string(event)?);
            }
        }
        OutputFormat::Summary => print_summary(&report),
    }

    Ok(())
}

fn print_summary(report: &SimulationReport) {
    if report.timed_out() {
        println!("No winner after {} turns", report.turns);
    } else {
        println!("Result: {}", report.status);
    }
    println!(
        "Rounds: {}  Turns: {}  Events: {}",
        report.rounds,
        report.turns,
        report.events.len()
    );
    println!(
        "Survivors: roster A {}, roster B {}",
        report.survivors_a, report.survivors_b
    );
}

fn print_sweep(summary: &SweepSummary) {
    println!("Battles: {}", summary.battles);
    println!(
        "Roster A wins: {}  Roster B wins: {}  Unfinished: {}",
        summary.victories, summary.defeats, summary.timeouts
    );
    println!(
        "Roster A win rate: {:.1}%  Average turns: {:.1}",
        summary.win_rate(),
        summary.average_turns()
    );
}
