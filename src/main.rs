// SPDX-License-Identifier: PMPL-1.0-or-later

//! pass-gauntlet: timed password-rule game
//!
//! `play` runs the interactive game. `rules` and `check` expose the rule
//! engine for a single round without the clock.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pass_gauntlet::config::GameConfig;
use pass_gauntlet::output::OutputFormat;
use pass_gauntlet::{display, game, rules};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pass-gauntlet")]
#[command(version)]
#[command(about = "Type a password that satisfies every rule before time runs out")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the timed game in this terminal
    Play {
        /// Game config file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for reproducible digit-sum targets
        #[arg(short, long)]
        seed: Option<u64>,

        /// Round to start from
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        start_round: Option<u32>,
    },

    /// Print the requirements for one round
    Rules {
        /// Round number
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        round: u32,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a password against one round's requirements
    Check {
        /// Password to validate
        #[arg(value_name = "PASSWORD")]
        password: String,

        /// Round number
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        round: u32,

        /// RNG seed (must match the one used for `rules` to see the same target)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            config,
            seed,
            start_round,
        } => {
            let mut config = match config {
                Some(path) => GameConfig::load(&path)?,
                None => GameConfig::default(),
            };
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(round) = start_round {
                config.start_round = round;
            }
            config.validate()?;

            let mut rng = seeded_rng(config.seed)?;
            display::print_banner();
            println!("Press Enter to start...");
            let mut line = String::new();
            std::io::stdin()
                .read_line(&mut line)
                .context("waiting for Enter")?;

            game::play(&config, &mut rng, game::terminal_capture)?;
        }

        Commands::Rules {
            round,
            seed,
            format,
        } => {
            let mut rng = seeded_rng(seed)?;
            let reqs = rules::generate(round, &mut rng);
            println!("{}", format.serialize_requirements(round, &reqs)?);
        }

        Commands::Check {
            password,
            round,
            seed,
            format,
        } => {
            let mut rng = seeded_rng(seed)?;
            let reqs = rules::generate(round, &mut rng);
            let verdict = rules::validate(&password, &reqs);
            println!("{}", format.serialize_verdict(&verdict)?);
            if !verdict.is_valid() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Seed from the caller, or from OS entropy when none is given. The seed is
/// logged so a game can be replayed.
fn seeded_rng(seed: Option<u64>) -> Result<StdRng> {
    let seed = match seed {
        Some(seed) => seed,
        None => {
            let mut bytes = [0u8; 8];
            getrandom::getrandom(&mut bytes)
                .map_err(|err| anyhow::anyhow!("reading OS entropy: {}", err))?;
            u64::from_le_bytes(bytes)
        }
    };
    tracing::debug!(seed, "rng seeded");
    Ok(StdRng::seed_from_u64(seed))
}
