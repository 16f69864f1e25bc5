//! Territory War - console territory-conquest game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use territory_war::{
    run_session, write_summary, GameConfig, GameMode, GameRng, Prompter, SessionError,
    SessionOptions, SummaryFormat,
};

/// Territory War - register territories, roll dice, conquer the map
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game to play
    #[arg(short, long, default_value = "campaign")]
    mode: ModeArg,

    /// Random seed (default: from the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// A mission is accomplished when any territory holds more troops than this
    #[arg(long, default_value_t = territory_war::core::DEFAULT_VICTORY_TROOPS)]
    victory_troops: u32,

    /// End-of-game summary format: text or json
    #[arg(short, long, default_value = "text")]
    format: FormatArg,

    /// Log filter used when RUST_LOG is unset (e.g. info, debug)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Register five territories and list them.
    Register,
    /// Attack loop without missions.
    Skirmish,
    /// Attack loop with secret missions.
    Campaign,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Register => GameMode::Register,
            ModeArg::Skirmish => GameMode::Skirmish,
            ModeArg::Campaign => GameMode::Campaign,
        }
    }
}

/// Summary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One human-readable line.
    Text,
    /// Machine-readable JSON report.
    Json,
}

impl From<FormatArg> for SummaryFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => SummaryFormat::Text,
            FormatArg::Json => SummaryFormat::Json,
        }
    }
}

fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn execute(args: Args) -> Result<(), SessionError> {
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_time(),
    };
    let seed = rng.seed();

    let options = SessionOptions {
        mode: args.mode.into(),
        config: GameConfig::new().with_victory_troops(args.victory_troops),
        ..SessionOptions::default()
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let report = run_session(&options, rng, seed, &mut prompter)?;

    let (_, mut stdout) = prompter.into_parts();
    write_summary(&mut stdout, &report, args.format.into())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
