use anyhow::Result;
use clap::Parser;
use fretwise::config::AppConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fretwise",
    version,
    about = "Fretboard theory explorer and practice drills"
)]
struct Cli {
    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the stats file
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load config file (optional, defaults if missing)
    let config = AppConfig::load(cli.config.as_deref());

    // Resolve stats path: CLI > config > data dir
    let stats_path = config.resolve_stats_path(cli.stats);

    fretwise::repl::start(config, stats_path)
}
