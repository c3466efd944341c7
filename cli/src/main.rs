use anyhow::{Context, Result};
use arcade_core::{Arcade, ArcadeConfig, GameKind, Reply, from_blob, to_blob};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with per-game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load the session from this file if it exists and save it on exit
    #[arg(long)]
    state: Option<PathBuf>,

    /// Game to play: mastermind, minesweeper, "crazy eights" or blackjack
    #[arg(value_parser = parse_game, default_value = "minesweeper")]
    game: GameKind,
}

fn parse_game(name: &str) -> Result<GameKind, String> {
    name.parse()
        .map_err(|()| arcade_core::INVALID_GAME.to_owned())
}

fn level_filter(filter: log::LevelFilter) -> LevelFilter {
    match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn load_config(args: &Args) -> Result<ArcadeConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ArcadeConfig::from_toml(&source)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ArcadeConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn load_session(config: ArcadeConfig, state: Option<&Path>) -> Result<(Arcade, bool)> {
    if let Some(path) = state.filter(|path| path.exists()) {
        let blob = std::fs::read_to_string(path)
            .with_context(|| format!("reading state {}", path.display()))?;
        let arcade = from_blob(&blob)
            .with_context(|| format!("decoding state {}", path.display()))?;
        log::info!("restored session from {}", path.display());
        return Ok((arcade, true));
    }
    Ok((Arcade::new(config)?, false))
}

fn save_session(arcade: &Arcade, path: &Path) -> Result<()> {
    let blob = to_blob(arcade).context("encoding session")?;
    std::fs::write(path, blob).with_context(|| format!("writing state {}", path.display()))?;
    log::info!("saved session to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level_filter(args.verbose.log_level_filter()))
        .init();

    let config = load_config(&args)?;
    log::debug!("seed: {:?}", config.seed);
    let (mut arcade, restored) = load_session(config, args.state.as_deref())?;

    let game = args.game;
    if restored {
        println!("{}: {}", game, arcade.state_label(game));
    } else {
        println!("{}", arcade.play(game, "new game")?.text());
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        if !line.trim().is_empty() {
            match arcade.play(game, &line) {
                Ok(Reply::Quit) => break,
                Ok(reply) => println!("{}", reply.text()),
                Err(err) => {
                    log::warn!("{game}: {err}");
                    println!("{err}");
                }
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    if let Some(path) = &args.state {
        save_session(&arcade, path)?;
    }
    Ok(())
}
