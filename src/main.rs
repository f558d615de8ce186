use anyhow::Result;
use clap::Parser;
use minibot::config::{EngineConfig, Strategy};
use minibot::uci::UciEngine;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "MiniBot UCI engine", long_about = None)]
struct Args {
    /// JSON engine config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Move selection strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Full-width search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Capture-only extension depth below the search horizon
    #[arg(long)]
    quiescence_depth: Option<u32>,

    /// Seed for tie-break and random-move RNG
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(s) = args.strategy { config.strategy = s; }
    if let Some(d) = args.depth { config.depth = d; }
    if let Some(q) = args.quiescence_depth { config.quiescence_depth = q; }
    if args.seed.is_some() { config.seed = args.seed; }
    log::info!("starting with {:?}", config);

    let mut engine = UciEngine::new(&config);
    engine.run_loop()?;
    Ok(())
}
