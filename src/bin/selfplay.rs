use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use minibot::board::cozy::ChessPosition;
use minibot::config::{EngineConfig, Strategy};
use minibot::selfplay::play_match;

#[derive(Parser, Debug)]
#[command(name = "minibot-selfplay", about = "Play a match between two move-selection strategies")]
struct Args {
    #[arg(long, value_enum, default_value = "alpha-beta")]
    first: Strategy,
    #[arg(long, value_enum, default_value = "random")]
    second: Strategy,
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 3)]
    depth: u32,
    #[arg(long, default_value_t = 3)]
    quiescence_depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Print every game's moves
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    let make = |strategy: Strategy, seed: u64| EngineConfig {
        strategy,
        depth: a.depth,
        quiescence_depth: a.quiescence_depth,
        seed: Some(seed),
    };
    let mut first = make(a.first, a.seed).build_engine::<ChessPosition>();
    let mut second = make(a.second, a.seed.wrapping_add(1)).build_engine::<ChessPosition>();

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")?
    );
    let summary = play_match(first.as_mut(), second.as_mut(), a.games, a.max_plies, |gi, record| {
        pb.inc(1);
        pb.set_message(format!("last: {}", record.outcome.result()));
        if a.verbose {
            pb.println(format!("game {}: {} {}", gi + 1, record.moves.join(" "), record.outcome.result()));
        }
        log::info!("game {} finished after {} plies: {:?}", gi + 1, record.moves.len(), record.outcome);
    })?;
    pb.finish_and_clear();

    println!(
        "{:?} vs {:?}: +{} -{} ={} unfinished {} (score {:.3})",
        a.first, a.second, summary.wins, summary.losses, summary.draws, summary.unfinished, summary.score()
    );
    Ok(())
}
