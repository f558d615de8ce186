use anyhow::Result;
use clap::Parser;
use minibot::board::cozy::ChessPosition;
use minibot::board::Position;
use minibot::config::{EngineConfig, Strategy};
use minibot::search::SearchStats;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "minibot-analyse", about = "Pick a move for one position and report the search")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// UCI moves to play from the FEN before searching
    #[arg(long, num_args = 0..)]
    moves: Vec<String>,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    #[arg(long)]
    depth: Option<u32>,

    #[arg(long)]
    quiescence_depth: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    fen: String,
    strategy: Strategy,
    bestmove: String,
    san: String,
    score: Option<i32>,
    stats: SearchStats,
    elapsed_ms: u128,
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

    let mut pos = if args.fen == "startpos" {
        ChessPosition::set_from_start_and_moves(&args.moves)?
    } else {
        ChessPosition::from_fen_and_moves(&args.fen, &args.moves)?
    };

    let mut engine = config.build_engine::<ChessPosition>();
    let t0 = Instant::now();
    let decision = engine.decide(&mut pos)?;
    let report = Report {
        fen: pos.fen(),
        strategy: config.strategy,
        bestmove: pos.uci(decision.best),
        san: pos.san(decision.best),
        score: decision.score,
        stats: decision.stats,
        elapsed_ms: t0.elapsed().as_millis(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("position: {}", report.fen);
        println!("bestmove: {} ({})", report.bestmove, report.san);
        if let Some(score) = report.score { println!("score: {score}"); }
        println!(
            "nodes: {} qnodes: {} evals: {} cutoffs: {} elapsed: {}ms",
            report.stats.nodes, report.stats.quiescence_nodes, report.stats.evaluations, report.stats.cutoffs, report.elapsed_ms
        );
    }
    Ok(())
}
