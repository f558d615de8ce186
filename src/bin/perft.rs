use anyhow::Result;
use clap::Parser;
use minibot::board::cozy::ChessPosition;
use minibot::board::{MoveGuard, Position};
use minibot::perft::perft;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for MiniBot's position adapter")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" { ChessPosition::startpos() } else { ChessPosition::from_fen(&args.fen)? };

    let t0 = Instant::now();
    let nodes = if args.divide && args.depth > 0 {
        let mut total = 0u64;
        for mv in pos.legal_moves() {
            let label = pos.uci(mv);
            let mut child = MoveGuard::new(&mut pos, mv);
            let n = perft(&mut *child, args.depth - 1);
            println!("{label}: {n}");
            total += n;
        }
        total
    } else {
        perft(&mut pos, args.depth)
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
