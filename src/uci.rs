use std::io::{self, BufRead, Write};

use crate::board::cozy::ChessPosition;
use crate::board::{Position, Side};
use crate::config::EngineConfig;
use crate::engine::Engine;

pub struct UciEngine {
    pos: ChessPosition,
    engine: Box<dyn Engine<ChessPosition>>,
}

impl UciEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_engine(config.build_engine())
    }

    pub fn with_engine(engine: Box<dyn Engine<ChessPosition>>) -> Self {
        Self { pos: ChessPosition::startpos(), engine }
    }

    pub fn position(&self) -> &ChessPosition { &self.pos }

    fn cmd_uci(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name MiniBot ({})", self.engine.name())?;
        writeln!(out, "id author MiniBot Team")?;
        writeln!(out, "uciok")
    }

    fn cmd_position(&mut self, args: &str) {
        // Supports: 'position startpos [moves ...]' and 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace();
        let fen = match tokens.next() {
            Some("startpos") => None,
            Some("fen") => {
                // FEN is 6 fields; collect them
                let fen_fields: Vec<&str> = tokens.by_ref().take(6).collect();
                if fen_fields.len() != 6 {
                    log::warn!("ignoring truncated FEN: {}", fen_fields.join(" "));
                    return;
                }
                Some(fen_fields.join(" "))
            }
            other => {
                log::warn!("ignoring position command with {:?}", other);
                return;
            }
        };
        let moves: Vec<String> = match tokens.next() {
            Some("moves") => tokens.map(|s| s.to_string()).collect(),
            _ => Vec::new(),
        };
        let built = match fen {
            Some(f) => ChessPosition::from_fen_and_moves(&f, &moves),
            None => ChessPosition::set_from_start_and_moves(&moves),
        };
        match built {
            Ok(p) => self.pos = p,
            Err(e) => log::warn!("keeping previous position: {e}"),
        }
    }

    fn cmd_go(&mut self, out: &mut impl Write) -> io::Result<()> {
        // Time controls are accepted but not used: depth is fixed by config.
        match self.engine.decide(&mut self.pos) {
            Ok(d) => {
                if let Some(score) = d.score {
                    // UCI scores are from the mover's point of view.
                    let mover = match self.pos.side_to_move() {
                        Side::White => score,
                        Side::Black => -score,
                    };
                    writeln!(out, "info score cp {} nodes {}", mover * 100, d.stats.total_nodes())?;
                }
                writeln!(out, "bestmove {}", self.pos.uci(d.best))
            }
            Err(e) => {
                log::warn!("search refused: {e}");
                writeln!(out, "bestmove 0000")
            }
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = match line { Ok(s) => s.trim().to_string(), Err(_) => break };
            if line.is_empty() { continue; }
            if line == "uci" { self.cmd_uci(out)?; }
            else if line == "isready" { writeln!(out, "readyok")?; }
            else if line == "ucinewgame" { self.pos = ChessPosition::startpos(); }
            else if line == "quit" { break; }
            else if let Some(rest) = line.strip_prefix("position ") { self.cmd_position(rest); }
            else if line == "go" || line.starts_with("go ") { self.cmd_go(out)?; }
            out.flush()?;
        }
        Ok(())
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(stdin.lock(), &mut out)
    }
}
