//! Position model consumed by the search.
//!
//! The search never looks inside a board: it only asks for legal moves,
//! capture flags, the outcome and the material on the board, and walks the
//! tree by pushing and popping moves on a single mutable position.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

pub mod cozy;
pub mod notation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    pub fn win_for(side: Side) -> Outcome {
        match side {
            Side::White => Outcome::WhiteWins,
            Side::Black => Outcome::BlackWins,
        }
    }

    pub fn is_terminal(self) -> bool { self != Outcome::Ongoing }

    /// PGN-style result tag.
    pub fn result(self) -> &'static str {
        match self {
            Outcome::Ongoing => "*",
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

/// The narrow board contract the search runs against.
///
/// `push` and `pop` are stack-disciplined: every `pop` undoes the most recent
/// `push` still outstanding. Prefer [`MoveGuard`] over calling them directly.
pub trait Position {
    type Move: Copy + Eq + Debug;

    /// Legal moves in a stable enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn is_capture(&self, mv: Self::Move) -> bool;
    fn push(&mut self, mv: Self::Move);
    fn pop(&mut self);
    fn outcome(&self) -> Outcome;
    fn side_to_move(&self) -> Side;
    /// Every piece on the board, one entry per occupied square.
    fn pieces(&self) -> Vec<(Side, PieceKind)>;
    fn uci(&self, mv: Self::Move) -> String;
    fn san(&self, mv: Self::Move) -> String;

    fn is_terminal(&self) -> bool { self.outcome().is_terminal() }
}

/// A move applied to a position for the lifetime of the guard.
///
/// The move is pushed on construction and popped on drop, so early returns
/// and cutoffs can never leave the position out of sync.
pub struct MoveGuard<'a, P: Position> {
    pos: &'a mut P,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    pub fn new(pos: &'a mut P, mv: P::Move) -> Self {
        pos.push(mv);
        Self { pos }
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;
    fn deref(&self) -> &P { &*self.pos }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P { &mut *self.pos }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) { self.pos.pop(); }
}
