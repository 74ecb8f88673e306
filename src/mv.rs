use std::fmt::{Display, Formatter};

use crate::board::Coord;

/// The three categories of turn action.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveKind {
    Pass,
    Kill,
    Birth,
}

/// A fully instantiated move, carrying exactly the arguments its kind needs.
///
/// Feasibility on a concrete board is checked in one place,
/// [`Board::check_move`](crate::board::Board::check_move).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    Pass,
    Kill { target: Coord },
    Birth { target: Coord, sources: [Coord; 2] },
}

impl Move {
    pub fn kind(self) -> MoveKind {
        match self {
            Move::Pass => MoveKind::Pass,
            Move::Kill { .. } => MoveKind::Kill,
            Move::Birth { .. } => MoveKind::Birth,
        }
    }
}

/// Why a move is not playable on a given board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvalidMove {
    OutOfBounds { coord: Coord },
    KillTargetDead { target: Coord },
    BirthTargetAlive { target: Coord },
    BirthSourceNotOwn { source: Coord },
    BirthSourcesEqual { source: Coord },
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfBounds { coord } => {
                write!(f, "coordinate {} is outside the field", coord)
            }
            InvalidMove::KillTargetDead { target } => {
                write!(f, "kill target {} is not a living cell", target)
            }
            InvalidMove::BirthTargetAlive { target } => {
                write!(f, "birth target {} is not a dead cell", target)
            }
            InvalidMove::BirthSourceNotOwn { source } => {
                write!(f, "birth source {} is not an own living cell", source)
            }
            InvalidMove::BirthSourcesEqual { source } => {
                write!(f, "birth sources must be distinct, got {} twice", source)
            }
        }
    }
}

impl std::error::Error for InvalidMove {}
