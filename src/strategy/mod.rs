use std::fmt::Debug;

use crate::board::Board;
use crate::mv::Move;

pub use self::random::RandomStrategy;

mod random;

/// A strategy picks the move to play on a given board. `Debug` is required
/// so the client can log which strategy it is running.
pub trait Strategy: Debug {
    fn select_move(&mut self, board: &Board) -> Move;
}
