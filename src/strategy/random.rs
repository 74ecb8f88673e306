use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::mv::{Move, MoveKind};
use crate::strategy::Strategy;

/// Plays a uniformly random move: first picks one of the currently
/// available move kinds, then fills in the arguments for that kind by
/// drawing the coordinates it needs, all uniformly at random.
///
/// Each instance owns its generator, so a fixed seed gives a fixed move
/// sequence. Concurrent use needs one instance per thread.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn select_move(&mut self, board: &Board) -> Move {
        let mut kinds = board.available_move_kinds();
        kinds.shuffle(&mut self.rng);

        // `kinds` always contains at least the pass move
        match kinds[0] {
            MoveKind::Pass => Move::Pass,
            MoveKind::Kill => {
                // kill is only offered when a living cell exists
                let target = *board.living_cell_coords().choose(&mut self.rng).unwrap();
                Move::Kill { target }
            }
            MoveKind::Birth => {
                let dead = board.dead_cell_coords();
                let target = match dead.choose(&mut self.rng) {
                    Some(&target) => target,
                    // a full board offers no birth target even with two own cells
                    None => return Move::Pass,
                };

                // birth is only offered with more than one own living cell
                let mut own = board.living_cell_coords_for(board.settings().your_bot_id());
                own.shuffle(&mut self.rng);

                Move::Birth {
                    target,
                    sources: [own[0], own[1]],
                }
            }
        }
    }
}

impl<R: Rng> Debug for RandomStrategy<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomStrategy")
    }
}
