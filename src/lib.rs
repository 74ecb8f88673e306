#![warn(missing_debug_implementations)]

//! A bot for the Riddles.io [Game of Life and Death](https://docs.riddles.io/game-of-life-and-death/rules),
//! a two player game played on a rectangular grid of cells that evolves by Game of Life rules.
//!
//! The crate is split into three layers:
//! * The [Board](crate::board::Board), which holds the game [Settings](crate::board::Settings)
//!     and the cells, and answers the queries a strategy needs:
//!     cell counts, coordinate lists and the [available move kinds](crate::board::Board::available_move_kinds).
//!     [check_move](crate::board::Board::check_move) decides whether a [Move](crate::mv::Move) is valid.
//! * Move selection behind the [Strategy](crate::strategy::Strategy) trait, currently only the
//!     uniformly random [RandomStrategy](crate::strategy::RandomStrategy).
//! * The engine protocol: incoming lines are parsed by
//!     [Command](crate::interface::riddles::command::Command) and the stdin/stdout loop lives in
//!     [client](crate::interface::riddles::client). The `random_bot` binary wires all of this together.
//!
//! # Examples
//!
//! ## Parse a field and play a random move
//!
//! ```
//! use golad_bot::board::{Board, PlayerId, Settings};
//! use golad_bot::strategy::{RandomStrategy, Strategy};
//! use golad_bot::util::consistent_rng;
//!
//! let settings = Settings::new(3, 1, PlayerId(0));
//! let board = Board::from_field_str(settings, "0,0,.").unwrap();
//! println!("{}", board);
//!
//! let mut strategy = RandomStrategy::new(consistent_rng());
//! let mv = strategy.select_move(&board);
//! println!("playing {}", mv);
//! assert!(board.is_available_move(mv));
//! ```
//!
//! ## Inspect a board
//!
//! ```
//! use golad_bot::board::{Board, Coord, PlayerId, Settings};
//!
//! let settings = Settings::new(2, 2, PlayerId(1));
//! let board = Board::from_field_str(settings, "0,.,1,1").unwrap();
//!
//! assert_eq!(3, board.living_cell_count());
//! assert_eq!(2, board.living_cell_count_for(PlayerId(1)));
//! assert_eq!(vec![Coord::new(1, 0)], board.dead_cell_coords());
//! ```

pub mod board;
pub mod io;
pub mod mv;

pub mod strategy;

pub mod util;

pub mod interface;
