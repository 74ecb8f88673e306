use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::board::{Board, Cell, Coord, PlayerId, Settings};
use crate::mv::Move;

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Cell {
    pub fn to_marker(self) -> String {
        match self {
            Cell::Dead => ".".to_string(),
            Cell::Alive(player) => player.to_string(),
        }
    }

    pub fn from_marker(s: &str) -> Option<Cell> {
        if s == "." {
            return Some(Cell::Dead);
        }
        s.parse::<u8>().ok().map(|id| Cell::Alive(PlayerId(id)))
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Coordinates print exactly as the engine expects them inside a move
/// command: `x,y`, no padding, no spaces.
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

fn parse_coord(s: &str) -> Option<Coord> {
    let mut parts = s.split(',');
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord { x, y })
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidMoveCommand(pub String);

impl Display for InvalidMoveCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid move command '{}'", self.0)
    }
}

impl std::error::Error for InvalidMoveCommand {}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_command())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_command())
    }
}

impl Move {
    /// The exact command text the engine parses: `pass`, `kill x,y` or
    /// `birth tx,ty sx1,sy1 sx2,sy2`.
    pub fn to_command(self) -> String {
        match self {
            Move::Pass => "pass".to_string(),
            Move::Kill { target } => format!("kill {}", target),
            Move::Birth { target, sources } => {
                format!("birth {} {} {}", target, sources[0], sources[1])
            }
        }
    }

    pub fn from_command(s: &str) -> Result<Move, InvalidMoveCommand> {
        let err = || InvalidMoveCommand(s.to_owned());
        let parts = s.split(' ').collect_vec();

        match &*parts {
            ["pass"] => Ok(Move::Pass),
            ["kill", target] => {
                let target = parse_coord(target).ok_or_else(err)?;
                Ok(Move::Kill { target })
            }
            ["birth", target, source1, source2] => {
                let target = parse_coord(target).ok_or_else(err)?;
                let source1 = parse_coord(source1).ok_or_else(err)?;
                let source2 = parse_coord(source2).ok_or_else(err)?;
                Ok(Move::Birth {
                    target,
                    sources: [source1, source2],
                })
            }
            _ => Err(err()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvalidFieldString {
    pub field: String,
    pub reason: &'static str,
}

impl Display for InvalidFieldString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid field string '{}': {}", self.field, self.reason)
    }
}

impl std::error::Error for InvalidFieldString {}

impl Board {
    /// Parse the payload of an `update game field` line: one marker per
    /// cell, comma-separated, row-major.
    pub fn from_field_str(settings: Settings, field: &str) -> Result<Board, InvalidFieldString> {
        let err = |reason| InvalidFieldString {
            field: field.into(),
            reason,
        };

        let markers = field.split(',').collect_vec();
        if markers.len() != settings.field_size() {
            return Err(err("cell count does not match the field dimensions"));
        }

        let mut cells = Vec::with_capacity(markers.len());
        for marker in markers {
            match Cell::from_marker(marker) {
                Some(cell) => cells.push(cell),
                None => return Err(err("unrecognized cell marker")),
            }
        }

        Ok(Board::from_parts(settings, cells))
    }

    pub fn to_field_str(&self) -> String {
        self.cells().iter().map(|cell| cell.to_marker()).join(",")
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(\"{}\")", self.to_field_str())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let settings = self.settings();
        for y in 0..settings.field_height() {
            for x in 0..settings.field_width() {
                match self.cell(Coord::new(x, y)) {
                    Some(Cell::Dead) => write!(f, ".")?,
                    Some(Cell::Alive(player)) => write!(f, "{}", player)?,
                    None => unreachable!("loop stays inside the field"),
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
