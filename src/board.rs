use std::fmt::{Display, Formatter};

use crate::mv::{InvalidMove, Move, MoveKind};

/// Identifier of a player, as announced by `settings your_botid`.
///
/// Opaque to the query layer: cells are only ever compared against an id for
/// equality, so fields with more than two players would work unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PlayerId(pub u8);

/// One cell of the field: dead, or alive and owned by a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Dead,
    Alive(PlayerId),
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    pub fn is_dead(self) -> bool {
        !self.is_alive()
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Dead => None,
            Cell::Alive(player) => Some(player),
        }
    }

    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self == Cell::Alive(player)
    }
}

/// Zero-based `(x, y)` position on the field.
///
/// `x` runs along a row, `y` selects the row. Whether a coordinate actually
/// lies on the field depends on [`Settings::in_bounds`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub fn new(x: u32, y: u32) -> Coord {
        Coord { x, y }
    }
}

/// Error for an index lookup past the end of the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub field_size: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "index {} is out of range for a field of {} cells",
            self.index, self.field_size
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Per-game constants announced once by the engine before the first turn.
///
/// The geometry queries live here: field size, the bounds check and the
/// row-major coordinate/index bijection every higher-level query relies on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Settings {
    field_width: u32,
    field_height: u32,
    your_bot_id: PlayerId,
}

impl Settings {
    pub fn new(field_width: u32, field_height: u32, your_bot_id: PlayerId) -> Settings {
        assert!(
            field_width > 0 && field_height > 0,
            "field dimensions must be positive, got {}x{}",
            field_width,
            field_height
        );
        Settings {
            field_width,
            field_height,
            your_bot_id,
        }
    }

    pub fn field_width(&self) -> u32 {
        self.field_width
    }

    pub fn field_height(&self) -> u32 {
        self.field_height
    }

    pub fn your_bot_id(&self) -> PlayerId {
        self.your_bot_id
    }

    pub fn field_size(&self) -> usize {
        self.field_width as usize * self.field_height as usize
    }

    /// Whether `coord` lies on the field: `x < field_width` and
    /// `y < field_height`, both zero-inclusive.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.field_width && coord.y < self.field_height
    }

    /// Inverse of the row-major mapping: `x = index % width`,
    /// `y = index / width`. Indices past the field report
    /// [`IndexOutOfRange`] instead of aborting anything.
    pub fn index_to_coord(&self, index: usize) -> Result<Coord, IndexOutOfRange> {
        if index >= self.field_size() {
            return Err(IndexOutOfRange {
                index,
                field_size: self.field_size(),
            });
        }

        let width = self.field_width as usize;
        Ok(Coord {
            x: (index % width) as u32,
            y: (index / width) as u32,
        })
    }

    /// Row-major index of `coord`, or `None` when it is out of bounds.
    pub fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }

        Some(coord.y as usize * self.field_width as usize + coord.x as usize)
    }

    /// All coordinates of the field in row-major order.
    pub fn all_coords(&self) -> impl Iterator<Item = Coord> {
        let settings = *self;
        (0..settings.field_size()).map(move |index| {
            // the range stays inside the valid domain
            settings.index_to_coord(index).unwrap()
        })
    }
}

/// Snapshot of the field for one turn, bundled with the settings it was
/// built under.
///
/// Boards are read-only: the engine owns the game rules, a bot only ever
/// inspects the latest snapshot and answers with a move. All queries here
/// are deterministic reads.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    settings: Settings,
    cells: Vec<Cell>,
}

impl Board {
    /// Panics if the cell count does not match the settings' field size.
    pub fn from_parts(settings: Settings, cells: Vec<Cell>) -> Board {
        assert_eq!(
            cells.len(),
            settings.field_size(),
            "cell count must match field dimensions"
        );
        Board { settings, cells }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `coord`, or `None` when it is out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let index = self.settings.coord_to_index(coord)?;
        Some(self.cells[index])
    }

    /// Number of cells that are not dead, regardless of owner.
    pub fn living_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of cells owned by exactly `player`.
    pub fn living_cell_count_for(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|cell| cell.is_owned_by(player)).count()
    }

    /// The move kinds that have at least one legal instantiation right now,
    /// in the fixed order pass, kill, birth.
    ///
    /// Pass is always playable. Kill needs a living cell anywhere on the
    /// field. Birth needs more than one own living cell, because it consumes
    /// two distinct sources. The order carries no preference; selection
    /// shuffles the kinds anyway.
    pub fn available_move_kinds(&self) -> Vec<MoveKind> {
        let mut kinds = vec![MoveKind::Pass];

        if self.living_cell_count() > 0 {
            kinds.push(MoveKind::Kill);
        }
        if self.living_cell_count_for(self.settings.your_bot_id()) > 1 {
            kinds.push(MoveKind::Birth);
        }

        kinds
    }

    /// Coordinates of all dead cells in row-major order.
    pub fn dead_cell_coords(&self) -> Vec<Coord> {
        self.coords_matching(|cell| cell.is_dead())
    }

    /// Coordinates of all living cells in row-major order.
    pub fn living_cell_coords(&self) -> Vec<Coord> {
        self.coords_matching(|cell| cell.is_alive())
    }

    /// Coordinates of the cells owned by exactly `player`, in row-major order.
    pub fn living_cell_coords_for(&self, player: PlayerId) -> Vec<Coord> {
        self.coords_matching(|cell| cell.is_owned_by(player))
    }

    fn coords_matching(&self, pred: impl Fn(Cell) -> bool) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| pred(cell))
            // an index that cannot be mapped is skipped, never fatal
            .filter_map(|(index, _)| self.settings.index_to_coord(index).ok())
            .collect()
    }

    /// Check a fully instantiated move against this board.
    ///
    /// This is the single authority on move-argument validity; anything that
    /// builds or forwards a [`Move`] goes through it.
    pub fn check_move(&self, mv: Move) -> Result<(), InvalidMove> {
        match mv {
            Move::Pass => Ok(()),
            Move::Kill { target } => {
                let cell = self.cell(target).ok_or(InvalidMove::OutOfBounds { coord: target })?;
                if cell.is_dead() {
                    return Err(InvalidMove::KillTargetDead { target });
                }
                Ok(())
            }
            Move::Birth { target, sources } => {
                let target_cell = self.cell(target).ok_or(InvalidMove::OutOfBounds { coord: target })?;
                if target_cell.is_alive() {
                    return Err(InvalidMove::BirthTargetAlive { target });
                }

                let own_id = self.settings.your_bot_id();
                for &source in sources.iter() {
                    let cell = self.cell(source).ok_or(InvalidMove::OutOfBounds { coord: source })?;
                    if !cell.is_owned_by(own_id) {
                        return Err(InvalidMove::BirthSourceNotOwn { source });
                    }
                }
                if sources[0] == sources[1] {
                    return Err(InvalidMove::BirthSourcesEqual { source: sources[0] });
                }

                Ok(())
            }
        }
    }

    /// Whether `mv` is playable on this board.
    pub fn is_available_move(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }
}
