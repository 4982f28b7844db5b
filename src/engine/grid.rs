use super::direction::Direction;
use crate::consts;
use std::ops::RangeInclusive;

/// A position on the board.  `(0, 0)` is the top-left corner of the wall
/// ring.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one step away from `self` in `direction`, or `self`
    /// itself if there is no direction.
    pub(crate) fn step(self, direction: Option<Direction>) -> Cell {
        let (dx, dy) = direction.map_or((0, 0), Direction::delta);
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The square board: a ring of walls around a playable interior
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Width & height of the board, walls included
    size: i32,
}

impl Grid {
    /// Create a grid `size` cells on a side.  `size` is expected to have
    /// been validated against [`consts::BOARD_SIZES`].
    pub(crate) fn new(size: u16) -> Grid {
        Grid {
            size: i32::from(size),
        }
    }

    pub(crate) fn size(self) -> i32 {
        self.size
    }

    /// Returns true iff `cell` lies on or beyond the wall ring
    pub(crate) fn is_wall(self, cell: Cell) -> bool {
        cell.x <= 0 || cell.x >= self.size - 1 || cell.y <= 0 || cell.y >= self.size - 1
    }

    /// Returns true iff `cell` lies on the board, walls included
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// The range of coordinates, on both axes, in which new food may be
    /// placed.  This keeps [`consts::FOOD_MARGIN`] cells between the food
    /// and each wall.
    pub(crate) fn food_range(self) -> RangeInclusive<i32> {
        consts::FOOD_MARGIN..=(self.size - 1 - consts::FOOD_MARGIN)
    }

    /// The cell that a new snake starts on: the middle of the board
    pub(crate) fn start(self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(consts::DEFAULT_BOARD_SIZE)
    }
}
