use super::direction::Direction;
use super::grid::Cell;
use std::collections::VecDeque;

/// The cells occupied by the snake, head first.  Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    cells: VecDeque<Cell>,
}

impl Snake {
    /// Create a one-cell snake at `head`
    pub(crate) fn new(head: Cell) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells.front().copied().unwrap_or_else(|| {
            unreachable!("Snake should never be empty");
        })
    }

    /// Every cell but the head, from the neck to the tail
    pub(crate) fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(1).copied()
    }

    /// Every cell, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Move one step: each segment takes the place of the one before it and
    /// the head moves in `direction`.  The old tail cell is vacated.
    pub(crate) fn advance(&mut self, direction: Option<Direction>) {
        self.grow_and_advance(direction);
        let _ = self.cells.pop_back();
    }

    /// Move the head one step in `direction` without vacating the tail, so
    /// the snake becomes one cell longer.
    pub(crate) fn grow_and_advance(&mut self, direction: Option<Direction>) {
        let head = self.head().step(direction);
        self.cells.push_front(head);
    }
}

impl FromIterator<Cell> for Snake {
    /// Build a snake from its cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is empty.
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Snake {
        let cells = VecDeque::from_iter(iter);
        assert!(!cells.is_empty(), "Snake should have at least one cell");
        Snake { cells }
    }
}
