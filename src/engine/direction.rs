#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    /// The direction taken when play starts without any prior input
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit `(dx, dy)` step for the direction.  `y` grows downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns whether a snake currently moving in `current` may turn to
    /// `self`.  Only an about-face is refused.
    pub(crate) fn may_follow(self, current: Option<Direction>) -> bool {
        current.is_none_or(|c| c.reverse() != self)
    }
}
