use super::direction::Direction;

/// The direction the snake will move in on the next tick.  Input overwrites
/// it; ticks only read it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct InputBuffer {
    current: Option<Direction>,
}

impl InputBuffer {
    pub(crate) fn current(self) -> Option<Direction> {
        self.current
    }

    /// Replace the current direction with `direction` unless that would turn
    /// the snake around onto itself.  Returns whether the change was
    /// accepted.
    pub(crate) fn try_set(&mut self, direction: Direction) -> bool {
        if direction.may_follow(self.current) {
            self.current = Some(direction);
            true
        } else {
            false
        }
    }

    /// Return the current direction, first setting it to the default if
    /// there is none.
    pub(crate) fn get_or_default(&mut self) -> Direction {
        *self.current.get_or_insert_with(Direction::default)
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}

/// A drag/swipe gesture, measured from where it started to where it ended
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Swipe {
    pub(crate) dx: f64,
    pub(crate) dy: f64,
}

impl Swipe {
    /// Interpret the gesture as a direction.  The axis with the larger
    /// movement wins, vertical on a tie, and the movement along it must
    /// exceed `threshold` for the swipe to count.
    pub(crate) fn direction(self, threshold: f64) -> Option<Direction> {
        if self.dx.abs() > self.dy.abs() {
            if self.dx > threshold {
                Some(Direction::Right)
            } else if self.dx < -threshold {
                Some(Direction::Left)
            } else {
                None
            }
        } else if self.dy > threshold {
            Some(Direction::Down)
        } else if self.dy < -threshold {
            Some(Direction::Up)
        } else {
            None
        }
    }
}
