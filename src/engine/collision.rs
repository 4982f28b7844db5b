use super::grid::Grid;
use super::snake::Snake;

/// Returns true if the snake's head has run into its own body or into a wall.
///
/// # Panics
///
/// Panics if the head has somehow left the board entirely.  Play always stops
/// on the wall ring, so this indicates a bug rather than a game event.
pub(crate) fn is_collision(snake: &Snake, grid: Grid) -> bool {
    let head = snake.head();
    assert!(
        grid.contains(head),
        "snake head {head:?} is outside of a {0}x{0} board",
        grid.size()
    );
    snake.body().any(|c| c == head) || grid.is_wall(head)
}
