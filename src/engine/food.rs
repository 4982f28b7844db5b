use super::grid::{Cell, Grid};
use rand::Rng;

/// Pick a new cell for the food, uniformly at random within the grid's
/// [food range](Grid::food_range).
///
/// The snake's position is not consulted, so the food may land on the snake.
pub(crate) fn spawn<R: Rng>(rng: &mut R, grid: Grid) -> Cell {
    let x = rng.random_range(grid.food_range());
    let y = rng.random_range(grid.food_range());
    Cell::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::HashSet;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn spawns_within_margin() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::default();
        for _ in 0..10_000 {
            let food = spawn(&mut rng, grid);
            assert!((2..=16).contains(&food.x), "bad x in {food:?}");
            assert!((2..=16).contains(&food.y), "bad y in {food:?}");
        }
    }

    #[test]
    fn reaches_every_column_and_row() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::default();
        let mut xs = HashSet::new();
        let mut ys = HashSet::new();
        for _ in 0..10_000 {
            let food = spawn(&mut rng, grid);
            xs.insert(food.x);
            ys.insert(food.y);
        }
        assert_eq!(xs, HashSet::from_iter(2..=16));
        assert_eq!(ys, HashSet::from_iter(2..=16));
    }

    #[test]
    fn small_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(10);
        for _ in 0..1000 {
            let food = spawn(&mut rng, grid);
            assert!((2..=7).contains(&food.x), "bad x in {food:?}");
            assert!((2..=7).contains(&food.y), "bad y in {food:?}");
        }
    }
}
