use super::grid::Cell;
use crate::difficulty::Difficulty;

/// Something that happened inside the engine that the outside world may want
/// to react to
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum EngineEvent {
    /// Play started or resumed
    Started,

    Paused,

    FoodEaten { score: u32 },

    /// The score for `difficulty` beat the stored high score
    NewHighScore { difficulty: Difficulty, score: u32 },

    /// The snake collided with something.  `score` is the score the game
    /// ended with; the engine has already been reset when this is seen.
    GameOver { difficulty: Difficulty, score: u32 },

    /// A different difficulty was selected and the game was reset
    DifficultyChanged(Difficulty),

    /// The score display should be updated
    Scoreboard(Scoreboard),

    /// The board should be redrawn
    Render(Snapshot),
}

/// The state of the board after a tick
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// The snake's cells, head first
    pub(crate) snake: Vec<Cell>,
    pub(crate) food: Cell,
    pub(crate) score: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Scoreboard {
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) difficulty: Difficulty,
}
