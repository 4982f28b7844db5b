//! The game simulation proper: snake movement, eating, collisions, and
//! scoring, advanced one tick at a time.  Nothing in here draws or stores
//! anything; instead, the engine queues up [`EngineEvent`]s for the caller to
//! act on.
mod clock;
mod collision;
mod direction;
mod event;
mod food;
mod grid;
mod input;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::event::{EngineEvent, Scoreboard, Snapshot};
pub(crate) use self::grid::{Cell, Grid};
pub(crate) use self::input::Swipe;
use self::clock::TickClock;
use self::collision::is_collision;
use self::input::InputBuffer;
use self::snake::Snake;
use crate::config::Speeds;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::highscores::HighScores;
use rand::Rng;
use std::time::Duration;

/// Fixed parameters of the engine, taken from the configuration
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid: Grid,
    pub(crate) speeds: Speeds,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    speeds: Speeds,
    clock: TickClock,
    snake: Snake,
    food: Cell,
    input: InputBuffer,
    score: u32,
    difficulty: Difficulty,
    status: Status,
    high_scores: HighScores,
    events: Vec<EngineEvent>,
}

impl Engine<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings, difficulty: Difficulty, high_scores: HighScores) -> Self {
        Engine::new_with_rng(settings, difficulty, high_scores, rand::rng())
    }
}

impl<R: Rng> Engine<R> {
    pub(crate) fn new_with_rng(
        settings: Settings,
        difficulty: Difficulty,
        high_scores: HighScores,
        rng: R,
    ) -> Engine<R> {
        let Settings { grid, speeds } = settings;
        Engine {
            rng,
            grid,
            speeds,
            clock: TickClock::new(speeds.rate(difficulty)),
            snake: Snake::new(grid.start()),
            food: consts::INITIAL_FOOD,
            input: InputBuffer::default(),
            score: 0,
            difficulty,
            status: Status::Idle,
            high_scores,
            events: Vec::new(),
        }
    }

    /// Report that a frame has arrived `elapsed` after the previous one.  If
    /// the game is running and enough time has built up, one tick is run.
    /// Returns whether a tick ran.
    pub(crate) fn frame(&mut self, elapsed: Duration) -> bool {
        if !self.running() {
            return false;
        }
        if self.clock.frame(elapsed) {
            self.tick();
            true
        } else {
            false
        }
    }

    /// Run a single step of the simulation.  Does nothing if the game is not
    /// running.
    pub(crate) fn tick(&mut self) {
        if !self.running() {
            return;
        }
        if is_collision(&self.snake, self.grid) {
            log::info!(
                "Game over on {} difficulty with a score of {}",
                self.difficulty,
                self.score
            );
            self.events.push(EngineEvent::GameOver {
                difficulty: self.difficulty,
                score: self.score,
            });
            self.reset();
            self.emit_scoreboard();
            self.emit_render();
            return;
        }
        let direction = self.input.current();
        if self.snake.head() == self.food {
            self.score = self.score.saturating_add(1);
            if self.high_scores.record(self.difficulty, self.score) {
                self.events.push(EngineEvent::NewHighScore {
                    difficulty: self.difficulty,
                    score: self.score,
                });
            }
            self.snake.grow_and_advance(direction);
            self.food = food::spawn(&mut self.rng, self.grid);
            log::debug!(
                "Ate food; score is now {}, length is {}, next food at {:?}",
                self.score,
                self.snake.len(),
                self.food
            );
            self.events.push(EngineEvent::FoodEaten { score: self.score });
            self.emit_scoreboard();
        } else {
            self.snake.advance(direction);
        }
        self.emit_render();
    }
}

impl<R> Engine<R> {
    /// Start or unpause the game if it is not running; pause it if it is.
    pub(crate) fn toggle(&mut self) {
        match self.status {
            Status::Running => self.pause(),
            Status::Idle | Status::Paused => {
                let direction = self.input.get_or_default();
                log::info!("Starting game on {} difficulty heading {direction:?}", self.difficulty);
                self.status = Status::Running;
                self.clock.arm();
                self.events.push(EngineEvent::Started);
            }
        }
    }

    /// Pause the game if it is running
    pub(crate) fn pause(&mut self) {
        if self.running() {
            log::info!("Pausing game");
            self.status = Status::Paused;
            self.events.push(EngineEvent::Paused);
        }
    }

    /// Switch to a different difficulty.  Any game in progress is abandoned.
    /// Selecting the current difficulty again does nothing.
    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty {
            return;
        }
        log::info!("Changing difficulty from {} to {difficulty}", self.difficulty);
        self.difficulty = difficulty;
        self.clock = TickClock::new(self.speeds.rate(difficulty));
        log::debug!("Tick interval is now {:?}", self.clock.interval());
        self.reset();
        self.events.push(EngineEvent::DifficultyChanged(difficulty));
        self.emit_scoreboard();
        self.emit_render();
    }

    /// Ask the snake to turn.  Returns `true` if the direction was accepted;
    /// turns are ignored while the game is not running, and turning straight
    /// back is never accepted.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        self.running() && self.input.try_set(direction)
    }

    /// Remove & return all events emitted since the last call
    pub(crate) fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// How long until the next tick is due, or `None` if the game is not
    /// running
    pub(crate) fn until_tick(&self) -> Option<Duration> {
        self.running().then(|| self.clock.until_tick())
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn high_scores(&self) -> HighScores {
        self.high_scores
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
        }
    }

    pub(crate) fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            score: self.score,
            high_score: self.high_scores.get(self.difficulty),
            difficulty: self.difficulty,
        }
    }

    fn running(&self) -> bool {
        self.status == Status::Running
    }

    /// Return to the idle state with a new snake and no score.  The food and
    /// the high scores stay as they are.
    fn reset(&mut self) {
        self.snake = Snake::new(self.grid.start());
        self.input.clear();
        self.score = 0;
        self.status = Status::Idle;
    }

    fn emit_scoreboard(&mut self) {
        self.events.push(EngineEvent::Scoreboard(self.scoreboard()));
    }

    fn emit_render(&mut self) {
        self.events.push(EngineEvent::Render(self.snapshot()));
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    /// No game in progress
    Idle,
    Running,
    Paused,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_engine(difficulty: Difficulty, high_scores: HighScores) -> Engine<ChaCha12Rng> {
        Engine::new_with_rng(
            Settings::default(),
            difficulty,
            high_scores,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    /// Put the food under the snake's head and tick
    fn feed(engine: &mut Engine<ChaCha12Rng>) {
        engine.food = engine.snake.head();
        engine.tick();
    }

    fn scores(easy: u32, medium: u32, hard: u32) -> HighScores {
        let mut hs = HighScores::default();
        hs.record(Difficulty::Easy, easy);
        hs.record(Difficulty::Medium, medium);
        hs.record(Difficulty::Hard, hard);
        hs
    }

    #[test]
    fn new_engine_is_idle() {
        let engine = new_engine(Difficulty::Medium, HighScores::default());
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(
            engine.snapshot(),
            Snapshot {
                snake: vec![Cell::new(9, 9)],
                food: Cell::new(6, 7),
                score: 0,
            }
        );
        assert_eq!(engine.input.current(), None);
        assert_eq!(engine.until_tick(), None);
    }

    #[test]
    fn start_defaults_to_down() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.input.current(), Some(Direction::Down));
        assert_eq!(engine.take_events(), [EngineEvent::Started]);
        assert_eq!(engine.until_tick(), Some(Duration::ZERO));
        assert!(engine.frame(Duration::ZERO));
        assert_eq!(engine.snake.head(), Cell::new(9, 10));
    }

    #[test]
    fn steering_ignored_while_idle() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        assert!(!engine.steer(Direction::Left));
        assert_eq!(engine.input.current(), None);
        engine.toggle();
        assert_eq!(engine.input.current(), Some(Direction::Down));
    }

    #[test]
    fn steering_while_running() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        assert!(!engine.steer(Direction::Up));
        assert!(engine.steer(Direction::Left));
        engine.tick();
        assert_eq!(engine.snake.head(), Cell::new(8, 9));
        assert!(engine.steer(Direction::Up));
        engine.tick();
        assert_eq!(engine.snake.head(), Cell::new(8, 8));
    }

    #[test]
    fn plain_tick_moves_without_growing() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        let _ = engine.take_events();
        engine.tick();
        assert_eq!(
            engine.take_events(),
            [EngineEvent::Render(Snapshot {
                snake: vec![Cell::new(9, 10)],
                food: Cell::new(6, 7),
                score: 0,
            })]
        );
    }

    #[test]
    fn eating_grows_instead_of_shifting() {
        let mut engine = new_engine(Difficulty::Easy, HighScores::default());
        engine.toggle();
        let _ = engine.take_events();
        feed(&mut engine);
        assert_eq!(engine.snake.cells().collect::<Vec<_>>(), [Cell::new(9, 10), Cell::new(9, 9)]);
        let events = engine.take_events();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[..3],
            [
                EngineEvent::NewHighScore {
                    difficulty: Difficulty::Easy,
                    score: 1
                },
                EngineEvent::FoodEaten { score: 1 },
                EngineEvent::Scoreboard(Scoreboard {
                    score: 1,
                    high_score: 1,
                    difficulty: Difficulty::Easy
                }),
            ]
        );
        let Some(EngineEvent::Render(snapshot)) = events.get(3) else {
            panic!("Expected a Render event, got {events:?}");
        };
        assert_eq!(snapshot.snake, [Cell::new(9, 10), Cell::new(9, 9)]);
        assert_eq!(snapshot.score, 1);
        assert!(engine.grid.food_range().contains(&snapshot.food.x));
        assert!(engine.grid.food_range().contains(&snapshot.food.y));
    }

    #[test]
    fn eating_below_high_score() {
        let mut engine = new_engine(Difficulty::Hard, scores(0, 0, 10));
        engine.toggle();
        let _ = engine.take_events();
        feed(&mut engine);
        let events = engine.take_events();
        assert!(!events
            .iter()
            .any(|ev| matches!(ev, EngineEvent::NewHighScore { .. })));
        assert!(events.contains(&EngineEvent::Scoreboard(Scoreboard {
            score: 1,
            high_score: 10,
            difficulty: Difficulty::Hard
        })));
    }

    #[test]
    fn end_to_end() {
        let mut engine = new_engine(Difficulty::Medium, scores(0, 3, 0));
        engine.toggle();
        assert_eq!(engine.input.current(), Some(Direction::Down));
        assert_eq!(engine.status(), Status::Running);
        for _ in 0..5 {
            feed(&mut engine);
        }
        assert_eq!(engine.score, 5);
        assert_eq!(engine.snake.len(), 6);
        assert_eq!(engine.high_scores().get(Difficulty::Medium), 5);

        // Curl the snake back into itself
        engine.food = Cell::new(2, 2);
        for d in [Direction::Right, Direction::Up, Direction::Left] {
            assert!(engine.steer(d));
            engine.tick();
        }
        assert_eq!(engine.status(), Status::Running);
        let _ = engine.take_events();
        engine.tick();
        let events = engine.take_events();
        assert_eq!(
            events.first(),
            Some(&EngineEvent::GameOver {
                difficulty: Difficulty::Medium,
                score: 5
            })
        );
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(engine.score, 0);
        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.input.current(), None);
        assert_eq!(engine.high_scores().get(Difficulty::Medium), 5);
        assert!(events.contains(&EngineEvent::Scoreboard(Scoreboard {
            score: 0,
            high_score: 5,
            difficulty: Difficulty::Medium
        })));
        assert!(!engine.frame(Duration::from_secs(1)));
    }

    #[test]
    fn wall_ends_game() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        assert!(engine.steer(Direction::Right));
        // Nine ticks from x=9 put the head on the wall at x=18
        for _ in 0..9 {
            engine.tick();
        }
        assert_eq!(engine.snake.head(), Cell::new(18, 9));
        assert_eq!(engine.status(), Status::Running);
        engine.tick();
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(engine.snake.head(), Cell::new(9, 9));
    }

    #[test]
    fn high_score_monotonic() {
        let mut engine = new_engine(Difficulty::Medium, scores(2, 4, 6));
        engine.toggle();
        for _ in 0..7 {
            feed(&mut engine);
        }
        assert_eq!(engine.high_scores().get(Difficulty::Medium), 7);

        engine.set_difficulty(Difficulty::Easy);
        engine.toggle();
        feed(&mut engine);
        assert_eq!(engine.high_scores().get(Difficulty::Easy), 2);
        assert_eq!(engine.high_scores().get(Difficulty::Medium), 7);

        engine.set_difficulty(Difficulty::Medium);
        engine.toggle();
        for _ in 0..3 {
            feed(&mut engine);
        }
        assert_eq!(engine.high_scores(), scores(2, 7, 6));
    }

    #[test]
    fn high_score_kept_when_not_beaten() {
        let mut engine = new_engine(Difficulty::Hard, scores(0, 0, 9));
        engine.toggle();
        for _ in 0..4 {
            feed(&mut engine);
        }
        assert_eq!(engine.high_scores().get(Difficulty::Hard), 9);
    }

    #[test]
    fn difficulty_change_resets() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        for _ in 0..3 {
            feed(&mut engine);
        }
        let _ = engine.take_events();
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(engine.score, 0);
        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert_eq!(engine.clock.interval(), Duration::from_secs(1) / 13);
        assert_eq!(engine.high_scores().get(Difficulty::Medium), 3);
        let events = engine.take_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[..2],
            [
                EngineEvent::DifficultyChanged(Difficulty::Hard),
                EngineEvent::Scoreboard(Scoreboard {
                    score: 0,
                    high_score: 0,
                    difficulty: Difficulty::Hard
                }),
            ]
        );
        assert!(!engine.frame(Duration::from_secs(1)));
    }

    #[test]
    fn same_difficulty_is_noop() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        feed(&mut engine);
        let _ = engine.take_events();
        engine.set_difficulty(Difficulty::Medium);
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.score, 1);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn pause_and_resume() {
        let mut engine = new_engine(Difficulty::Medium, HighScores::default());
        engine.toggle();
        assert!(engine.steer(Direction::Left));
        engine.tick();
        engine.toggle();
        assert_eq!(engine.status(), Status::Paused);
        let before = engine.snapshot();
        assert!(!engine.frame(Duration::from_secs(10)));
        engine.tick();
        assert_eq!(engine.snapshot(), before);
        assert!(!engine.steer(Direction::Up));
        engine.toggle();
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.input.current(), Some(Direction::Left));
        assert_eq!(
            engine.take_events(),
            [
                EngineEvent::Started,
                EngineEvent::Render(Snapshot {
                    snake: vec![Cell::new(8, 9)],
                    food: Cell::new(6, 7),
                    score: 0,
                }),
                EngineEvent::Paused,
                EngineEvent::Started,
            ]
        );
    }

    #[test]
    fn frames_are_throttled() {
        let mut engine = new_engine(Difficulty::Easy, HighScores::default());
        engine.toggle();
        assert!(engine.frame(Duration::from_millis(16)));
        let ticked = (0..20)
            .filter(|_| engine.frame(Duration::from_millis(16)))
            .count();
        // 1/6 s per tick at 16 ms per frame: 11 frames per tick
        assert_eq!(ticked, 1);
        assert_eq!(engine.snake.head(), Cell::new(9, 11));
    }
}
