//! Assorted constants & hard-coded configuration
use crate::engine::Cell;
use crate::theme::Palette;
use ratatui::style::{Color, Modifier, Style};
use std::num::NonZeroU32;
use std::ops::RangeInclusive;

/// Width & height of the board, walls included, when not configured
pub(crate) const DEFAULT_BOARD_SIZE: u16 = 19;

/// Permitted values for the configured board size
pub(crate) const BOARD_SIZES: RangeInclusive<u16> = 10..=64;

/// Where the food sits before the first one is eaten
pub(crate) const INITIAL_FOOD: Cell = Cell::new(6, 7);

/// Newly-spawned food is kept at least this many cells in from the edge of
/// the board (so one cell of clear floor between it and the wall)
pub(crate) const FOOD_MARGIN: i32 = 2;

/// Default ticks per second on Easy
pub(crate) const EASY_SPEED: NonZeroU32 = NonZeroU32::new(6).expect("6 is nonzero");

/// Default ticks per second on Medium
pub(crate) const MEDIUM_SPEED: NonZeroU32 = NonZeroU32::new(9).expect("9 is nonzero");

/// Default ticks per second on Hard
pub(crate) const HARD_SPEED: NonZeroU32 = NonZeroU32::new(13).expect("13 is nonzero");

/// A swipe must travel further than this many pixels along its dominant axis
/// to count as a turn
pub(crate) const SWIPE_THRESHOLD: f64 = 30.0;

/// Nominal width of a terminal cell in pixels, for measuring mouse swipes
pub(crate) const CELL_PIXEL_WIDTH: f64 = 8.0;

/// Nominal height of a terminal cell in pixels, for measuring mouse swipes
pub(crate) const CELL_PIXEL_HEIGHT: f64 = 16.0;

/// Each board cell is drawn this many terminal columns wide so that the
/// board looks roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_GLYPH: [char; 2] = ['▓', '▓'];

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_GLYPH: [char; 2] = ['█', '█'];

/// Glyphs for the food
pub(crate) const FOOD_GLYPH: [char; 2] = ['●', ' '];

/// Glyphs for the walls around the board
pub(crate) const WALL_GLYPH: [char; 2] = ['░', '░'];

/// Default styles for the light theme
pub(crate) const LIGHT_PALETTE: Palette = Palette {
    snake: Style::new().fg(Color::Green),
    head: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    food: Style::new().fg(Color::Red),
    wall: Style::new().fg(Color::DarkGray),
};

/// Default styles for the dark theme
pub(crate) const DARK_PALETTE: Palette = Palette {
    snake: Style::new().fg(Color::LightGreen),
    head: Style::new()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD),
    food: Style::new().fg(Color::LightRed),
    wall: Style::new().fg(Color::Gray),
};

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
