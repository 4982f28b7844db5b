use super::{render_frame, Outcome};
use crate::command::Command;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    text::{Line, Text},
    widgets::Widget,
};

const MESSAGE: &str = "Game Over! Press Start to play again.";

/// The pop-up shown when the snake crashes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOverAlert {
    /// The score of the game that just ended
    score: u32,
}

impl GameOverAlert {
    const TEXT_WIDTH: u16 = 40;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;
    const HEIGHT: u16 = 6;

    pub(crate) fn new(score: u32) -> GameOverAlert {
        GameOverAlert { score }
    }

    pub(crate) fn handle_command(self, cmd: Command) -> Option<Outcome> {
        match cmd {
            Command::Enter | Command::Space | Command::Esc => Some(Outcome::Dismissed),
            Command::Quit | Command::Q => Some(Outcome::Quit),
            _ => None,
        }
    }
}

impl Widget for &GameOverAlert {
    // `area` is the whole display, not just the pop-up
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = Size::new(GameOverAlert::WIDTH, GameOverAlert::HEIGHT);
        let body = render_frame(" GAME OVER ", size, area, buf);
        Text::from_iter([
            Line::from(MESSAGE),
            Line::from(format!("Score: {}", self.score)),
        ])
        .centered()
        .render(body, buf);
    }
}
