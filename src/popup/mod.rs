mod alert;
mod warning;
pub(crate) use self::alert::GameOverAlert;
pub(crate) use self::warning::Warning;
use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::Line,
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A modal pop-up drawn over the game.  While one is showing, all input
/// goes to it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Popup {
    GameOver(GameOverAlert),
    Warning(Warning),
}

impl Popup {
    /// Handle a command.  Returns `Some` once the pop-up is done.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Outcome> {
        match self {
            Popup::GameOver(alert) => alert.handle_command(cmd),
            Popup::Warning(warning) => warning.handle_command(cmd),
        }
    }
}

impl From<GameOverAlert> for Popup {
    fn from(value: GameOverAlert) -> Popup {
        Popup::GameOver(value)
    }
}

impl From<Warning> for Popup {
    fn from(value: Warning) -> Popup {
        Popup::Warning(value)
    }
}

impl Widget for &Popup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            Popup::GameOver(alert) => alert.render(area, buf),
            Popup::Warning(warning) => warning.render(area, buf),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Dismissed,
    Quit,
}

/// Draw an empty titled box of `size` in the middle of `area` with an
/// `[OK]` button on its last line.  Returns the space left for the body.
fn render_frame(title: &str, size: Size, area: Rect, buf: &mut Buffer) -> Rect {
    let frame = center_rect(area, size);
    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));
    let [body, button] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .flex(Flex::Start)
        .spacing(1)
        .areas(block.inner(frame));
    Clear.render(frame, buf);
    block.render(frame, buf);
    Line::from("[OK]").centered().render(button, buf);
    body
}
