use super::{render_frame, Outcome};
use crate::command::Command;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::Text,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};
use std::borrow::Cow;

/// A pop-up reporting an error and its causes.  Long reports can be
/// scrolled with the direction keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
    scroll_offset: usize,
    max_scroll: usize,
}

impl Warning {
    const MAX_LINES: u16 = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Outcome> {
        match cmd {
            Command::Enter | Command::Space | Command::Esc => return Some(Outcome::Dismissed),
            Command::Quit | Command::Q => return Some(Outcome::Quit),
            Command::Up if self.scrolling() => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Command::Down if self.scrolling() => {
                if self.scroll_offset < self.max_scroll.saturating_sub(1) {
                    self.scroll_offset += 1;
                }
            }
            _ => (),
        }
        None
    }

    fn scrolling(&self) -> bool {
        self.lines.len() > usize::from(Self::MAX_LINES)
    }

    /// Build a warning from an error message followed by the messages of its
    /// causes, outermost first
    pub(crate) fn from_messages<I: IntoIterator<Item = String>>(msgs: I) -> Warning {
        let mut msgs = msgs.into_iter();
        let width = usize::from(Warning::TEXT_WIDTH);
        let mut lines = match msgs.next() {
            Some(m) => wrap(&m, textwrap::Options::new(width).break_words(true)),
            None => vec![String::from("Something went wrong.")],
        };
        let causes = msgs.collect::<Vec<_>>();
        if !causes.is_empty() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
        }
        if let [cause] = causes.as_slice() {
            let opts = textwrap::Options::new(width)
                .break_words(true)
                .initial_indent("    ")
                .subsequent_indent("    ");
            lines.extend(wrap(cause, opts));
        } else {
            for (i, cause) in causes.iter().enumerate() {
                let initial = format!("{i:>5}: ");
                let opts = textwrap::Options::new(width)
                    .break_words(true)
                    .initial_indent(&initial)
                    .subsequent_indent("       ");
                lines.extend(wrap(cause, opts));
            }
        }
        let max_scroll = lines
            .len()
            .saturating_sub(usize::from(Warning::MAX_LINES) - 1);
        Warning {
            lines,
            scroll_offset: 0,
            max_scroll,
        }
    }

    /// Build a warning from an error and its chain of causes
    pub(crate) fn from_error(e: &anyhow::Error) -> Warning {
        Warning::from_messages(e.chain().map(ToString::to_string))
    }
}

fn wrap<'a>(text: &'a str, opts: textwrap::Options<'a>) -> Vec<String> {
    textwrap::wrap(text, opts)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

impl Widget for &Warning {
    // `area` is the whole display, not just the pop-up
    fn render(self, area: Rect, buf: &mut Buffer) {
        let shown = self.lines.len().min(usize::from(Warning::MAX_LINES));
        let size = Size::new(
            Warning::WIDTH + u16::from(self.scrolling()) * 2,
            u16::try_from(shown).unwrap_or(Warning::MAX_LINES) + 4,
        );
        let mut body = render_frame(" WARNING ", size, area, buf);
        if self.scrolling() {
            let [text_area, bar_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                    .spacing(1)
                    .areas(body);
            let mut state = ScrollbarState::new(self.max_scroll).position(self.scroll_offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .track_symbol(Some(ratatui::symbols::shade::MEDIUM))
                .render(bar_area, buf, &mut state);
            body = text_area;
        }
        Text::from_iter(
            self.lines
                .iter()
                .skip(self.scroll_offset)
                .take(shown)
                .map(String::as_str),
        )
        .render(body, buf);
    }
}
