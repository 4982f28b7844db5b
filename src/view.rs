use crate::consts;
use crate::engine::{Cell, Grid, Scoreboard, Snapshot, Status};
use crate::theme::Palette;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// Everything the player sees of the game: the score bar, the board, and a
/// line of key hints.  The view only ever shows what the engine last sent
/// it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct View {
    grid: Grid,
    snapshot: Snapshot,
    scoreboard: Scoreboard,
    status: Status,
    palette: Palette,
}

impl View {
    /// Minimum width of the display, so that the score bar and key hints
    /// fit even on small boards
    const MIN_WIDTH: u16 = 60;

    pub(crate) fn new(grid: Grid, snapshot: Snapshot, scoreboard: Scoreboard, palette: Palette) -> View {
        View {
            grid,
            snapshot,
            scoreboard,
            status: Status::Idle,
            palette,
        }
    }

    pub(crate) fn render_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    pub(crate) fn show_scoreboard(&mut self, scoreboard: Scoreboard) {
        self.scoreboard = scoreboard;
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// The size of the board in terminal cells
    fn board_size(&self) -> Size {
        let side = u16::try_from(self.grid.size()).unwrap_or(u16::MAX);
        Size {
            width: side.saturating_mul(consts::CELL_WIDTH),
            height: side,
        }
    }

    /// The size of everything the view draws
    pub(crate) fn display_size(&self) -> Size {
        let board = self.board_size();
        Size {
            width: board.width.max(View::MIN_WIDTH),
            height: board.height.saturating_add(2),
        }
    }

    fn score_line(&self) -> Line<'static> {
        let Scoreboard {
            score,
            high_score,
            difficulty,
        } = self.scoreboard;
        Line::from(format!(
            " Score: {score}   High Score: {high_score}   Difficulty: {difficulty}"
        ))
    }

    fn hints_line(&self) -> Line<'static> {
        let toggle = match self.status {
            Status::Idle => "Start",
            Status::Running => "Pause",
            Status::Paused => "Resume",
        };
        Line::from_iter([
            Span::raw(" "),
            Span::styled("[Space]", consts::KEY_STYLE),
            Span::raw(format!(" {toggle}  ")),
            Span::styled("[1-3/Tab]", consts::KEY_STYLE),
            Span::raw(" Difficulty  "),
            Span::styled("[t]", consts::KEY_STYLE),
            Span::raw(" Theme  "),
            Span::styled("[q]", consts::KEY_STYLE),
            Span::raw(" Quit"),
        ])
    }
}

impl Widget for &View {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_size = self.board_size();
        let display = center_rect(area, self.display_size());
        let [score_area, board_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board_size.height),
            Constraint::Length(1),
        ])
        .areas(display);

        buf.set_style(score_area, consts::SCORE_BAR_STYLE);
        self.score_line().render(score_area, buf);

        let mut board = Canvas {
            area: center_rect(board_area, board_size),
            buf,
        };
        let side = self.grid.size();
        for y in 0..side {
            for x in 0..side {
                let cell = Cell::new(x, y);
                if self.grid.is_wall(cell) {
                    board.draw_cell(cell, consts::WALL_GLYPH, self.palette.wall);
                }
            }
        }
        board.draw_cell(self.snapshot.food, consts::FOOD_GLYPH, self.palette.food);
        let mut cells = self.snapshot.snake.iter().copied();
        let head = cells.next();
        for c in cells {
            board.draw_cell(c, consts::SNAKE_BODY_GLYPH, self.palette.snake);
        }
        // Draw the head last so that it's visible even when it's on top of
        // the body, the food, or a wall
        if let Some(head) = head {
            board.draw_cell(head, consts::SNAKE_HEAD_GLYPH, self.palette.head);
        }

        self.hints_line().render(hints_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, glyph: [char; 2], style: Style) {
        let Some(col) = u16::try_from(cell.x)
            .ok()
            .and_then(|x| x.checked_mul(consts::CELL_WIDTH))
        else {
            return;
        };
        let Ok(row) = u16::try_from(cell.y) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let (x, y) = (self.area.x + col, self.area.y + row);
        for (offset, ch) in (0..).zip(glyph) {
            if let Some(c) = self.buf.cell_mut((x.saturating_add(offset), y)) {
                c.set_char(ch);
                c.set_style(style);
            }
        }
    }
}
