use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::engine::{Direction, Engine, EngineEvent, Swipe};
use crate::popup::{GameOverAlert, Outcome, Popup, Warning};
use crate::store::{SaveError, Store};
use crate::theme::{Palette, Theme};
use crate::view::View;
use crossterm::event::{poll, read, Event, MouseButton, MouseEvent, MouseEventKind};
use enum_map::EnumMap;
use rand::Rng;
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The running program: owns the engine and connects it to the terminal,
/// the persistent store, and the pop-ups
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    store: Store,
    view: View,
    theme: Theme,
    palettes: EnumMap<Theme, Palette>,
    /// Pop-ups currently on screen; only the last one receives input
    popups: Vec<Popup>,
    /// Terminal cell at which a left-button drag began
    drag_start: Option<(u16, u16)>,
    quitting: bool,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config, store: Store) -> Self {
        App::new_with_rng(config, store, rand::rng())
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn new_with_rng(config: &Config, store: Store, rng: R) -> App<R> {
        let engine = Engine::new_with_rng(
            config.settings(),
            store.difficulty(),
            store.high_scores(),
            rng,
        );
        let theme = store.theme();
        let palettes = config.theme.palettes();
        let view = View::new(
            engine.grid(),
            engine.snapshot(),
            engine.scoreboard(),
            palettes[theme],
        );
        App {
            engine,
            store,
            view,
            theme,
            palettes,
            popups: Vec::new(),
            drag_start: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.process_input()?;
            let now = Instant::now();
            self.frame(now.saturating_duration_since(last_frame));
            last_frame = now;
        }
        Ok(())
    }

    /// Wait for the next input event and handle it.  While a game is
    /// running, the wait ends early when the next tick is due.
    fn process_input(&mut self) -> io::Result<()> {
        let ready = match self.engine.until_tick() {
            Some(wait) => poll(wait)?,
            None => true,
        };
        if ready {
            self.handle_event(read()?);
        }
        Ok(())
    }

    /// Let the engine know that time has passed
    fn frame(&mut self, elapsed: Duration) {
        self.engine.frame(elapsed);
        self.dispatch_events();
    }
}

impl<R> App<R> {
    pub(crate) fn push_popup<P: Into<Popup>>(&mut self, popup: P) {
        self.popups.push(popup.into());
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(popup) = self.popups.last_mut() {
            if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                match popup.handle_command(cmd) {
                    Some(Outcome::Dismissed) => {
                        self.popups.pop();
                    }
                    Some(Outcome::Quit) => self.quitting = true,
                    None => (),
                }
            }
            return;
        }
        match event {
            Event::FocusLost => self.engine.pause(),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.drag_start = Some((column, row)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some((col0, row0)) = self.drag_start.take() {
                    let swipe = Swipe {
                        dx: (f64::from(column) - f64::from(col0)) * consts::CELL_PIXEL_WIDTH,
                        dy: (f64::from(row) - f64::from(row0)) * consts::CELL_PIXEL_HEIGHT,
                    };
                    if let Some(direction) = swipe.direction(consts::SWIPE_THRESHOLD) {
                        log::trace!("Swiped {direction:?}");
                        self.engine.steer(direction);
                    }
                }
            }
            _ => {
                if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                    self.handle_command(cmd);
                }
            }
        }
        self.dispatch_events();
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit | Command::Q => self.quitting = true,
            Command::Up => {
                self.engine.steer(Direction::Up);
            }
            Command::Down => {
                self.engine.steer(Direction::Down);
            }
            Command::Left => {
                self.engine.steer(Direction::Left);
            }
            Command::Right => {
                self.engine.steer(Direction::Right);
            }
            Command::Space | Command::Enter => self.engine.toggle(),
            Command::Esc => self.engine.pause(),
            Command::One => self.engine.set_difficulty(Difficulty::Easy),
            Command::Two => self.engine.set_difficulty(Difficulty::Medium),
            Command::Three => self.engine.set_difficulty(Difficulty::Hard),
            Command::Next => self.engine.set_difficulty(self.engine.difficulty().cycle()),
            Command::T => self.toggle_theme(),
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        log::info!("Switching to {} theme", self.theme.as_str());
        self.view.set_palette(self.palettes[self.theme]);
        let r = self.store.set_theme(self.theme);
        self.check_save(r);
    }

    /// Pass everything the engine has reported on to the view, the store,
    /// and the pop-ups
    fn dispatch_events(&mut self) {
        for event in self.engine.take_events() {
            match event {
                EngineEvent::Started | EngineEvent::Paused | EngineEvent::FoodEaten { .. } => (),
                EngineEvent::NewHighScore { .. } => {
                    let r = self.store.set_high_scores(self.engine.high_scores());
                    self.check_save(r);
                }
                EngineEvent::GameOver { score, .. } => self.push_popup(GameOverAlert::new(score)),
                EngineEvent::DifficultyChanged(difficulty) => {
                    let r = self.store.set_difficulty(difficulty);
                    self.check_save(r);
                }
                EngineEvent::Scoreboard(scoreboard) => self.view.show_scoreboard(scoreboard),
                EngineEvent::Render(snapshot) => self.view.render_snapshot(snapshot),
            }
        }
        self.view.set_status(self.engine.status());
    }

    /// Report a failure to save to the store, pausing the game so that the
    /// player can read about it
    fn check_save(&mut self, r: Result<(), SaveError>) {
        if let Err(e) = r {
            let e = anyhow::Error::new(e);
            log::error!("{e:#}");
            self.engine.pause();
            self.push_popup(Warning::from_error(&e));
        }
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.view.render(area, buf);
        for popup in &self.popups {
            popup.render(area, buf);
        }
    }
}
