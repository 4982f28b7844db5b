mod app;
mod command;
mod config;
mod consts;
mod difficulty;
mod engine;
mod highscores;
mod logging;
mod popup;
mod store;
mod theme;
mod util;
mod view;
use crate::app::App;
use crate::config::Config;
use crate::popup::Warning;
use crate::store::Store;
use anyhow::Context;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play snake in the terminal

Options:
  -c <file>, --config <file>
                    Read configuration from the given file

  -h, --help        Display this help message and exit
  -V, --version     Show the program version and exit

Keys:
  Arrows, wasd, hjkl   Steer the snake
  Space, Enter         Start, pause, or resume
  Esc                  Pause
  1, 2, 3, Tab         Choose the difficulty
  t                    Toggle light/dark theme
  q, Ctrl-C            Quit

Dragging with the left mouse button also steers the snake.
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Run { config } => run(config.as_deref()),
            Cli::Help => {
                print!("{USAGE}");
                Ok(())
            }
            Cli::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if let Err(e) = logging::init(&config) {
        eprintln!("gridsnake: warning: {:#}", anyhow::Error::new(e));
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    let (store, load_error) = match config.storage_file() {
        Some(path) => match Store::load(&path) {
            Ok(store) => (store, None),
            Err(e) => (Store::empty_at(&path), Some(anyhow::Error::new(e))),
        },
        None => {
            log::info!("Saving is disabled; game data will be kept in memory only");
            (Store::in_memory(), None)
        }
    };
    let mut app = App::new(&config, store);
    if let Some(e) = load_error {
        log::error!("{e:#}");
        app.push_popup(Warning::from_error(&e));
    }
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .and_then(|()| app.run(terminal));
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange) {
        log::warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    log::info!("Exiting");
    r.context("terminal I/O failed")
}

fn main() -> ExitCode {
    let cli = match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            return ExitCode::from(2);
        }
    };
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
