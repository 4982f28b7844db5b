use crate::consts;
use crate::difficulty::Difficulty;
use crate::engine::{Grid, Settings};
use crate::theme::ThemeConfig;
use log::LevelFilter;
use serde::Deserialize;
use std::borrow::Cow;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings about the board
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Tick rate for each difficulty
    #[serde(default)]
    pub(crate) speeds: Speeds,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) log: LogConfig,

    /// Style overrides for the themes
    #[serde(default)]
    pub(crate) theme: ThemeConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// The fixed parameters for the game engine
    pub(crate) fn settings(&self) -> Settings {
        Settings {
            grid: Grid::new(self.game.board_size),
            speeds: self.speeds,
        }
    }

    /// Return the filepath at which the persistent store should be kept: the
    /// file given in the configuration or, if that is not set, the default
    /// storage file path.  Returns `None` if the store should be kept in
    /// memory only, either because saving is disabled or because no path is
    /// configured and the default could not be computed.
    pub(crate) fn storage_file(&self) -> Option<Cow<'_, Path>> {
        if !self.files.save {
            return None;
        }
        self.files
            .storage_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| {
                dirs::data_local_dir()
                    .map(|p| Cow::from(p.join("gridsnake").join("storage.json")))
            })
    }

    /// Return the path of the log file: the file given in the configuration
    /// or, if that is not set, the default log file path
    pub(crate) fn log_file(&self) -> Option<Cow<'_, Path>> {
        self.log.file.as_deref().map(Cow::from).or_else(|| {
            dirs::data_local_dir().map(|p| Cow::from(p.join("gridsnake").join("gridsnake.log")))
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Width & height of the board, walls included
    pub(crate) board_size: u16,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            board_size: consts::DEFAULT_BOARD_SIZE,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    board_size: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            board_size: consts::DEFAULT_BOARD_SIZE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = BoardSizeError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, BoardSizeError> {
        if consts::BOARD_SIZES.contains(&value.board_size) {
            Ok(GameConfig {
                board_size: value.board_size,
            })
        } else {
            Err(BoardSizeError(value.board_size))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "board size {0} is out of range; must be from {min} to {max}",
    min = consts::BOARD_SIZES.start(),
    max = consts::BOARD_SIZES.end()
)]
pub(crate) struct BoardSizeError(u16);

/// Ticks per second for each difficulty
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Speeds {
    easy: NonZeroU32,
    medium: NonZeroU32,
    hard: NonZeroU32,
}

impl Speeds {
    pub(crate) fn rate(self, difficulty: Difficulty) -> NonZeroU32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for Speeds {
    fn default() -> Speeds {
        Speeds {
            easy: consts::EASY_SPEED,
            medium: consts::MEDIUM_SPEED,
            hard: consts::HARD_SPEED,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high scores & selections should be stored
    storage_file: Option<PathBuf>,

    /// Whether to load & save the store at all
    save: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            storage_file: None,
            save: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    storage_file: Option<String>,
    save: bool,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            storage_file: None,
            save: true,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            storage_file: value.storage_file.map(expanduser::expanduser).transpose()?,
            save: value.save,
        })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// Path to write log messages to
    file: Option<PathBuf>,

    /// Most verbose level of message to write
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
struct RawLogConfig {
    file: Option<String>,
    level: LevelFilter,
}

impl Default for RawLogConfig {
    fn default() -> RawLogConfig {
        RawLogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = std::io::Error;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, std::io::Error> {
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: value.level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rate(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn empty() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.settings(), Settings::default());
        assert_eq!(cfg.log.level, LevelFilter::Info);
    }

    #[test]
    fn full() {
        let cfg = toml::from_str::<Config>(concat!(
            "[game]\n",
            "board-size = 25\n",
            "\n",
            "[speeds]\n",
            "easy = 4\n",
            "hard = 20\n",
            "\n",
            "[files]\n",
            "storage-file = \"/var/games/gridsnake.json\"\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/gridsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(cfg.game.board_size, 25);
        assert_eq!(cfg.settings().grid, Grid::new(25));
        assert_eq!(cfg.speeds.rate(Difficulty::Easy), rate(4));
        assert_eq!(cfg.speeds.rate(Difficulty::Medium), rate(9));
        assert_eq!(cfg.speeds.rate(Difficulty::Hard), rate(20));
        assert_eq!(
            cfg.storage_file().as_deref(),
            Some(Path::new("/var/games/gridsnake.json"))
        );
        assert_eq!(cfg.log_file().as_deref(), Some(Path::new("/tmp/gridsnake.log")));
        assert_eq!(cfg.log.level, LevelFilter::Debug);
    }

    #[test]
    fn no_saving() {
        let cfg = toml::from_str::<Config>(concat!(
            "[files]\n",
            "storage-file = \"/var/games/gridsnake.json\"\n",
            "save = false\n",
        ))
        .unwrap();
        assert_eq!(cfg.storage_file(), None);
    }

    #[test]
    fn board_too_small() {
        let r = toml::from_str::<Config>("[game]\nboard-size = 9\n");
        assert!(r.is_err());
    }

    #[test]
    fn board_too_large() {
        let r = toml::from_str::<Config>("[game]\nboard-size = 65\n");
        assert!(r.is_err());
    }

    #[test]
    fn zero_speed() {
        let r = toml::from_str::<Config>("[speeds]\nmedium = 0\n");
        assert!(r.is_err());
    }

    #[test]
    fn bad_level() {
        let r = toml::from_str::<Config>("[log]\nlevel = \"loud\"\n");
        assert!(r.is_err());
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmpfile, "[speeds]\neasy = 3").unwrap();
        tmpfile.flush().unwrap();
        let cfg = Config::load(tmpfile.path(), false).unwrap();
        assert_eq!(cfg.speeds.rate(Difficulty::Easy), rate(3));
    }

    #[test]
    fn load_unparseable() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmpfile, "[speeds\neasy = 3").unwrap();
        tmpfile.flush().unwrap();
        assert!(matches!(
            Config::load(tmpfile.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }
}
