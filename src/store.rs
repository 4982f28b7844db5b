//! Persistent string-keyed storage for the player's selections and high
//! scores
use crate::difficulty::Difficulty;
use crate::highscores::HighScores;
use crate::theme::Theme;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the last-selected difficulty is stored
pub(crate) const DIFFICULTY_KEY: &str = "difficulty";

/// Key under which the high score table is stored
pub(crate) const HIGH_SCORES_KEY: &str = "highScores";

/// Key under which the last-selected theme is stored
pub(crate) const THEME_KEY: &str = "theme";

/// A string-to-string map that is written to a JSON file every time it
/// changes.  A store without a path lives only in memory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Store {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl Store {
    /// Create an empty store that is not backed by any file
    pub(crate) fn in_memory() -> Store {
        Store::default()
    }

    /// Create an empty store that will save to `path`, ignoring any data
    /// already there
    pub(crate) fn empty_at(path: &Path) -> Store {
        Store {
            path: Some(path.to_owned()),
            entries: BTreeMap::new(),
        }
    }

    /// Load the store from the file at `path`.  If the file does not exist, an
    /// empty store is returned.
    pub(crate) fn load(path: &Path) -> Result<Store, LoadError> {
        let entries = match fs_err::read(path) {
            Ok(src) => serde_json::from_slice(&src).map_err(LoadError::deserialize)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(LoadError::read(e)),
        };
        Ok(Store {
            path: Some(path.to_owned()),
            entries,
        })
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set `key` to `value` and write the store out to disk
    pub(crate) fn set(&mut self, key: &str, value: String) -> Result<(), SaveError> {
        self.entries.insert(key.to_owned(), value);
        self.save()
    }

    fn save(&self) -> Result<(), SaveError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string_pretty(&self.entries).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }

    /// Return the stored difficulty, falling back to the default if it is
    /// missing or invalid
    pub(crate) fn difficulty(&self) -> Difficulty {
        match self.get(DIFFICULTY_KEY).map(str::parse::<Difficulty>) {
            Some(Ok(d)) => d,
            Some(Err(_)) => {
                log::warn!("Ignoring invalid stored difficulty {:?}", self.get(DIFFICULTY_KEY));
                Difficulty::default()
            }
            None => Difficulty::default(),
        }
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SaveError> {
        self.set(DIFFICULTY_KEY, difficulty.as_str().to_owned())
    }

    /// Return the stored high score table, falling back to all zeroes if it
    /// is missing or invalid
    pub(crate) fn high_scores(&self) -> HighScores {
        match self.get(HIGH_SCORES_KEY).map(HighScores::from_json) {
            Some(Ok(hs)) => hs,
            Some(Err(e)) => {
                log::warn!("Ignoring invalid stored high scores: {e}");
                HighScores::default()
            }
            None => HighScores::default(),
        }
    }

    pub(crate) fn set_high_scores(&mut self, high_scores: HighScores) -> Result<(), SaveError> {
        self.set(HIGH_SCORES_KEY, high_scores.to_json())
    }

    /// Return the stored theme, falling back to the default if it is missing
    /// or invalid
    pub(crate) fn theme(&self) -> Theme {
        match self.get(THEME_KEY).map(str::parse::<Theme>) {
            Some(Ok(t)) => t,
            Some(Err(_)) => {
                log::warn!("Ignoring invalid stored theme {:?}", self.get(THEME_KEY));
                Theme::default()
            }
            None => Theme::default(),
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) -> Result<(), SaveError> {
        self.set(THEME_KEY, theme.as_str().to_owned())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save game data to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize game data")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write game data file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read game data from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read game data file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize game data")]
    Deserialize(#[source] serde_json::Error),
}
