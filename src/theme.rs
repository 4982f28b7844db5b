use crate::consts;
use enum_map::{Enum, EnumMap};
use ratatui::style::Style;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Colour scheme selection
#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The name used for the theme in stored data
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub(crate) fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Theme, ParseThemeError> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("invalid theme name")]
pub(crate) struct ParseThemeError;

/// The styles used to draw the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) snake: Style,
    pub(crate) head: Style,
    pub(crate) food: Style,
    pub(crate) wall: Style,
}

/// The `[theme]` table of the configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct ThemeConfig {
    light: PaletteConfig,
    dark: PaletteConfig,
}

impl ThemeConfig {
    /// Return the palette for each theme, with any configured overrides
    /// applied to the built-in defaults
    pub(crate) fn palettes(&self) -> EnumMap<Theme, Palette> {
        EnumMap::from_fn(|theme| match theme {
            Theme::Light => self.light.apply(consts::LIGHT_PALETTE),
            Theme::Dark => self.dark.apply(consts::DARK_PALETTE),
        })
    }
}

/// Per-element style overrides for one theme
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct PaletteConfig {
    snake: Option<parse_style::Style>,
    head: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    wall: Option<parse_style::Style>,
}

impl PaletteConfig {
    fn apply(&self, base: Palette) -> Palette {
        Palette {
            snake: self.snake.map_or(base.snake, Style::from),
            head: self.head.map_or(base.head, Style::from),
            food: self.food.map_or(base.food, Style::from),
            wall: self.wall.map_or(base.wall, Style::from),
        }
    }
}
