//! Theme and language preference values.
//!
//! DESIGN
//! ======
//! Both axes are closed enums. Persisted values are plain literals
//! (`"dark"`, `"light"`, `"fr"`, `"en"`, `"ja"`); anything else read back from
//! storage fails to parse and is treated as absent by the controller.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raised when a persisted literal is not a member of its closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {axis} value: {value:?}")]
pub struct ParseError {
    pub axis: &'static str,
    pub value: String,
}

/// Visual palette. Dark is the default for first-time visitors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseError { axis: "theme", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported display languages.
///
/// Adding a member forces every exhaustive `match` over the set (translation
/// selection, asset naming, picker labels) to be updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
    Ja,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: [Language; 3] = [Self::Fr, Self::En, Self::Ja];

    /// Lowercase code used for storage and the document `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
            Self::Ja => "日本語",
        }
    }

    /// Next language in picker order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Ja,
            Self::Ja => Self::Fr,
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(ParseError { axis: "language", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The active `(theme, language)` pair for the current page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceState {
    pub theme: Theme,
    pub language: Language,
}

/// Namespaced storage keys for the two preference axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub theme: String,
    pub language: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            theme: format!("{prefix}-theme"),
            language: format!("{prefix}-lang"),
        }
    }
}
