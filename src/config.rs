//! Conversion options and their (de)serialization

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Invalid or unreadable conversion options
#[derive(Debug)]
pub enum ConfigError {
    /// Unknown `to` value
    InvalidTarget(String),
    /// Unknown `mode` value
    InvalidMode(String),
    /// Unknown `romaji_system` value
    InvalidRomajiSystem(String),
    /// Options file could not be read or written
    Io { path: PathBuf, source: std::io::Error },
    /// Options JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTarget(s) => write!(f, "invalid target syllabary: {:?}", s),
            ConfigError::InvalidMode(s) => write!(f, "invalid conversion mode: {:?}", s),
            ConfigError::InvalidRomajiSystem(s) => {
                write!(f, "invalid romanization system: {:?}", s)
            }
            ConfigError::Io { path, source } => {
                write!(f, "failed to access options file {}: {}", path.display(), source)
            }
            ConfigError::Parse(s) => write!(f, "failed to parse options: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Implements `FromStr`, `TryFrom<String>` and `Display` over a fixed set of
/// lowercase names.
macro_rules! option_enum {
    ($ty:ident, $err:ident, { $($variant:ident => $name:literal),* $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }
        }

        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)*
                    _ => Err(ConfigError::$err(s.to_string())),
                }
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ConfigError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Target syllabary
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Target {
    #[default]
    Hiragana,
    Katakana,
    Romaji,
}

option_enum!(Target, InvalidTarget, {
    Hiragana => "hiragana",
    Katakana => "katakana",
    Romaji => "romaji",
});

/// Output layout
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Mode {
    /// Readings joined without separator
    #[default]
    Normal,
    /// Readings joined by a single space
    Spaced,
    /// Readings inlined after kanji between delimiters
    Okurigana,
    /// `<ruby>` markup
    Furigana,
}

option_enum!(Mode, InvalidMode, {
    Normal => "normal",
    Spaced => "spaced",
    Okurigana => "okurigana",
    Furigana => "furigana",
});

/// Romanization system
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum RomajiSystem {
    /// Nippon-shiki: si/ti/tu, circumflex long vowels
    Nippon,
    /// Passport: Hepburn spelling, long vowels dropped
    Passport,
    /// Hepburn: macron long vowels
    #[default]
    Hepburn,
}

option_enum!(RomajiSystem, InvalidRomajiSystem, {
    Nippon => "nippon",
    Passport => "passport",
    Hepburn => "hepburn",
});

/// Conversion options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Target syllabary
    #[serde(default)]
    pub to: Target,
    /// Output layout
    #[serde(default)]
    pub mode: Mode,
    /// Only used when `to` is romaji
    #[serde(default, alias = "romajiSystem")]
    pub romaji_system: RomajiSystem,
    /// Opening delimiter for okurigana/furigana readings
    #[serde(default = "default_delimiter_start")]
    pub delimiter_start: String,
    /// Closing delimiter for okurigana/furigana readings
    #[serde(default = "default_delimiter_end")]
    pub delimiter_end: String,
}

fn default_delimiter_start() -> String {
    "(".to_string()
}

fn default_delimiter_end() -> String {
    ")".to_string()
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            to: Target::default(),
            mode: Mode::default(),
            romaji_system: RomajiSystem::default(),
            delimiter_start: default_delimiter_start(),
            delimiter_end: default_delimiter_end(),
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, to: Target) -> Self {
        self.to = to;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_romaji_system(mut self, system: RomajiSystem) -> Self {
        self.romaji_system = system;
        self
    }

    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.delimiter_start = start.into();
        self.delimiter_end = end.into();
        self
    }

    /// Build options from raw string values, validating every enum eagerly
    ///
    /// ```
    /// use kuroshiro::config::{ConversionOptions, Mode};
    ///
    /// let options = ConversionOptions::parse("romaji", "spaced", "nippon").unwrap();
    /// assert_eq!(options.mode, Mode::Spaced);
    /// assert!(ConversionOptions::parse("cyrillic", "normal", "hepburn").is_err());
    /// ```
    pub fn parse(to: &str, mode: &str, romaji_system: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            to: to.parse()?,
            mode: mode.parse()?,
            romaji_system: romaji_system.parse()?,
            ..Self::default()
        })
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Load options from a JSON file
pub fn load_options(path: impl AsRef<Path>) -> Result<ConversionOptions, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    ConversionOptions::from_json(&content)
}

/// Save options as pretty-printed JSON, creating parent directories
pub fn save_options(path: impl AsRef<Path>, options: &ConversionOptions) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = options.to_json()?;
    fs::write(path, json).map_err(io_error)?;
    Ok(())
}
