//! Core type definitions shared by the aligner, the chart converter and the CLI.

use std::fmt;
use std::str::FromStr;

use unicode_width::UnicodeWidthChar;

use crate::error::Error;

/// A chord name and the column where it starts in the chord line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// Zero-based start column.
    pub column: usize,
    /// Chord name, verbatim (`Gm`, `Bb/F`, `N.C.`).
    pub name: String,
}

impl ChordToken {
    /// Create a token.
    pub fn new(column: usize, name: impl Into<String>) -> Self {
        Self {
            column,
            name: name.into(),
        }
    }
}

/// How a word is split when two chords land inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitStyle {
    /// `Woo- hoo`, unless a hyphen already sits at the split.
    #[default]
    Hyphen,
    /// `Woo hoo`.
    Space,
}

impl SplitStyle {
    /// Returns the configuration name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hyphen => "hyphen",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for SplitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hyphen" => Ok(Self::Hyphen),
            "space" => Ok(Self::Space),
            other => Err(Error::config(
                format!("unknown split style {other:?}"),
                "Use 'hyphen' or 'space'",
            )),
        }
    }
}

/// How columns are counted along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    /// One column per character.
    #[default]
    Chars,
    /// Terminal display width per character (wide CJK glyphs take two).
    DisplayWidth,
}

impl ColumnMode {
    /// Returns the configuration name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chars => "chars",
            Self::DisplayWidth => "width",
        }
    }

    /// Number of columns `c` occupies.
    pub fn advance(self, c: char) -> usize {
        match self {
            Self::Chars => 1,
            Self::DisplayWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        }
    }
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" | "char" => Ok(Self::Chars),
            "width" | "display-width" => Ok(Self::DisplayWidth),
            other => Err(Error::config(
                format!("unknown column mode {other:?}"),
                "Use 'chars' or 'width'",
            )),
        }
    }
}
