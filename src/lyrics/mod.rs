//! Chord/lyric alignment.
//!
//! Turns a chord line and the lyric line under it into a single line with
//! inline `^{Chord}` annotations. The work happens in three steps:
//!
//! - [`tokens`] splits the chord line into positioned chord names
//! - [`scan`] walks the lyric once and drops each chord before its column
//! - [`repair`] splits words that ended up carrying two chords
//!
//! The result is an [`AnnotatedLine`], which renders to markup through
//! `Display` and can always give back the original lyric via
//! [`AnnotatedLine::lyric`].

pub mod repair;
pub mod scan;
pub mod tokens;

use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::constants::markup;
use crate::error::{LineRole, Result};

/// One piece of an annotated line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Piece {
    /// Original lyric text.
    Lyric {
        /// The text, verbatim.
        text: String,
    },
    /// A chord annotation.
    Chord {
        /// Chord name, verbatim.
        name: String,
        /// Render as `^*{..}` so no space is inserted after it.
        gobble: bool,
    },
    /// Layout text that was not in the lyric (split hyphens, separators).
    Inserted {
        /// The inserted text.
        text: String,
    },
}

impl Piece {
    pub(crate) fn lyric(text: impl Into<String>) -> Self {
        Self::Lyric { text: text.into() }
    }

    pub(crate) fn chord(name: impl Into<String>) -> Self {
        Self::Chord {
            name: name.into(),
            gobble: false,
        }
    }

    pub(crate) fn inserted(text: impl Into<String>) -> Self {
        Self::Inserted { text: text.into() }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lyric { text } | Self::Inserted { text } => f.write_str(text),
            Self::Chord { name, gobble } => {
                let open = if *gobble {
                    markup::OPEN_GOBBLE
                } else {
                    markup::OPEN
                };
                write!(f, "{open}{name}{}", markup::CLOSE)
            }
        }
    }
}

/// A lyric line with chords placed inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    pieces: Vec<Piece>,
}

impl AnnotatedLine {
    /// Wrap already-aligned pieces.
    pub const fn from_pieces(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// The pieces in output order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The original lyric line, with annotations and inserted layout removed.
    pub fn lyric(&self) -> String {
        self.pieces
            .iter()
            .filter_map(|p| match p {
                Piece::Lyric { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Chord names in output order.
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Chord { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Number of word splits the repair pass made.
    pub fn split_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Chord { gobble: true, .. }))
            .count()
    }
}

impl fmt::Display for AnnotatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pieces.iter().try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

/// Aligns chord lines onto lyric lines under a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordAligner {
    config: Config,
}

impl ChordAligner {
    /// Create an aligner with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Place every chord of `chord_line` inline in `lyric_line`.
    ///
    /// With no chords there is nothing to align, so the lyric comes back
    /// untouched and is not validated.
    pub fn align(&self, chord_line: &str, lyric_line: &str) -> Result<AnnotatedLine> {
        tokens::validate(chord_line, LineRole::Chord, &self.config)?;

        let chords = tokens::tokenize(chord_line, self.config.column_mode);
        if chords.is_empty() {
            let pieces = if lyric_line.is_empty() {
                Vec::new()
            } else {
                vec![Piece::lyric(lyric_line)]
            };
            return Ok(AnnotatedLine::from_pieces(pieces));
        }

        tokens::validate(lyric_line, LineRole::Lyric, &self.config)?;

        let pieces = scan::place(&chords, lyric_line, self.config.column_mode);
        let pieces = repair::split_shared_words(pieces, self.config.split_style);
        let line = AnnotatedLine::from_pieces(pieces);

        tracing::debug!(
            "Aligned {} chords onto {} lyric chars ({} word splits)",
            chords.len(),
            lyric_line.chars().count(),
            line.split_count()
        );

        Ok(line)
    }
}

/// Align with the default configuration and render straight to markup.
pub fn align(chord_line: &str, lyric_line: &str) -> Result<String> {
    ChordAligner::default()
        .align(chord_line, lyric_line)
        .map(|line| line.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;
    use crate::types::SplitStyle;

    #[test]
    fn slow_down_you_crazy_child() {
        let out = align("Gm               Bb", "   Slow down you crazy child");
        let out = out.unwrap();
        assert_eq!(out, "^{Gm}   Slow down you ^{Bb}crazy child");
    }

    #[test]
    fn two_chords_in_one_word_split_it() {
        assert_eq!(align("G  G7", "Woohoo").unwrap(), "^*{G}Woo- ^{G7}hoo");
    }

    #[test]
    fn late_chord_splits_near_word_end() {
        assert_eq!(align("G    G7", "Woohoo").unwrap(), "^*{G}Wooho- ^{G7}o");
    }

    #[test]
    fn existing_hyphen_is_not_doubled() {
        let before_hyphen = align("A   B", "well-known").unwrap();
        assert_eq!(before_hyphen, "^*{A}well ^{B}-known");
        let after_hyphen = align("A    B", "well-known").unwrap();
        assert_eq!(after_hyphen, "^*{A}well- ^{B}known");
    }

    #[test]
    fn chord_on_space_keeps_word_boundaries() {
        assert_eq!(
            align("     Ab", "for a juvenile").unwrap(),
            "for a ^{Ab} juvenile"
        );
    }

    #[test]
    fn chord_past_lyric_end_is_appended() {
        assert_eq!(align("        D", "Hello").unwrap(), "Hello ^{D}");
    }

    #[test]
    fn empty_lyric_gives_bare_annotations() {
        assert_eq!(align("C", "").unwrap(), "^{C}");
        assert_eq!(align("C   G", "").unwrap(), "^{C}^{G}");
    }

    #[test]
    fn empty_chord_line_passes_lyric_through() {
        assert_eq!(align("", "  just words  ").unwrap(), "  just words  ");
        assert_eq!(align("    ", "just words").unwrap(), "just words");
    }

    #[test]
    fn empty_chord_line_ignores_lyric_tabs() {
        let line = ChordAligner::default().align("", "a\tb").unwrap();
        assert_eq!(line.to_string(), "a\tb");
        assert_eq!(line.lyric(), "a\tb");
        assert!(align("  ", "").unwrap().is_empty());
    }

    #[test]
    fn lyric_tab_under_chords_is_malformed() {
        let err = align("G", "a\tb").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput {
                line: LineRole::Lyric,
                ..
            }
        ));
    }

    #[test]
    fn tab_in_chord_line_is_malformed() {
        let err = align("G\t\tC", "la la").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput {
                line: LineRole::Chord,
                ..
            }
        ));
    }

    #[test]
    fn no_chord_marker_is_verbatim() {
        assert_eq!(align("N.C.", "Stop").unwrap(), "^{N.C.}Stop");
    }

    #[test]
    fn space_split_style_omits_hyphen() {
        let config = Config {
            split_style: SplitStyle::Space,
            ..Config::default()
        };
        let line = ChordAligner::new(config).align("G  G7", "Woohoo").unwrap();
        assert_eq!(line.to_string(), "^*{G}Woo ^{G7}hoo");
    }

    #[test]
    fn lyric_survives_every_rule() {
        let cases = [
            ("Gm               Bb", "   Slow down you crazy child"),
            ("G  G7 A  D", "Woohoo yeah"),
            ("     Ab", "for a juvenile"),
            ("C     D    E", "Hi"),
            ("", "untouched"),
            ("C", ""),
        ];
        for (chords, lyric) in cases {
            let line = ChordAligner::default().align(chords, lyric).unwrap();
            assert_eq!(line.lyric(), lyric, "lyric changed for {chords:?}");
            assert_eq!(line.chords().count(), chords.split_whitespace().count());
            assert!(line.chords().eq(chords.split_whitespace()));
        }
    }

    #[test]
    fn pieces_serialize_with_kind_tag() {
        let line = ChordAligner::default().align("C", "Hi").unwrap();
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(
            json,
            r#"{"pieces":[{"kind":"chord","name":"C","gobble":false},{"kind":"lyric","text":"Hi"}]}"#
        );
    }
}
