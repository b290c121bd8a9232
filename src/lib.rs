//! `chordline` - ASCII chord charts to inline leadsheet annotations.
//!
//! Chord names written above lyrics at fixed columns are moved inline as
//! `^{Chord}` markup, ready for a typesetting package that understands it.
//!
//! ```
//! let out = chordline::align("Gm               Bb", "   Slow down you crazy child").unwrap();
//! assert_eq!(out, "^{Gm}   Slow down you ^{Bb}crazy child");
//! ```

// Re-export public modules for use in integration tests and as a library
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod types;

pub use chart::{convert_chart, convert_file, is_chord_line, plan_chart, ChartLine};
pub use config::Config;
pub use error::{Error, LineRole, Result};
pub use lyrics::{align, AnnotatedLine, ChordAligner, Piece};
pub use types::{ChordToken, ColumnMode, SplitStyle};
