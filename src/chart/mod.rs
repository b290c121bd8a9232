//! Whole-chart conversion.
//!
//! Walks an ASCII chart, pairs each chord line with the lyric line under it,
//! and aligns the pairs. Lines that are neither pass through.

use std::path::Path;
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::config::Config;
use crate::constants::chart::{CHORD_RATIO, NO_CHORD};
use crate::error::{Error, Result};
use crate::lyrics::ChordAligner;

/// Regex matching a single chord name such as `C`, `F#m7`, `Bbsus4`, `D/F#`, `(G)`.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\(?[A-G][#b♯♭]?",
        r"(maj|min|m|M|dim|aug|sus|add|\+|-|°|ø)?[0-9]*",
        r"((sus|add|maj|b|#|\+|-)[0-9]+)*",
        r"(/[A-G][#b♯♭]?)?\)?$",
    ))
    .expect("valid regex: RE_CHORD")
});

/// How one source line (or line pair) is treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartLine<'a> {
    /// A chord line and the lyric line under it.
    Pair {
        /// 1-based line number of the chord line.
        line_number: usize,
        /// The chord line.
        chords: &'a str,
        /// The lyric line.
        lyric: &'a str,
    },
    /// A chord line with no lyric under it, made only of chord names.
    ChordsOnly {
        /// 1-based line number.
        line_number: usize,
        /// The chord line.
        chords: &'a str,
    },
    /// Any other non-blank line.
    Text(&'a str),
    /// An empty or all-whitespace line.
    Blank,
}

/// Whether `line` looks like a row of chord names.
pub fn is_chord_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return false;
    }

    let chordish = tokens.iter().filter(|t| is_chord_name(t)).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = chordish as f64 / tokens.len() as f64;
    chordish > 0 && ratio >= CHORD_RATIO
}

/// Whether a single token looks like a chord name.
pub fn is_chord_name(token: &str) -> bool {
    token == NO_CHORD || RE_CHORD.is_match(token)
}

/// Decide how each line of `text` is treated, without aligning anything.
///
/// A chord line over a lyric is aligned as is, so stray tokens such as `x2`
/// become annotations. A chord line standing alone is only aligned when every
/// token is a chord name; otherwise it is kept as text (`Intro: G C D x2`).
pub fn plan_chart(text: &str) -> Vec<ChartLine<'_>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut plan = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let line_number = i + 1;

        if line.trim().is_empty() {
            plan.push(ChartLine::Blank);
            i += 1;
            continue;
        }

        if !is_chord_line(line) {
            plan.push(ChartLine::Text(line));
            i += 1;
            continue;
        }

        match lines.get(i + 1) {
            Some(next) if !next.trim().is_empty() && !is_chord_line(next) => {
                plan.push(ChartLine::Pair {
                    line_number,
                    chords: line,
                    lyric: next,
                });
                i += 2;
            }
            _ if line.split_whitespace().all(is_chord_name) => {
                plan.push(ChartLine::ChordsOnly {
                    line_number,
                    chords: line,
                });
                i += 1;
            }
            _ => {
                tracing::debug!("Keeping line {line_number} as text: not all chord names");
                plan.push(ChartLine::Text(line));
                i += 1;
            }
        }
    }

    plan
}

/// Convert a whole chart, one output line per planned entry.
pub fn convert_chart(text: &str, config: &Config) -> Result<String> {
    let plan = plan_chart(text);
    let aligner = ChordAligner::new(*config);

    let converted: Vec<String> = plan
        .par_iter()
        .map(|entry| match *entry {
            ChartLine::Pair {
                line_number,
                chords,
                lyric,
            } => aligner
                .align(chords.trim_end(), lyric.trim_end())
                .map(|line| line.to_string())
                .map_err(|e| e.at_line(line_number)),
            ChartLine::ChordsOnly {
                line_number,
                chords,
            } => aligner
                .align(chords.trim_end(), "")
                .map(|line| line.to_string())
                .map_err(|e| e.at_line(line_number)),
            ChartLine::Text(line) => Ok(line.trim_end().to_string()),
            ChartLine::Blank => Ok(String::new()),
        })
        .collect::<Result<_>>()?;

    let pairs = plan
        .iter()
        .filter(|e| matches!(e, ChartLine::Pair { .. }))
        .count();
    let lines_out = converted.len();
    tracing::info!("Converted chart: {lines_out} lines, {pairs} pairs");

    let mut out = converted.join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Read a chart from disk and convert it.
pub fn convert_file(path: &Path, config: &Config) -> Result<String> {
    let text = fs_err::read_to_string(path)
        .map_err(|e| Error::io(e, path.to_path_buf()))?;
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    convert_chart(&text, config)
}
