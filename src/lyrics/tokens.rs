//! Chord-line tokenization and input validation.

use crate::config::Config;
use crate::error::{Error, LineRole, Result};
use crate::types::{ChordToken, ColumnMode};

/// Split a chord line into tokens on runs of whitespace.
///
/// Tokens come back in strictly increasing column order.
pub fn tokenize(chord_line: &str, mode: ColumnMode) -> Vec<ChordToken> {
    let mut tokens = Vec::new();
    let mut current: Option<ChordToken> = None;
    let mut column = 0;

    for c in chord_line.chars() {
        if c.is_whitespace() {
            if let Some(token) = current.take() {
                tokens.push(token);
            }
        } else {
            current
                .get_or_insert_with(|| ChordToken::new(column, String::new()))
                .name
                .push(c);
        }
        column += mode.advance(c);
    }

    if let Some(token) = current {
        tokens.push(token);
    }

    tokens
}

const TAB_REASON: &str = "tab characters are not supported; expand them to spaces";

/// Reject input that would silently mis-align.
///
/// Tabs have no fixed column width, so they are refused. Only the chord line
/// is held to the configured length limit.
pub fn validate(line: &str, role: LineRole, config: &Config) -> Result<()> {
    if line.contains('\t') {
        return Err(Error::malformed(role, line, TAB_REASON));
    }

    if role == LineRole::Chord {
        let len = line.chars().count();
        if len > config.max_line_len {
            let max = config.max_line_len;
            return Err(Error::malformed(
                role,
                line,
                format!("{len} characters exceeds the limit of {max}"),
            ));
        }
    }

    Ok(())
}
