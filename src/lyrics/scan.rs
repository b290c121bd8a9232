//! Column-matching pass: one walk over the lyric, dropping chords in place.

use super::Piece;
use crate::constants::markup;
use crate::types::{ChordToken, ColumnMode};

/// Place each chord before the first lyric character at or after its column.
///
/// Chords that fall on whitespace, or past the end of the lyric, get a single
/// separator in front when the previous output is a word character, so they
/// do not glue onto that word. No other text is added or removed.
pub fn place(chords: &[ChordToken], lyric: &str, mode: ColumnMode) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(chords.len() * 2 + 1);
    let mut pending = chords.iter().peekable();
    let mut text = String::new();
    let mut column = 0;

    for c in lyric.chars() {
        let width = mode.advance(c);
        // Zero-width marks stay attached to the character before them.
        let anchorable = mode == ColumnMode::Chars || width > 0;

        while let Some(chord) = pending.next_if(|chord| anchorable && chord.column <= column) {
            flush(&mut pieces, &mut text);
            if c.is_whitespace() {
                separate(&mut pieces);
            }
            pieces.push(Piece::chord(&chord.name));
        }

        text.push(c);
        column += width;
    }

    flush(&mut pieces, &mut text);

    for chord in pending {
        separate(&mut pieces);
        pieces.push(Piece::chord(&chord.name));
    }

    pieces
}

fn flush(pieces: &mut Vec<Piece>, text: &mut String) {
    if !text.is_empty() {
        pieces.push(Piece::lyric(std::mem::take(text)));
    }
}

fn separate(pieces: &mut Vec<Piece>) {
    let last_char = match pieces.last() {
        Some(Piece::Lyric { text }) => text.chars().next_back(),
        _ => None,
    };
    if last_char.is_some_and(|c| !c.is_whitespace()) {
        pieces.push(Piece::inserted(markup::SEPARATOR));
    }
}
