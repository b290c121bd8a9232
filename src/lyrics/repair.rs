//! Word-split repair pass.
//!
//! The leadsheet markup allows one plain annotation per word. When the scan
//! leaves two chords inside the same word, the word is split before the
//! second chord and the first chord switches to the gobbling form, so the
//! typeset halves still read as one word.

use super::Piece;
use crate::constants::markup;
use crate::types::SplitStyle;

/// Split every word that carries more than one chord.
///
/// A word with n chords gets n - 1 splits; every chord but the last gobbles.
pub fn split_shared_words(mut pieces: Vec<Piece>, style: SplitStyle) -> Vec<Piece> {
    let mut i = 0;
    while i + 3 < pieces.len() {
        let Some((left, right)) = shared_word(&pieces[i..i + 4]) else {
            i += 1;
            continue;
        };
        let split = split_text(left, right, style);

        if let Piece::Chord { gobble, .. } = &mut pieces[i] {
            *gobble = true;
        }
        pieces.insert(i + 2, Piece::inserted(split));
        tracing::debug!("Split word before chord at piece {}", i + 3);

        // Continue from the second chord so a third one in the same word chains.
        i += 3;
    }
    pieces
}

/// Match chord, word fragment, chord, word continuation.
///
/// Returns the fragments on either side of the split point.
fn shared_word(window: &[Piece]) -> Option<(&str, &str)> {
    match window {
        [
            Piece::Chord { .. },
            Piece::Lyric { text: left },
            Piece::Chord { .. },
            Piece::Lyric { text: right },
        ] if !left.is_empty()
            && !left.contains(char::is_whitespace)
            && right.starts_with(|c: char| !c.is_whitespace()) =>
        {
            Some((left, right))
        }
        _ => None,
    }
}

/// The text to insert between `left` and `right`, the two halves of the word.
///
/// A hyphen already sitting on either side of the split is a natural boundary.
fn split_text(left: &str, right: &str, style: SplitStyle) -> &'static str {
    let natural = left.ends_with('-') || right.starts_with('-');
    match style {
        SplitStyle::Hyphen if !natural => markup::SPLIT_HYPHEN,
        SplitStyle::Hyphen | SplitStyle::Space => markup::SPLIT_SPACE,
    }
}
