//! Application constants.
//!
//! Centralizes magic numbers and markup tokens for better maintainability.

/// Inline annotation markup understood by the typesetting side.
pub mod markup {
    /// Opens a plain annotation: `^{Chord}`.
    pub const OPEN: &str = "^{";

    /// Opens a space-gobbling annotation: `^*{Chord}`.
    pub const OPEN_GOBBLE: &str = "^*{";

    /// Closes either annotation form.
    pub const CLOSE: &str = "}";

    /// Text inserted at a hyphenated word split.
    pub const SPLIT_HYPHEN: &str = "- ";

    /// Text inserted at a bare word split.
    pub const SPLIT_SPACE: &str = " ";

    /// Separator placed between a word and a chord that sits on whitespace.
    pub const SEPARATOR: &str = " ";
}

/// Input limits.
pub mod limits {
    /// Default maximum chord-line length, in characters.
    pub const DEFAULT_MAX_LINE_LEN: usize = 512;

    /// Smallest maximum line length accepted from configuration.
    pub const MIN_MAX_LINE_LEN: usize = 16;
}

/// Chart conversion constants.
pub mod chart {
    /// Chord-looking share of tokens needed to call a line a chord line.
    pub const CHORD_RATIO: f64 = 0.5;

    /// Literal no-chord marker.
    pub const NO_CHORD: &str = "N.C.";
}

/// Environment variable names read by `Config::load`.
pub mod env {
    /// Maximum chord-line length.
    pub const MAX_LINE_LEN: &str = "CHORDLINE_MAX_LINE_LEN";

    /// `hyphen` or `space`.
    pub const SPLIT_STYLE: &str = "CHORDLINE_SPLIT_STYLE";

    /// `chars` or `width`.
    pub const COLUMN_MODE: &str = "CHORDLINE_COLUMN_MODE";
}
