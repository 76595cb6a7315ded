//! Trailing-whitespace run detection.
//!
//! This module provides the pure detection half of the engine: given one line's
//! text and its absolute character offsets, [`detect_trailing_runs`] computes the
//! maximal same-character runs of trailing spaces/tabs that should be decorated.
//!
//! Two different character predicates are involved, deliberately:
//!
//! - The **line-level** "is this line blank?" check uses [`char::is_whitespace`]
//!   (the Unicode `White_Space` property). A line with no non-whitespace content
//!   is never decorated.
//! - The **run-level** scan recognizes only `' '` and `'\t'`. Any other
//!   character, including blank-ish ones such as NBSP (`U+00A0`), terminates the
//!   scan and is never part of a run.

use crate::span::Span;
use thiserror::Error;

/// The character class of a whitespace run.
///
/// Only spaces and tabs are ever decorated. Deciding the class once here means
/// no downstream consumer has to handle an "unrecognized character" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitespaceKind {
    /// A run of `' '` characters.
    Space,
    /// A run of `'\t'` characters.
    Tab,
}

impl WhitespaceKind {
    /// Classify a character, returning `None` for anything that is not a space
    /// or a tab.
    pub const fn of_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Space),
            '\t' => Some(Self::Tab),
            _ => None,
        }
    }

    /// The character this kind denotes.
    pub const fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Tab => '\t',
        }
    }
}

/// A maximal run of identical trailing whitespace characters within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceRun {
    /// Which character the run consists of.
    pub kind: WhitespaceKind,
    /// The run's absolute character offsets (half-open, length >= 1).
    pub span: Span,
}

impl WhitespaceRun {
    /// Create a new run.
    pub fn new(kind: WhitespaceKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Contract violations reported by [`detect_trailing_runs`].
///
/// These are caller bugs, not runtime conditions; offsets are never silently
/// clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DetectError {
    /// The line span is inverted (`end < start`).
    #[error("invalid line span: end {end} < start {start}")]
    InvalidSpan {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
    /// The supplied text does not cover exactly `[start, end)`.
    #[error("line text length mismatch: span covers {expected} chars, text has {actual}")]
    LengthMismatch {
        /// Character count the span requires (`end - start`).
        expected: usize,
        /// Character count of the supplied text.
        actual: usize,
    },
}

/// Detect the trailing whitespace runs of one line.
///
/// `text` must hold exactly the characters of the line in `[start, end)`
/// (absolute character offsets, `end` exclusive of line-break characters).
///
/// Runs are returned ordered from line-end-adjacent to line-start-adjacent,
/// pairwise disjoint, each maximal. The result is empty when the line is empty,
/// consists entirely of whitespace, or its last character is neither a space
/// nor a tab.
///
/// # Example
///
/// ```rust
/// use trailspace_core::{detect_trailing_runs, Span, WhitespaceKind};
///
/// let runs = detect_trailing_runs("foo\t\t  ", 0, 7).unwrap();
/// assert_eq!(runs.len(), 2);
/// assert_eq!((runs[0].kind, runs[0].span), (WhitespaceKind::Space, Span::new(5, 7)));
/// assert_eq!((runs[1].kind, runs[1].span), (WhitespaceKind::Tab, Span::new(3, 5)));
/// ```
pub fn detect_trailing_runs(
    text: &str,
    start: usize,
    end: usize,
) -> Result<Vec<WhitespaceRun>, DetectError> {
    if end < start {
        return Err(DetectError::InvalidSpan { start, end });
    }

    let chars: Vec<char> = text.chars().collect();
    let expected = end - start;
    if chars.len() != expected {
        return Err(DetectError::LengthMismatch {
            expected,
            actual: chars.len(),
        });
    }

    // Empty lines and blank lines (no non-whitespace content) are never decorated.
    if chars.is_empty() || chars.iter().all(|ch| ch.is_whitespace()) {
        return Ok(Vec::new());
    }

    let mut runs = Vec::new();
    // `cursor` is a local exclusive end index; the next character examined is
    // `chars[cursor - 1]`.
    let mut cursor = chars.len();
    while cursor > 0 {
        let ch = chars[cursor - 1];
        let Some(kind) = WhitespaceKind::of_char(ch) else {
            // First non-space/tab character from the end: everything before it
            // is "real" text.
            break;
        };

        let run_end = cursor;
        while cursor > 0 && chars[cursor - 1] == ch {
            cursor -= 1;
        }
        // A character change starts a new run, so adjacent tab/space runs are
        // each emitted separately rather than merged.
        runs.push(WhitespaceRun::new(
            kind,
            Span::new(start + cursor, start + run_end),
        ));
    }

    Ok(runs)
}
