//! Host viewport contracts.
//!
//! The engine is headless: it never talks to a text buffer, a layout engine, or
//! a rendering backend directly. Everything it needs from the hosting editor is
//! captured by two value types ([`Line`], [`Region`]) and one trait
//! ([`ViewportHost`]):
//!
//! - the host pushes the *new or reformatted* visible lines to
//!   [`DecorationManager::on_visible_lines_changed`](crate::DecorationManager::on_visible_lines_changed)
//!   on every layout pass, and
//! - the manager pulls the *full* visible set back through
//!   [`ViewportHost::visible_lines`] when it needs to repaint from scratch.

use crate::detect::WhitespaceKind;
use crate::span::Span;
use crate::style::BoxStyle;

/// A read-only view of one line of text in a document snapshot.
///
/// `start` and `end` are absolute character offsets; `end` excludes line-break
/// characters. `text` holds exactly the characters of `[start, end)`. Lines are
/// supplied fresh by the host on every notification and are never retained or
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Absolute character offset of the line begin (inclusive).
    pub start: usize,
    /// Absolute character offset of the line end (exclusive of line breaks).
    pub end: usize,
    /// The characters in `[start, end)`.
    pub text: String,
}

impl Line {
    /// Create a line view, deriving `end` from the text's character count so
    /// the offsets and the text cannot disagree.
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self { start, end, text }
    }

    /// The line's character span.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// The line's length in characters.
    pub fn char_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Where a character span currently renders on the surface.
///
/// Units are surface-defined (typically pixels); the engine only carries them
/// through from [`ViewportHost::resolve_geometry`] to the decorations it emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Region {
    /// Create a region.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A fully computed decoration: one styled rectangle bound to a run's span.
///
/// The engine hands these to [`ViewportHost::add_decoration`]; whatever visual
/// object the host builds from one is owned by the host and is only ever torn
/// down wholesale via [`ViewportHost::remove_all_decorations`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    /// The decorated character span.
    pub span: Span,
    /// The run kind the span was detected as.
    pub kind: WhitespaceKind,
    /// Where the span renders, as resolved at paint time.
    pub region: Region,
    /// How to paint the box.
    pub style: BoxStyle,
}

/// The contract a hosting editor provides to a [`DecorationManager`](crate::DecorationManager).
///
/// One implementation is bound to exactly one viewport, and only one manager
/// ever mutates a given surface. The engine treats the decoration surface as
/// write-only: it never reads decorations back.
pub trait ViewportHost {
    /// Enumerate all currently visible lines, for a full repaint.
    fn visible_lines(&self) -> Vec<Line>;

    /// Resolve where a character span currently renders.
    ///
    /// Returning `None` is not an error: geometry can be transiently
    /// unavailable during reflow, and the affected run will simply be
    /// reconsidered on the next layout notification.
    fn resolve_geometry(&self, span: Span) -> Option<Region>;

    /// Add one decoration to the surface.
    fn add_decoration(&mut self, decoration: Decoration);

    /// Remove every decoration from the surface.
    fn remove_all_decorations(&mut self);

    /// Whether the viewport is still alive.
    ///
    /// Hosts tear viewports down on their own schedule; once this returns
    /// `false` the manager stops touching the surface entirely instead of
    /// failing. The default assumes the viewport lives as long as the host
    /// handle does.
    fn is_live(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_new_derives_end_from_char_count() {
        let line = Line::new(10, "héllo");
        assert_eq!(line.start, 10);
        assert_eq!(line.end, 15);
        assert_eq!(line.char_len(), 5);
        assert_eq!(line.span(), Span::new(10, 15));
    }

    #[test]
    fn test_empty_line() {
        let line = Line::new(7, "");
        assert_eq!(line.end, 7);
        assert_eq!(line.char_len(), 0);
        assert!(line.span().is_empty());
    }
}
