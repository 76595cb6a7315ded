//! Decoration styles.
//!
//! A [`StyleConfig`] maps each [`WhitespaceKind`] to the box style used to paint
//! its runs. Configs are plain values: updating one produces a new config
//! (`with_style`), which keeps "did the styles change" a cheap comparison and
//! avoids aliasing surprises when several viewports share one config.

use crate::detect::WhitespaceKind;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Create a color from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Default fill color for space runs.
pub const DEFAULT_SPACES_FILL: Color = Color::rgba(0x46, 0x00, 0x23, 0xA0);
/// Default border color for space runs.
pub const DEFAULT_SPACES_BORDER: Color = Color::rgb(0x56, 0x00, 0x2B);
/// Default fill color for tab runs.
pub const DEFAULT_TABS_FILL: Color = Color::rgba(0x38, 0x00, 0x3B, 0xA0);
/// Default border color for tab runs.
pub const DEFAULT_TABS_BORDER: Color = Color::rgb(0x4B, 0x00, 0x4E);
/// Default border stroke width, in surface units.
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// How the box around one run is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    /// Interior fill color.
    pub fill: Color,
    /// Border stroke color.
    pub border: Color,
    /// Border stroke width, in surface units.
    pub border_width: f32,
}

impl BoxStyle {
    /// Create a box style.
    pub const fn new(fill: Color, border: Color, border_width: f32) -> Self {
        Self {
            fill,
            border,
            border_width,
        }
    }
}

/// The per-kind visual styles of a viewport's decorations.
///
/// The defaults are a high-contrast purple/magenta pair; exact values are a
/// cosmetic concern and hosts are expected to override them from their own
/// settings facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// Style applied to space runs.
    pub spaces: BoxStyle,
    /// Style applied to tab runs.
    pub tabs: BoxStyle,
}

impl StyleConfig {
    /// Create a config with explicit per-kind styles.
    pub const fn new(spaces: BoxStyle, tabs: BoxStyle) -> Self {
        Self { spaces, tabs }
    }

    /// An alternative blue/violet palette.
    pub const fn classic() -> Self {
        Self {
            spaces: BoxStyle::new(
                Color::rgba(0x2B, 0x00, 0x95, 0xA0),
                Color::rgb(0x2B, 0x00, 0xB5),
                DEFAULT_BORDER_WIDTH,
            ),
            tabs: BoxStyle::new(
                Color::rgba(0x2B, 0x00, 0x65, 0xA0),
                Color::rgb(0x3B, 0x00, 0x85),
                DEFAULT_BORDER_WIDTH,
            ),
        }
    }

    /// The style used for runs of the given kind.
    pub fn style_for(&self, kind: WhitespaceKind) -> &BoxStyle {
        match kind {
            WhitespaceKind::Space => &self.spaces,
            WhitespaceKind::Tab => &self.tabs,
        }
    }

    /// Return an updated config with the style for one kind replaced.
    pub fn with_style(mut self, kind: WhitespaceKind, style: BoxStyle) -> Self {
        match kind {
            WhitespaceKind::Space => self.spaces = style,
            WhitespaceKind::Tab => self.tabs = style,
        }
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            spaces: BoxStyle::new(
                DEFAULT_SPACES_FILL,
                DEFAULT_SPACES_BORDER,
                DEFAULT_BORDER_WIDTH,
            ),
            tabs: BoxStyle::new(DEFAULT_TABS_FILL, DEFAULT_TABS_BORDER, DEFAULT_BORDER_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_differ_per_kind() {
        let config = StyleConfig::default();
        assert_ne!(
            config.style_for(WhitespaceKind::Space),
            config.style_for(WhitespaceKind::Tab)
        );
    }

    #[test]
    fn test_with_style_does_not_mutate_the_source() {
        let base = StyleConfig::default();
        let loud = BoxStyle::new(Color::rgb(0xFF, 0x00, 0x00), Color::rgb(0xFF, 0xFF, 0x00), 2.0);
        let updated = base.with_style(WhitespaceKind::Tab, loud);

        assert_eq!(updated.style_for(WhitespaceKind::Tab), &loud);
        assert_eq!(updated.spaces, base.spaces);
        assert_ne!(updated, base);
        // The original config is unchanged.
        assert_eq!(base, StyleConfig::default());
    }

    #[test]
    fn test_classic_palette_differs_from_default() {
        assert_ne!(StyleConfig::classic(), StyleConfig::default());
    }
}
