//! Decoration reconciliation per viewport.
//!
//! A [`DecorationManager`] owns the host handle for one viewport and keeps that
//! viewport's decoration set in sync with its visible text. Two entry points
//! mirror the two host notification shapes:
//!
//! - [`on_visible_lines_changed`](DecorationManager::on_visible_lines_changed)
//!   is the **additive** incremental path: the host reports only the lines that
//!   are new or were reformatted, and only those lines gain decorations.
//! - [`redraw_all`](DecorationManager::redraw_all) is the **destructive** full
//!   path: clear everything, repaint every visible line. It is the only path
//!   that removes decorations, which is what keeps the decoration set from ever
//!   going stale relative to the current text or styles.
//!
//! All work is synchronous on the caller's thread; notifications are processed
//! strictly in delivery order.

use crate::detect::{DetectError, detect_trailing_runs};
use crate::style::StyleConfig;
use crate::viewport::{Decoration, Line, ViewportHost};
use tracing::{debug, trace};

/// Owns the rendered decoration set of a single viewport.
///
/// Bound to exactly one [`ViewportHost`] at construction and active for its
/// whole lifetime; teardown is the host dropping the manager (and, during
/// shutdown races, [`ViewportHost::is_live`] returning `false`, which turns
/// every entry point into a no-op).
pub struct DecorationManager<S: ViewportHost> {
    surface: S,
    styles: StyleConfig,
}

impl<S: ViewportHost> DecorationManager<S> {
    /// Bind a manager to a viewport, using the default styles.
    pub fn new(surface: S) -> Self {
        Self::with_styles(surface, StyleConfig::default())
    }

    /// Bind a manager to a viewport with an explicit style configuration.
    pub fn with_styles(surface: S, styles: StyleConfig) -> Self {
        Self { surface, styles }
    }

    /// The current style configuration.
    pub fn styles(&self) -> &StyleConfig {
        &self.styles
    }

    /// The bound host handle.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the manager, returning the host handle.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Decorate the lines the host reports as new or reformatted.
    ///
    /// Purely additive: decorations of unrelated lines are left untouched. Runs
    /// whose geometry is not currently resolvable are skipped silently and will
    /// be reconsidered on the next layout notification.
    pub fn on_visible_lines_changed(&mut self, lines: &[Line]) -> Result<(), DetectError> {
        if !self.surface.is_live() {
            return Ok(());
        }
        for line in lines {
            self.decorate_line(line)?;
        }
        Ok(())
    }

    /// Replace the style configuration and repaint the whole viewport.
    ///
    /// The repaint completes before this returns, so any later notification
    /// already sees a decoration set painted with the new styles.
    pub fn update_styles(&mut self, styles: StyleConfig) -> Result<(), DetectError> {
        debug!(target: "trailspace::manager", "update_styles");
        self.styles = styles;
        self.redraw_all()
    }

    /// Clear every decoration, then repaint all currently visible lines.
    ///
    /// This is the only removal path; incremental notifications never take
    /// individual decorations away.
    pub fn redraw_all(&mut self) -> Result<(), DetectError> {
        if !self.surface.is_live() {
            return Ok(());
        }
        self.surface.remove_all_decorations();
        let lines = self.surface.visible_lines();
        debug!(target: "trailspace::manager", lines = lines.len(), "redraw_all");
        for line in &lines {
            self.decorate_line(line)?;
        }
        Ok(())
    }

    fn decorate_line(&mut self, line: &Line) -> Result<(), DetectError> {
        let runs = detect_trailing_runs(&line.text, line.start, line.end)?;
        if runs.is_empty() {
            return Ok(());
        }
        trace!(
            target: "trailspace::manager",
            line_start = line.start,
            runs = runs.len(),
            "decorate_line"
        );
        for run in runs {
            let Some(region) = self.surface.resolve_geometry(run.span) else {
                continue;
            };
            self.surface.add_decoration(Decoration {
                span: run.span,
                kind: run.kind,
                region,
                style: *self.styles.style_for(run.kind),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;
    use crate::style::{BoxStyle, Color};
    use crate::viewport::Region;

    const CELL: f32 = 8.0;

    /// Monospace in-memory viewport: row `i` of `lines` renders at `y = i`.
    struct FakeViewport {
        lines: Vec<Line>,
        decorations: Vec<Decoration>,
        live: bool,
    }

    impl FakeViewport {
        fn new(lines: Vec<Line>) -> Self {
            Self {
                lines,
                decorations: Vec::new(),
                live: true,
            }
        }
    }

    impl ViewportHost for FakeViewport {
        fn visible_lines(&self) -> Vec<Line> {
            self.lines.clone()
        }

        fn resolve_geometry(&self, span: Span) -> Option<Region> {
            let (row, line) = self
                .lines
                .iter()
                .enumerate()
                .find(|(_, l)| l.start <= span.start && span.end <= l.end)?;
            Some(Region::new(
                (span.start - line.start) as f32 * CELL,
                row as f32 * CELL,
                span.len() as f32 * CELL,
                CELL,
            ))
        }

        fn add_decoration(&mut self, decoration: Decoration) {
            self.decorations.push(decoration);
        }

        fn remove_all_decorations(&mut self) {
            self.decorations.clear();
        }

        fn is_live(&self) -> bool {
            self.live
        }
    }

    fn lines_from(texts: &[&str]) -> Vec<Line> {
        // Lay lines out back to back, +1 char offset per line break.
        let mut offset = 0;
        texts
            .iter()
            .map(|text| {
                let line = Line::new(offset, *text);
                offset = line.end + 1;
                line
            })
            .collect()
    }

    #[test]
    fn test_incremental_pass_is_additive() {
        let lines = lines_from(&["foo  ", "bar", "baz\t"]);
        let mut manager = DecorationManager::new(FakeViewport::new(lines.clone()));

        manager.on_visible_lines_changed(&lines[..1]).unwrap();
        assert_eq!(manager.surface().decorations.len(), 1);
        assert_eq!(manager.surface().decorations[0].span, Span::new(3, 5));

        // A later notification for another line leaves the first decoration alone.
        manager.on_visible_lines_changed(&lines[2..]).unwrap();
        let spans: Vec<Span> = manager.surface().decorations.iter().map(|d| d.span).collect();
        assert_eq!(spans, vec![Span::new(3, 5), Span::new(13, 14)]);
    }

    #[test]
    fn test_redraw_all_clears_then_repaints() {
        let lines = lines_from(&["a ", "b\t", "   ", "c"]);
        let mut manager = DecorationManager::new(FakeViewport::new(lines.clone()));

        // Paint the same lines twice incrementally, then redraw.
        manager.on_visible_lines_changed(&lines).unwrap();
        manager.on_visible_lines_changed(&lines).unwrap();
        assert_eq!(manager.surface().decorations.len(), 4);

        manager.redraw_all().unwrap();
        let spans: Vec<Span> = manager.surface().decorations.iter().map(|d| d.span).collect();
        assert_eq!(spans, vec![Span::new(1, 2), Span::new(4, 5)]);
    }

    #[test]
    fn test_unresolvable_geometry_is_skipped() {
        let lines = lines_from(&["foo  "]);
        // The host lays out nothing: every geometry lookup misses.
        let mut manager = DecorationManager::new(FakeViewport::new(Vec::new()));

        manager.on_visible_lines_changed(&lines).unwrap();
        assert!(manager.surface().decorations.is_empty());
    }

    #[test]
    fn test_dead_viewport_is_a_no_op() {
        let lines = lines_from(&["foo  "]);
        let mut host = FakeViewport::new(lines.clone());
        host.live = false;
        let mut manager = DecorationManager::new(host);

        manager.on_visible_lines_changed(&lines).unwrap();
        manager.redraw_all().unwrap();
        manager.update_styles(StyleConfig::classic()).unwrap();
        assert!(manager.surface().decorations.is_empty());
    }

    #[test]
    fn test_styles_select_by_kind() {
        let lines = lines_from(&["x\t  "]);
        let mut manager = DecorationManager::new(FakeViewport::new(lines.clone()));
        manager.on_visible_lines_changed(&lines).unwrap();

        let decorations = &manager.surface().decorations;
        assert_eq!(decorations.len(), 2);
        let config = StyleConfig::default();
        for d in decorations {
            assert_eq!(&d.style, config.style_for(d.kind));
        }
    }

    #[test]
    fn test_update_styles_repaints_with_new_styles() {
        let lines = lines_from(&["foo  "]);
        let mut manager = DecorationManager::new(FakeViewport::new(lines.clone()));
        manager.on_visible_lines_changed(&lines).unwrap();

        let loud = BoxStyle::new(Color::rgb(0xFF, 0, 0), Color::rgb(0, 0xFF, 0), 2.0);
        let config = StyleConfig::default().with_style(crate::WhitespaceKind::Space, loud);
        manager.update_styles(config).unwrap();

        assert_eq!(manager.styles(), &config);
        assert_eq!(manager.surface().decorations.len(), 1);
        // Nothing painted before the update survived it.
        assert_eq!(manager.surface().decorations[0].style, loud);
    }

    #[test]
    fn test_detection_errors_propagate() {
        let bogus = Line {
            start: 10,
            end: 5,
            text: String::from("oops"),
        };
        let mut manager = DecorationManager::new(FakeViewport::new(Vec::new()));
        let err = manager.on_visible_lines_changed(&[bogus]).unwrap_err();
        assert_eq!(err, DetectError::InvalidSpan { start: 10, end: 5 });
    }
}
