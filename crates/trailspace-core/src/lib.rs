#![warn(missing_docs)]
//! Trailspace Core - Headless Trailing-Whitespace Decoration Engine
//!
//! # Overview
//!
//! `trailspace-core` scans the visible lines of an editor viewport and computes
//! a styled box around every run of trailing whitespace (consecutive spaces,
//! consecutive tabs) at the end of a line that also contains real content.
//! Blank and empty lines stay undecorated. It does not involve text editing,
//! highlighting, or layout, assuming the hosting editor provides line text,
//! span geometry, and a decoration surface through a narrow trait.
//!
//! # Core Features
//!
//! - **Run Detection**: maximal same-character trailing space/tab runs, scanned
//!   end-first, pure and idempotent
//! - **Decoration Reconciliation**: additive incremental updates for new or
//!   reformatted lines, full clear-and-repaint for style changes and redraws
//! - **Style Configuration**: per-kind fill/border box styles, swappable at
//!   runtime
//! - **Shared Styles**: an explicit observer registry fans a shared config out
//!   to every bound viewport
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  StyleRegistry (shared config fan-out)      │  ← Many viewports
//! ├─────────────────────────────────────────────┤
//! │  DecorationManager (reconciliation)         │  ← One per viewport
//! ├─────────────────────────────────────────────┤
//! │  detect_trailing_runs (pure detection)      │  ← Per line
//! ├─────────────────────────────────────────────┤
//! │  ViewportHost trait (host contracts)        │  ← Provided by the editor
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Detecting runs
//!
//! ```rust
//! use trailspace_core::{detect_trailing_runs, WhitespaceKind};
//!
//! let runs = detect_trailing_runs("fn main() {}  ", 0, 14).unwrap();
//! assert_eq!(runs.len(), 1);
//! assert_eq!(runs[0].kind, WhitespaceKind::Space);
//! assert_eq!((runs[0].span.start, runs[0].span.end), (12, 14));
//! ```
//!
//! ## Driving a viewport
//!
//! ```rust
//! use trailspace_core::{
//!     Decoration, DecorationManager, Line, Region, Span, StyleConfig, ViewportHost,
//! };
//!
//! struct ConsoleViewport {
//!     lines: Vec<Line>,
//!     decorations: Vec<Decoration>,
//! }
//!
//! impl ViewportHost for ConsoleViewport {
//!     fn visible_lines(&self) -> Vec<Line> {
//!         self.lines.clone()
//!     }
//!     fn resolve_geometry(&self, span: Span) -> Option<Region> {
//!         let row = self.lines.iter().position(|l| l.span().contains(span.start))?;
//!         Some(Region::new(span.start as f32, row as f32, span.len() as f32, 1.0))
//!     }
//!     fn add_decoration(&mut self, decoration: Decoration) {
//!         self.decorations.push(decoration);
//!     }
//!     fn remove_all_decorations(&mut self) {
//!         self.decorations.clear();
//!     }
//! }
//!
//! let host = ConsoleViewport {
//!     lines: vec![Line::new(0, "let x = 1;  ")],
//!     decorations: Vec::new(),
//! };
//! let mut manager = DecorationManager::new(host);
//! manager.redraw_all().unwrap();
//! assert_eq!(manager.surface().decorations.len(), 1);
//!
//! manager.update_styles(StyleConfig::classic()).unwrap();
//! assert_eq!(manager.surface().decorations[0].style, StyleConfig::classic().spaces);
//! ```
//!
//! # Module Description
//!
//! - [`span`] - half-open character-offset spans
//! - [`detect`] - trailing-whitespace run detection
//! - [`style`] - colors, box styles, and the per-kind style configuration
//! - [`viewport`] - the host contracts (lines, geometry, decoration surface)
//! - [`manager`] - per-viewport decoration reconciliation
//! - [`registry`] - shared style configuration with observer fan-out
//!
//! # Concurrency Model
//!
//! Single-threaded and reactive: every entry point runs to completion
//! synchronously on whatever thread the host delivers its layout notifications
//! on, and notifications are processed strictly in delivery order. The engine
//! spawns no threads, performs no I/O, and suspends nowhere.

pub mod detect;
pub mod manager;
pub mod registry;
pub mod span;
pub mod style;
pub mod viewport;

pub use detect::{DetectError, WhitespaceKind, WhitespaceRun, detect_trailing_runs};
pub use manager::DecorationManager;
pub use registry::{StyleChangeCallback, StyleRegistry, SubscriberId};
pub use span::Span;
pub use style::{
    BoxStyle, Color, DEFAULT_BORDER_WIDTH, DEFAULT_SPACES_BORDER, DEFAULT_SPACES_FILL,
    DEFAULT_TABS_BORDER, DEFAULT_TABS_FILL, StyleConfig,
};
pub use viewport::{Decoration, Line, Region, ViewportHost};
