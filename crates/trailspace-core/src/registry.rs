//! Shared style configuration with observer fan-out.
//!
//! Several viewports can share one style configuration (one options facility,
//! many open editors). The [`StyleRegistry`] is the explicitly constructed
//! object that holds that shared config and notifies each subscribed viewport
//! when it changes, so every bound manager repaints with the new styles. There
//! is no ambient global: whoever owns the registry passes it where it is
//! needed.
//!
//! All registration and notification happens on the single host notification
//! thread, so callbacks are plain `FnMut` values without `Send`/`Sync` bounds.
//!
//! # Example
//!
//! ```rust
//! use trailspace_core::{StyleConfig, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//! let id = registry.subscribe(Box::new(|config: &StyleConfig| {
//!     // Typically: manager.update_styles(*config)
//!     let _ = config;
//! }));
//!
//! registry.set_styles(StyleConfig::classic());
//! assert_eq!(registry.styles(), &StyleConfig::classic());
//! assert!(registry.unsubscribe(id));
//! ```

use crate::style::StyleConfig;
use tracing::debug;

/// Style change callback function type.
pub type StyleChangeCallback = Box<dyn FnMut(&StyleConfig)>;

/// Handle identifying one subscription, for unsubscribing on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Holds a shared [`StyleConfig`] and fans out changes to subscribers.
pub struct StyleRegistry {
    styles: StyleConfig,
    subscribers: Vec<(SubscriberId, StyleChangeCallback)>,
    next_id: u64,
}

impl StyleRegistry {
    /// Create a registry holding the default styles.
    pub fn new() -> Self {
        Self::with_styles(StyleConfig::default())
    }

    /// Create a registry holding an explicit initial configuration.
    pub fn with_styles(styles: StyleConfig) -> Self {
        Self {
            styles,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The currently held configuration.
    pub fn styles(&self) -> &StyleConfig {
        &self.styles
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register a callback, invoking it immediately with the current config.
    ///
    /// The immediate call is what seeds a freshly bound viewport with the
    /// shared styles, so a manager created after the config diverged from the
    /// defaults still paints consistently.
    pub fn subscribe(&mut self, mut callback: StyleChangeCallback) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        callback(&self.styles);
        self.subscribers.push((id, callback));
        id
    }

    /// Drop a subscription. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Replace the held configuration and notify every subscriber, in
    /// subscription order.
    pub fn set_styles(&mut self, styles: StyleConfig) {
        debug!(
            target: "trailspace::registry",
            subscribers = self.subscribers.len(),
            "set_styles"
        );
        self.styles = styles;
        for (_, callback) in &mut self.subscribers {
            callback(&styles);
        }
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
