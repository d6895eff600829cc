//! Configuration Module - Registry Tuning Parameters
//!
//! A registry never frees entries on its own, so the only knobs are how it is
//! sized up front, what it calls itself in logs, and when it should complain
//! about how much it is holding on to.

use std::borrow::Cow;

/// Default label used in log messages
pub const DEFAULT_LABEL: &str = "refmap";

/// Default live-entry count at which a retention warning is logged
pub const DEFAULT_RETENTION_WARNING: usize = 10_000;

/// Configuration for a [`RefMap`](crate::RefMap)
///
/// # Examples
///
/// ```rust
/// use refmap::{RefMap, RefMapConfig};
/// use std::rc::Rc;
///
/// let config = RefMapConfig::default()
///     .with_label("widgets")
///     .with_capacity(64)
///     .with_retention_warning(None);
///
/// let map: RefMap<Rc<u32>> = RefMap::with_config(config);
/// assert_eq!(map.config().label, "widgets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefMapConfig {
    /// Number of entries to reserve in both directions up front
    ///
    /// Default: 0
    pub initial_capacity: usize,

    /// Name of the registry in log output
    ///
    /// Useful when one process keeps a registry per namespace.
    /// Default: "refmap"
    pub label: Cow<'static, str>,

    /// Live-entry count at which a warning is logged
    ///
    /// Registered objects are retained until explicitly released. Reaching
    /// this count logs one warning; it is re-armed once the count drops
    /// below the threshold again. `None` disables the warning.
    ///
    /// Default: Some(10_000)
    pub retention_warning: Option<usize>,
}

impl RefMapConfig {
    /// Set the initial capacity
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the log label
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Set or disable the retention warning threshold
    pub fn with_retention_warning(mut self, threshold: Option<usize>) -> Self {
        self.retention_warning = threshold;
        self
    }
}

impl Default for RefMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            label: Cow::Borrowed(DEFAULT_LABEL),
            retention_warning: Some(DEFAULT_RETENTION_WARNING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RefMapConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.label, DEFAULT_LABEL);
        assert_eq!(config.retention_warning, Some(DEFAULT_RETENTION_WARNING));
    }

    #[test]
    fn test_builder_helpers() {
        let config = RefMapConfig::default()
            .with_capacity(32)
            .with_label(String::from("nodes"))
            .with_retention_warning(Some(5));

        assert_eq!(config.initial_capacity, 32);
        assert_eq!(config.label, "nodes");
        assert_eq!(config.retention_warning, Some(5));
    }
}
