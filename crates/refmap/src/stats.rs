//! Registry statistics

/// Snapshot of a registry's counters
///
/// Counters start at zero when the registry is created and are never reset.
///
/// # Examples
///
/// ```
/// use refmap::RefMap;
/// use std::rc::Rc;
///
/// let mut map = RefMap::new();
/// let obj = Rc::new("a");
/// map.ref_object(&obj);
/// map.ref_object(&obj);
///
/// let stats = map.stats();
/// assert_eq!(stats.live, 1);
/// assert_eq!(stats.minted, 1);
/// assert_eq!(stats.hits, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefMapStats {
    /// Number of live entries
    pub live: usize,
    /// Entries created with a token minted by the registry
    pub minted: usize,
    /// Entries created with a caller-supplied hint token
    pub hinted: usize,
    /// `ref` calls answered with an already-bound token
    pub hits: usize,
    /// `ref` calls rejected with a token collision
    pub collisions: usize,
    /// Entries removed through `release`
    pub released: usize,
    /// `deref` calls that found no entry
    pub misses: usize,
}

impl RefMapStats {
    /// Total number of successful `ref` calls
    pub fn refs(&self) -> usize {
        self.minted + self.hinted + self.hits
    }

    /// Fraction of successful `ref` calls that hit an existing entry
    ///
    /// Returns 0.0 before any `ref` call.
    pub fn hit_rate(&self) -> f64 {
        let total = self.refs();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
