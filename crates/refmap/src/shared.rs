//! Thread-shareable registry.
//!
//! [`SharedRefMap`] puts a [`RefMap`] behind one `parking_lot::Mutex`. A
//! single lock covers both directions of the map, so the lookup, collision
//! check and insert inside `ref` happen as one step and concurrent callers
//! cannot break token or object uniqueness.
//!
//! # Example
//!
//! ```
//! use refmap::SharedRefMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(SharedRefMap::new());
//! let obj = Arc::new(42u64);
//!
//! let tokens: Vec<_> = (0..4)
//!     .map(|_| {
//!         let map = Arc::clone(&map);
//!         let obj = Arc::clone(&obj);
//!         thread::spawn(move || map.ref_object(&obj))
//!     })
//!     .map(|h| h.join().unwrap())
//!     .collect();
//!
//! assert!(tokens.iter().all(|t| *t == tokens[0]));
//! assert_eq!(map.len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::RefMapConfig;
use crate::error::Result;
use crate::identity::Referent;
use crate::registry::RefMap;
use crate::stats::RefMapStats;
use crate::token::Token;

/// A [`RefMap`] that can be shared between threads
///
/// Same semantics as `RefMap`, with `&self` methods. `deref` hands back a
/// clone of the handle because the lock is released before returning.
pub struct SharedRefMap<R> {
    inner: Mutex<RefMap<R>>,
}

impl<R: Referent> SharedRefMap<R> {
    /// Create an empty shared registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(RefMapConfig::default())
    }

    /// Create an empty shared registry with the given configuration
    pub fn with_config(config: RefMapConfig) -> Self {
        Self::from_map(RefMap::with_config(config))
    }

    /// Wrap an existing registry, keeping its entries
    pub fn from_map(map: RefMap<R>) -> Self {
        Self {
            inner: Mutex::new(map),
        }
    }

    /// See [`RefMap::ref_object`]
    pub fn ref_object(&self, object: &R) -> Token {
        self.inner.lock().ref_object(object)
    }

    /// See [`RefMap::ref_with_hint`]
    pub fn ref_with_hint(&self, object: &R, hint: Token) -> Result<Token> {
        self.inner.lock().ref_with_hint(object, hint)
    }

    /// See [`RefMap::ref_with`]
    pub fn ref_with(&self, object: &R, hint: Option<Token>) -> Result<Token> {
        self.inner.lock().ref_with(object, hint)
    }

    /// Clone of the handle bound to `token`, if any
    pub fn deref(&self, token: Token) -> Option<R> {
        self.inner.lock().deref(token).cloned()
    }

    /// See [`RefMap::token_of`]
    pub fn token_of(&self, object: &R) -> Option<Token> {
        self.inner.lock().token_of(object)
    }

    /// See [`RefMap::contains_token`]
    pub fn contains_token(&self, token: Token) -> bool {
        self.inner.lock().contains_token(token)
    }

    /// See [`RefMap::release`]
    pub fn release(&self, token: Token) -> Option<R> {
        self.inner.lock().release(token)
    }

    /// Unwrap into the inner registry
    pub fn into_inner(self) -> RefMap<R> {
        self.inner.into_inner()
    }
}

impl<R> SharedRefMap<R> {
    /// Number of live entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Snapshot of the registry counters
    pub fn stats(&self) -> RefMapStats {
        self.inner.lock().stats()
    }
}

impl<R: Referent> Default for SharedRefMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Referent> From<RefMap<R>> for SharedRefMap<R> {
    fn from(map: RefMap<R>) -> Self {
        Self::from_map(map)
    }
}

impl<R> fmt::Debug for SharedRefMap<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(map) => f.debug_tuple("SharedRefMap").field(&*map).finish(),
            None => f.write_str("SharedRefMap(<locked>)"),
        }
    }
}

static_assertions::assert_impl_all!(SharedRefMap<Arc<u64>>: Send, Sync);
static_assertions::assert_not_impl_any!(SharedRefMap<std::rc::Rc<u64>>: Send, Sync);
