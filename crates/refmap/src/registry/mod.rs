//! The reference registry.
//!
//! [`RefMap`] binds shared handles to opaque [`Token`]s in both directions:
//!
//! ```text
//!   by_object: ObjectId ──► Token        (forward: "what is this object's token?")
//!   by_token:  Token    ──► R            (reverse: "which object is this token?")
//! ```
//!
//! Both maps always hold the same set of entries. The reverse map owns a clone
//! of every registered handle, which is what keeps the allocation, and thus
//! its [`ObjectId`], stable for the lifetime of the entry.
//!
//! # Retention
//!
//! Entries are never dropped automatically. A registered object stays alive
//! for as long as the registry does, even after every other handle to it is
//! gone. This is the price of tracking identity without weak references: use
//! one registry per namespace with a bounded lifetime, and watch for the
//! retention warning (see [`RefMapConfig::retention_warning`]).
//!
//! # Example
//!
//! ```
//! use refmap::RefMap;
//! use std::rc::Rc;
//!
//! let mut map = RefMap::new();
//! let a = Rc::new("a");
//! let b = Rc::new("b");
//!
//! let ta = map.ref_object(&a);
//! let tb = map.ref_object(&b);
//!
//! assert_eq!(map.ref_object(&a), ta);
//! assert_ne!(ta, tb);
//! assert!(Rc::ptr_eq(map.deref(ta).unwrap(), &a));
//! ```

use std::cell::Cell;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::config::RefMapConfig;
use crate::error::{RefMapError, Result};
use crate::identity::{ObjectId, Referent};
use crate::stats::RefMapStats;
use crate::token::Token;


/// Monotonic counters behind [`RefMapStats`]
#[derive(Debug, Default)]
struct Counters {
    minted: usize,
    hinted: usize,
    hits: usize,
    collisions: usize,
    released: usize,
    misses: Cell<usize>,
}

/// Identity-keyed bidirectional map between objects and tokens
///
/// `R` is the handle type, usually `Rc<T>` or `Arc<T>`. Objects are compared
/// by identity, never by value.
///
/// This type is single-threaded: mutation goes through `&mut self`. Use
/// [`SharedRefMap`](crate::SharedRefMap) to share one registry across threads.
pub struct RefMap<R> {
    by_object: FxHashMap<ObjectId, Token>,
    by_token: FxHashMap<Token, R>,
    config: RefMapConfig,
    counters: Counters,
    retention_warned: bool,
}

impl<R: Referent> RefMap<R> {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(RefMapConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: RefMapConfig) -> Self {
        let capacity = config.initial_capacity;
        log::debug!("[{}] created registry (capacity {})", config.label, capacity);

        Self {
            by_object: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            by_token: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            config,
            counters: Counters::default(),
            retention_warned: false,
        }
    }

    /// Token for `object`, minting and binding a fresh one if it has none
    ///
    /// Repeated calls with the same object, or any clone of its handle,
    /// return the same token.
    pub fn ref_object(&mut self, object: &R) -> Token {
        let id = object.identity();
        if let Some(token) = self.existing(id) {
            return token;
        }

        let token = Token::new();
        debug_assert!(!self.by_token.contains_key(&token), "fresh token already bound");
        self.counters.minted += 1;
        self.bind(id, token, object);
        token
    }

    /// Token for `object`, binding `hint` if the object has none yet
    ///
    /// If the object is already registered its existing token is returned and
    /// `hint` is ignored, including when `hint` is that very token.
    ///
    /// # Errors
    ///
    /// [`RefMapError::TokenCollision`] if the object is unregistered and
    /// `hint` already resolves to another object. Nothing is modified.
    pub fn ref_with_hint(&mut self, object: &R, hint: Token) -> Result<Token> {
        let id = object.identity();
        if let Some(token) = self.existing(id) {
            return Ok(token);
        }

        if self.by_token.contains_key(&hint) {
            self.counters.collisions += 1;
            log::warn!("[{}] rejected hint: {} already refers to an object", self.config.label, hint);
            return Err(RefMapError::TokenCollision { token: hint });
        }

        self.counters.hinted += 1;
        self.bind(id, hint, object);
        Ok(hint)
    }

    /// [`ref_object`](Self::ref_object) or [`ref_with_hint`](Self::ref_with_hint),
    /// depending on whether a hint is given
    pub fn ref_with(&mut self, object: &R, hint: Option<Token>) -> Result<Token> {
        match hint {
            Some(hint) => self.ref_with_hint(object, hint),
            None => Ok(self.ref_object(object)),
        }
    }

    /// Object bound to `token`, or `None` if no live entry uses it
    pub fn deref(&self, token: Token) -> Option<&R> {
        let found = self.by_token.get(&token);
        if found.is_none() {
            self.counters.misses.set(self.counters.misses.get() + 1);
        }
        found
    }

    /// Token currently bound to `object`, without registering it
    pub fn token_of(&self, object: &R) -> Option<Token> {
        self.by_object.get(&object.identity()).copied()
    }

    /// Whether `token` currently resolves to an object
    pub fn contains_token(&self, token: Token) -> bool {
        self.by_token.contains_key(&token)
    }

    /// Remove the entry for `token`, returning the retained handle
    ///
    /// Releasing an unknown token is a no-op. Once released, the token never
    /// resolves again, and registering the same object afterwards mints a new,
    /// unrelated token.
    ///
    /// Only meant for explicit teardown and tests. It is not part of the
    /// identity contract this registry stands in for, where entries disappear
    /// when their object is collected.
    pub fn release(&mut self, token: Token) -> Option<R> {
        let object = self.by_token.remove(&token)?;
        self.by_object.remove(&object.identity());
        self.counters.released += 1;
        log::trace!("[{}] released {}", self.config.label, token);

        if let Some(threshold) = self.config.retention_warning {
            if self.by_token.len() < threshold {
                self.retention_warned = false;
            }
        }
        Some(object)
    }
}

impl<R> RefMap<R> {
    /// Number of live entries
    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }

    /// Configuration this registry was created with
    pub fn config(&self) -> &RefMapConfig {
        &self.config
    }

    /// Whether the retention warning has fired and not yet been re-armed
    pub fn retention_warning_issued(&self) -> bool {
        self.retention_warned
    }

    /// Snapshot of the registry counters
    pub fn stats(&self) -> RefMapStats {
        RefMapStats {
            live: self.by_token.len(),
            minted: self.counters.minted,
            hinted: self.counters.hinted,
            hits: self.counters.hits,
            collisions: self.counters.collisions,
            released: self.counters.released,
            misses: self.counters.misses.get(),
        }
    }

    fn existing(&mut self, id: ObjectId) -> Option<Token> {
        let token = self.by_object.get(&id).copied()?;
        self.counters.hits += 1;
        Some(token)
    }

    fn bind(&mut self, id: ObjectId, token: Token, object: &R)
    where
        R: Clone,
    {
        self.by_object.insert(id, token);
        self.by_token.insert(token, object.clone());
        log::trace!("[{}] bound {} ({} live)", self.config.label, token, self.by_token.len());

        if let Some(threshold) = self.config.retention_warning {
            let live = self.by_token.len();
            if !self.retention_warned && live >= threshold {
                self.retention_warned = true;
                log::warn!(
                    "[{}] {} objects retained; registered objects are kept alive until released",
                    self.config.label,
                    live
                );
            }
        }
    }
}

impl<R: Referent> Default for RefMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RefMap<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefMap")
            .field("label", &self.config.label)
            .field("len", &self.by_token.len())
            .finish_non_exhaustive()
    }
}
