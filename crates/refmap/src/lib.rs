//! refmap - Identity-Keyed Object Registry
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate maps shared objects to opaque [`Token`]s and back. It fills the
//! role of an identity-keyed weak reference table in places where no such
//! facility is available:
//!
//! - `ref_object(&obj)` returns a token for `obj`, the same one every time.
//! - `deref(token)` returns the exact object that produced the token.
//! - Objects are compared by identity (the allocation they live in), never by
//!   value. Two equal strings in two `Rc`s get two tokens.
//!
//! ```
//! use refmap::RefMap;
//! use std::rc::Rc;
//!
//! let mut map = RefMap::new();
//! let obj = Rc::new(vec![1, 2, 3]);
//!
//! let token = map.ref_object(&obj);
//! assert_eq!(map.ref_object(&obj), token);
//! assert!(Rc::ptr_eq(map.deref(token).unwrap(), &obj));
//! ```
//!
//! RETENTION:
//! ----------
//! Registered objects are held strongly. Nothing is ever reclaimed
//! automatically, which means every registry leaks what it is given until it
//! is dropped or the entry is explicitly released. Keep registries scoped to
//! a namespace with a bounded lifetime.
//!
//! THREADING:
//! ----------
//! [`RefMap`] is a plain single-threaded structure. [`SharedRefMap`] wraps it
//! in one mutex for use across threads. There is no global registry; every
//! instance is constructed and passed around explicitly.
//!
//! LOGGING:
//! --------
//! Emits through the `log` facade and never installs a logger itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod identity;
pub mod registry;
pub mod shared;
pub mod stats;
pub mod token;

// Re-export main types
pub use config::RefMapConfig;
pub use error::{RefMapError, Result};
pub use identity::{ObjectId, Referent};
pub use registry::RefMap;
pub use shared::SharedRefMap;
pub use stats::RefMapStats;
pub use token::Token;

/// refmap version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
