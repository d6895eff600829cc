//! Opaque tokens handed out by the registry.
//!
//! A [`Token`] has no structure a caller can inspect. Equality is the only
//! meaningful operation on it. Every token comes from a single process-wide
//! counter, so two tokens compare equal only when one is a copy of the other.
//! This holds across registries, which lets a token minted for one registry
//! be passed as a hint to another without ever aliasing a token that registry
//! minted itself.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next token id to hand out. Zero is never issued.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Opaque handle that resolves back to a registered object.
///
/// Tokens are unique for the lifetime of the process and are never reused,
/// not even after the entry they named has been released.
///
/// # Example
///
/// ```
/// use refmap::Token;
///
/// let a = Token::new();
/// let b = Token::new();
/// let copy = a;
/// assert_ne!(a, b);
/// assert_eq!(a, copy);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    id: NonZeroU64,
}

impl Token {
    /// Mint a fresh token that has never been issued before in this process.
    ///
    /// # Panics
    ///
    /// Panics if the 64-bit counter is exhausted.
    pub fn new() -> Self {
        let id = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        if id == u64::MAX {
            panic!("Token overflow! Process exhausted the token space.");
        }
        match NonZeroU64::new(id) {
            Some(id) => Token { id },
            None => panic!("Token counter wrapped around to zero."),
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(#{})", self.id)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(#{})", self.id)
    }
}

static_assertions::assert_impl_all!(Token: Send, Sync, Copy);
static_assertions::assert_eq_size!(Token, Option<Token>);
