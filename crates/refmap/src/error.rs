//! Error types for registry operations
//!
//! The registry has exactly one failure mode. Lookups and releases of unknown
//! tokens are expected outcomes and resolve to `None` instead of an error.

use thiserror::Error;

use crate::token::Token;

/// Error type for all registry operations
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use refmap::{RefMap, RefMapError};
///
/// let mut map = RefMap::new();
/// let first = Rc::new(1);
/// let token = map.ref_object(&first);
///
/// match map.ref_with_hint(&Rc::new(2), token) {
///     Err(RefMapError::TokenCollision { token: t }) => assert_eq!(t, token),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefMapError {
    /// Hint token already resolves to a different live object
    ///
    /// **When returned:** `ref_with_hint` on an unregistered object, with a
    /// hint that another object currently holds.
    ///
    /// **Recovery strategy:** The registry is unchanged. Retry without a hint
    /// to get a fresh token, or with a different hint.
    #[error("{token} already refers to an object")]
    TokenCollision {
        /// The hint that was already bound
        token: Token,
    },
}

impl RefMapError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RefMapError::TokenCollision { .. })
    }

    /// The token the failing operation was about
    pub fn token(&self) -> Token {
        match self {
            RefMapError::TokenCollision { token } => *token,
        }
    }
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RefMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message() {
        let token = Token::new();
        let err = RefMapError::TokenCollision { token };
        assert_eq!(err.to_string(), format!("{} already refers to an object", token));
    }

    #[test]
    fn test_collision_is_recoverable() {
        let token = Token::new();
        let err = RefMapError::TokenCollision { token };
        assert!(err.is_recoverable());
        assert_eq!(err.token(), token);
    }
}
