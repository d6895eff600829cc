//! Object identity for registered handles.
//!
//! The registry keys objects by *where they live*, not by what they contain.
//! Two `Rc`s pointing at the same allocation are the same object; two
//! allocations holding equal values are not.

use std::rc::Rc;
use std::sync::Arc;

/// Address of a shared allocation, with any pointer metadata stripped.
///
/// Only meaningful while something keeps the allocation alive. The registry
/// guarantees that by holding a clone of the handle for every live entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Identity of the allocation behind `ptr`.
    #[inline]
    pub fn from_ptr<T: ?Sized>(ptr: *const T) -> Self {
        ObjectId(ptr.cast::<()>() as usize)
    }
}

/// A cloneable handle the registry can key by identity.
///
/// Implementations must return the same [`ObjectId`] for every clone of a
/// handle, and distinct ids for handles to distinct live objects, for as long
/// as at least one clone is alive.
pub trait Referent: Clone {
    /// Identity of the object this handle points at.
    fn identity(&self) -> ObjectId;
}

impl<T: ?Sized> Referent for Rc<T> {
    #[inline]
    fn identity(&self) -> ObjectId {
        ObjectId::from_ptr(Rc::as_ptr(self))
    }
}

impl<T: ?Sized> Referent for Arc<T> {
    #[inline]
    fn identity(&self) -> ObjectId {
        ObjectId::from_ptr(Arc::as_ptr(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let a = Rc::new(String::from("x"));
        let b = Rc::clone(&a);
        assert_eq!(a.identity(), b.identity());

        let c = Arc::new(7u32);
        let d = Arc::clone(&c);
        assert_eq!(c.identity(), d.identity());
    }

    #[test]
    fn test_equal_values_differ_in_identity() {
        let a = Rc::new(vec![1, 2, 3]);
        let b = Rc::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn test_zero_sized_values_differ_in_identity() {
        let a = Rc::new(());
        let b = Rc::new(());
        assert_ne!(a.identity(), b.identity());

        let c = Arc::new(());
        let d = Arc::new(());
        assert_ne!(c.identity(), d.identity());
    }

    #[test]
    fn test_unsized_handles() {
        let s: Rc<str> = Rc::from("hello");
        let t = Rc::clone(&s);
        assert_eq!(s.identity(), t.identity());

        let u: Arc<[u8]> = Arc::from(vec![1u8, 2, 3]);
        let v: Arc<[u8]> = Arc::from(vec![1u8, 2, 3]);
        assert_ne!(u.identity(), v.identity());
    }

    #[test]
    fn test_trait_object_identity_ignores_vtable() {
        let a: Rc<dyn std::fmt::Debug> = Rc::new(5i32);
        let b = Rc::clone(&a);
        assert_eq!(a.identity(), b.identity());
    }
}
