//! Nil detection for optional chains
//!
//! An optional chain skips every assertion when its value is nil. What "nil"
//! means is decided per type by [`Nullable`].

use std::rc::Rc;
use std::sync::Arc;

/// Types with a nil state.
///
/// - `Option<T>`: `None`
/// - `serde_json::Value`: `Null`
/// - `()`: always nil
pub trait Nullable {
    /// Returns true if the value is nil.
    fn is_nil(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for () {
    #[inline]
    fn is_nil(&self) -> bool {
        true
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}
