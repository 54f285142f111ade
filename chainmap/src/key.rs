//! Capability bound for map keys.
//!
//! A key must hash and compare consistently: `a == b` implies
//! `hash(a) == hash(b)` and `a.is_null() == b.is_null()`. Keys that break
//! this contract leave the map in an unspecified (but memory safe) state,
//! exactly as with any other hash based container.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A type that can be used as a key of a [`ChainedHashMap`](crate::ChainedHashMap).
///
/// Null keys are legal. They are only equal to other null keys and always
/// live in bucket 0. `Option<T>` reports `None` as null; every other provided
/// implementation is never null. Custom key types opt in with an empty impl:
///
/// ```
/// use chainmap::MapKey;
///
/// #[derive(Hash, PartialEq, Eq)]
/// struct UserId(u32);
///
/// impl MapKey for UserId {}
/// ```
pub trait MapKey: Hash + Eq {
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_map_key {
    ($($t:ty),* $(,)?) => {
        $(impl MapKey for $t {})*
    };
}

impl_map_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str, String,
);

impl<T: Hash + Eq> MapKey for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Hash + Eq> MapKey for [T] {}

impl<T: Hash + Eq> MapKey for Vec<T> {}

impl<T: Hash + Eq, const N: usize> MapKey for [T; N] {}

impl<A: Hash + Eq, B: Hash + Eq> MapKey for (A, B) {}

impl<A: Hash + Eq, B: Hash + Eq, C: Hash + Eq> MapKey for (A, B, C) {}

impl<T: MapKey + ?Sized> MapKey for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: MapKey + ?Sized> MapKey for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: MapKey + ?Sized> MapKey for Rc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: MapKey + ?Sized> MapKey for Arc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}
