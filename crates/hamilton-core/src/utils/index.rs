// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strongly Typed Indices
//!
//! `TypedIndex<T>` wraps a `usize` and carries a tag type so that indices of
//! different index spaces cannot be mixed up. It is `#[repr(transparent)]`
//! and compiles down to a plain `usize`.
//!
//! ```rust
//! use hamilton_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct CityTag;
//! impl TypedIndexTag for CityTag { const NAME: &'static str = "CityIndex"; }
//!
//! type CityIndex = TypedIndex<CityTag>;
//! let city = CityIndex::new(3);
//! assert_eq!(city.get(), 3);
//! assert_eq!(format!("{}", city), "CityIndex(3)");
//! ```

/// Names an index space for `Display` and `Debug` output.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index bound to the index space described by `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns `true` if this is the index `0`.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(index: TypedIndex<T>) -> Self {
        index.index
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIndexTag for TestTag {
        const NAME: &'static str = "TestIndex";
    }

    type TestIndex = TypedIndex<TestTag>;

    #[test]
    fn test_new_get_and_conversions() {
        let index = TestIndex::new(7);
        assert_eq!(index.get(), 7);
        assert!(!index.is_zero());
        assert!(TestIndex::new(0).is_zero());

        let from_usize: TestIndex = 7usize.into();
        assert_eq!(from_usize, index);

        let back: usize = index.into();
        assert_eq!(back, 7);
    }

    #[test]
    fn test_ordering_follows_inner_value() {
        let mut indices = vec![TestIndex::new(3), TestIndex::new(1), TestIndex::new(2)];
        indices.sort();
        let raw: Vec<usize> = indices.iter().map(|i| i.get()).collect();
        assert_eq!(raw, vec![1, 2, 3]);
    }

    #[test]
    fn test_display_and_debug_use_tag_name() {
        let index = TestIndex::new(42);
        assert_eq!(format!("{}", index), "TestIndex(42)");
        assert_eq!(format!("{:?}", index), "TestIndex(42)");
    }
}
