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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` to prevent mixing indices from
//! different domains (e.g., pockets vs. slots vs. pages). `TypedIndex<T>`
//! carries a tag type `T: TypedIndexTag` that encodes intent at the type
//! level, while compiling down to a transparent `usize` (no runtime
//! overhead).
//!
//! ## Motivation
//!
//! An album is navigated through three nested index spaces at once: the page
//! within a book, the slot within a page, and the pocket within a slot. Raw
//! `usize` invites accidental swaps (popping pocket 2 of slot 0 instead of
//! pocket 0 of slot 2) that type-checked tags rule out for free.
//!
//! ## Usage
//!
//! ```rust
//! use numisma_core::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone)]
//! struct PocketTag;
//! impl TypedIndexTag for PocketTag { const NAME: &'static str = "PocketIndex"; }
//!
//! type PocketIndex = TypedIndex<PocketTag>;
//! let p = PocketIndex::new(3);
//! assert_eq!(p.get(), 3);
//! assert_eq!(format!("{}", p), "PocketIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
///
/// # Examples
///
/// ```rust
/// # use numisma_core::index::TypedIndexTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct RowTag;
///
/// impl TypedIndexTag for RowTag {
///     const NAME: &'static str = "RowIndex";
/// }
/// ```
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
///
/// This struct wraps a `usize` index and uses a phantom type parameter `T`
/// to provide type safety and prevent mixing indices of different domains.
///
/// # Examples
///
/// ```rust
/// # use numisma_core::index::{TypedIndex, TypedIndexTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct RowTag;
///
/// impl TypedIndexTag for RowTag {
///    const NAME: &'static str = "RowIndex";
/// }
///
/// type RowIndex = TypedIndex<RowTag>;
///
/// let index = RowIndex::new(5);
/// assert_eq!(index.get(), 5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct RowTag;
    ///
    /// impl TypedIndexTag for RowTag {
    ///    const NAME: &'static str = "RowIndex";
    /// }
    ///
    /// let index = TypedIndex::<RowTag>::new(5);
    /// assert_eq!(index.get(), 5);
    /// ```
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct RowTag;
    ///
    /// impl TypedIndexTag for RowTag {
    ///    const NAME: &'static str = "RowIndex";
    /// }
    ///
    /// let index = TypedIndex::<RowTag>::new(5);
    /// assert_eq!(index.get(), 5);
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Checks if the index is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct RowTag;
    ///
    /// impl TypedIndexTag for RowTag {
    ///     const NAME: &'static str = "RowIndex";
    /// }
    ///
    /// let index = TypedIndex::<RowTag>::new(0);
    /// assert!(index.is_zero());
    /// let index = TypedIndex::<RowTag>::new(5);
    /// assert!(!index.is_zero());
    /// ```
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }

    /// Returns the index decreased by one, or `None` if it is already zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_core::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct RowTag;
    ///
    /// impl TypedIndexTag for RowTag {
    ///     const NAME: &'static str = "RowIndex";
    /// }
    ///
    /// let index = TypedIndex::<RowTag>::new(1);
    /// assert_eq!(index.checked_prev(), Some(TypedIndex::new(0)));
    /// assert_eq!(index.checked_prev().unwrap().checked_prev(), None);
    /// ```
    #[inline]
    pub const fn checked_prev(&self) -> Option<Self> {
        match self.index.checked_sub(1) {
            Some(prev) => Some(Self::new(prev)),
            None => None,
        }
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

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

macro_rules! impl_index_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T> std::ops::$trait_name<usize> for TypedIndex<T> {
            type Output = Self;

            fn $method(self, rhs: usize) -> Self::Output {
                Self::new(self.index $op rhs)
            }
        }
        impl<T> std::ops::$assign_trait<usize> for TypedIndex<T> {
            fn $assign_method(&mut self, rhs: usize) {
                self.index = self.index $op rhs;
            }
        }
    };
}

impl_index_op!(Add, add, AddAssign, add_assign, +);
impl_index_op!(Sub, sub, SubAssign, sub_assign, -);
