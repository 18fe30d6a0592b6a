// std imports
use std::iter::Cloned;
use std::slice;
use std::str::Chars;

// ---

/// A finite sequence that can be traversed forward from its beginning.
///
/// This is the only capability the matcher requires from its inputs: a
/// cloneable cursor positioned at the first element. Cloning a cursor is the
/// backtracking primitive, so it is expected to be cheap, as it is for all
/// the standard container cursors.
///
/// Implementations are provided for string and slice references. For `&str`
/// the element type is `char`, so matching is defined over characters rather
/// than bytes. Other sequence shapes can be matched directly through
/// [`matches_iter`](crate::matches_iter), which accepts any cloneable
/// iterator.
pub trait Sequence {
    /// The element type the matcher compares.
    type Item;

    /// A cloneable forward cursor over the elements.
    type Cursor: Iterator<Item = Self::Item> + Clone;

    /// Returns a cursor positioned at the first element.
    fn cursor(self) -> Self::Cursor;
}

impl<'a> Sequence for &'a str {
    type Item = char;
    type Cursor = Chars<'a>;

    #[inline]
    fn cursor(self) -> Self::Cursor {
        self.chars()
    }
}

impl<'a> Sequence for &'a String {
    type Item = char;
    type Cursor = Chars<'a>;

    #[inline]
    fn cursor(self) -> Self::Cursor {
        self.chars()
    }
}

impl<'a, T: Clone> Sequence for &'a [T] {
    type Item = T;
    type Cursor = Cloned<slice::Iter<'a, T>>;

    #[inline]
    fn cursor(self) -> Self::Cursor {
        self.iter().cloned()
    }
}

impl<'a, T: Clone, const N: usize> Sequence for &'a [T; N] {
    type Item = T;
    type Cursor = Cloned<slice::Iter<'a, T>>;

    #[inline]
    fn cursor(self) -> Self::Cursor {
        self.iter().cloned()
    }
}

impl<'a, T: Clone> Sequence for &'a Vec<T> {
    type Item = T;
    type Cursor = Cloned<slice::Iter<'a, T>>;

    #[inline]
    fn cursor(self) -> Self::Cursor {
        self.iter().cloned()
    }
}

// ---
