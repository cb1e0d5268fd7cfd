use std::fmt;

/// Prefix-consumable input for parsers
///
/// An input is a view over a sequence of elements that can be peeked at and
/// narrowed from the front. Neither operation mutates the original value, and
/// every `rest()` is a suffix of the input it was taken from, so consumption
/// only ever moves forward.
///
/// Implemented for `&str` (elements are `char`s) and for slices of tokens.
pub trait Input: Clone {
    /// The type of elements this input yields
    type Element: Clone + PartialEq + fmt::Debug;

    /// Get the first element, or `None` when the input is exhausted
    fn first(&self) -> Option<Self::Element>;

    /// Everything after the first element
    ///
    /// An empty input stays empty.
    fn rest(&self) -> Self;

    /// Number of elements left in the input
    fn len(&self) -> usize;

    /// Check if the input is exhausted
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'code> Input for &'code str {
    type Element = char;

    fn first(&self) -> Option<char> {
        self.chars().next()
    }

    fn rest(&self) -> Self {
        let mut chars = (*self).chars();
        chars.next();
        chars.as_str()
    }

    // Measured in bytes: only ever compared against other suffixes of the
    // same string, where byte and char ordering agree.
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl<'code, T> Input for &'code [T]
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;

    fn first(&self) -> Option<T> {
        <[T]>::first(self).cloned()
    }

    fn rest(&self) -> Self {
        match (*self).split_first() {
            Some((_, rest)) => rest,
            None => *self,
        }
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
