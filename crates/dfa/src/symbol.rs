use std::fmt;
use std::hash::Hash;

/// A common trait for the symbols that automata read. Algorithms sort and hash
/// alphabets, so the bounds are required here instead of on every usage.
pub trait Symbol: Ord + Hash + Eq + Clone + fmt::Display + fmt::Debug {
    /// Returns the i-th symbol of this type, used to generate alphabets.
    fn from_index(i: usize) -> Self;
}

impl Symbol for char {
    /// Yields `0` to `9` followed by `a` to `z`.
    fn from_index(i: usize) -> Self {
        let digit = u32::try_from(i).expect("Symbol index should fit in u32");
        char::from_digit(digit, 36).expect("Only 36 character symbols can be generated")
    }
}

impl Symbol for String {
    fn from_index(i: usize) -> Self {
        char::from_index(i).to_string()
    }
}

impl Symbol for u32 {
    fn from_index(i: usize) -> Self {
        u32::try_from(i).expect("Symbol index should fit in u32")
    }
}
