use std::fmt;

use itertools::Itertools;
use nerode_utilities::TagIndex;

use crate::Symbol;

/// A unique type for the symbols.
pub struct SymbolTag;

/// The position of a symbol in its [Alphabet].
pub type SymbolIndex = TagIndex<usize, SymbolTag>;

/// A finite set of symbols, internally a sorted vector without duplicates. The
/// position of a symbol in that vector is its [SymbolIndex].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Alphabet<S> {
    /// Invariant: sorted and without duplicates.
    symbols: Vec<S>,
}

impl<S: Symbol> Alphabet<S> {
    /// Creates an alphabet from the given symbols, the order and duplicates
    /// are irrelevant.
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Self {
        let mut symbols: Vec<S> = symbols.into_iter().collect();
        symbols.sort();
        symbols.dedup();

        Self { symbols }
    }

    /// Returns the index of the given symbol, if it is part of the alphabet.
    pub fn index(&self, symbol: &S) -> Option<SymbolIndex> {
        self.symbols.binary_search(symbol).ok().map(SymbolIndex::new)
    }

    /// Returns true iff the symbol is part of the alphabet.
    pub fn contains(&self, symbol: &S) -> bool {
        self.index(symbol).is_some()
    }

    /// Returns the symbol at the given index.
    pub fn symbol(&self, index: SymbolIndex) -> &S {
        &self.symbols[index]
    }

    /// Iterates over the symbols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.symbols.iter()
    }

    /// Iterates over the indices of the symbols, in the same order as [Self::iter].
    pub fn iter_indices(&self) -> impl Iterator<Item = SymbolIndex> + use<S> {
        (0..self.symbols.len()).map(SymbolIndex::new)
    }

    /// Returns the symbols as a sorted slice.
    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Symbol> fmt::Display for Alphabet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.symbols.iter().format(", "))
    }
}
