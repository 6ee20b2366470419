use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::ops::Deref;
use std::ops::Index;
use std::ops::IndexMut;

/// An index that can only be compared with indices carrying the same tag, so
/// that for example a state index can not be mixed up with a symbol index.
///
/// Constructing a tagged index is not a proof that it is in bounds. Use
/// [TagIndex::value] to obtain the underlying value, or index a `Vec` or slice
/// with it directly.
pub struct TagIndex<T, Tag> {
    index: T,

    /// Only used to distinguish the tags, `fn() -> Tag` keeps the index `Send` and `Sync`.
    marker: PhantomData<fn() -> Tag>,
}

impl<T, Tag> TagIndex<T, Tag> {
    pub fn new(index: T) -> Self {
        Self {
            index,
            marker: PhantomData,
        }
    }
}

impl<T: Copy, Tag> TagIndex<T, Tag> {
    /// Returns the underlying value.
    pub fn value(&self) -> T {
        self.index
    }
}

impl<T: Default, Tag> Default for TagIndex<T, Tag> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone, Tag> Clone for TagIndex<T, Tag> {
    fn clone(&self) -> Self {
        Self::new(self.index.clone())
    }
}

impl<T: Copy, Tag> Copy for TagIndex<T, Tag> {}

impl<T: PartialEq, Tag> PartialEq for TagIndex<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T: PartialEq, Tag> Eq for TagIndex<T, Tag> {}

impl<T: PartialEq, Tag> PartialEq<T> for TagIndex<T, Tag> {
    fn eq(&self, other: &T) -> bool {
        self.index == *other
    }
}

impl<T: PartialOrd, Tag> PartialOrd for TagIndex<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.index.partial_cmp(&other.index)
    }
}

impl<T: Ord, Tag> Ord for TagIndex<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T: PartialOrd, Tag> PartialOrd<T> for TagIndex<T, Tag> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.index.partial_cmp(other)
    }
}

impl<T: Hash, Tag> Hash for TagIndex<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for TagIndex<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.index.fmt(f)
    }
}

impl<T: fmt::Display, Tag> fmt::Display for TagIndex<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.index.fmt(f)
    }
}

impl<T, Tag> Deref for TagIndex<T, Tag> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.index
    }
}

// Dense tables are indexed by `usize` based tags directly.
impl<U, Tag> Index<TagIndex<usize, Tag>> for [U] {
    type Output = U;

    fn index(&self, index: TagIndex<usize, Tag>) -> &Self::Output {
        &self[index.value()]
    }
}

impl<U, Tag> IndexMut<TagIndex<usize, Tag>> for [U] {
    fn index_mut(&mut self, index: TagIndex<usize, Tag>) -> &mut Self::Output {
        &mut self[index.value()]
    }
}

impl<U, Tag> Index<TagIndex<usize, Tag>> for Vec<U> {
    type Output = U;

    fn index(&self, index: TagIndex<usize, Tag>) -> &Self::Output {
        &self[index.value()]
    }
}

impl<U, Tag> IndexMut<TagIndex<usize, Tag>> for Vec<U> {
    fn index_mut(&mut self, index: TagIndex<usize, Tag>) -> &mut Self::Output {
        &mut self[index.value()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstTag;

    type FirstIndex = TagIndex<usize, FirstTag>;

    #[test]
    fn test_tagged_index_indexing() {
        let mut values = vec![10, 20, 30];
        let index = FirstIndex::new(1);

        assert_eq!(values[index], 20);
        values[index] = 25;
        assert_eq!(values.as_slice()[index], 25);

        assert!(FirstIndex::new(0) < index);
        assert_eq!(index, 1);
        assert_eq!(*index + 1, 2);
        assert_eq!(format!("{index} {index:?}"), "1 1");
    }
}
