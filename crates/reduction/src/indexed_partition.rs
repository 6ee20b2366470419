#![forbid(unsafe_code)]

use std::fmt;

use itertools::Itertools;
use nerode_dfa::StateIndex;

use crate::BlockIndex;
use crate::Partition;

/// Defines a partition based on an explicit block number for every element.
///
/// The block numbers are expected to be canonical, i.e. blocks are numbered in
/// the order in which their first element occurs. Two canonical partitions of
/// the same elements are equal iff they are equal as values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedPartition {
    partition: Vec<BlockIndex>,

    num_of_blocks: usize,
}

impl IndexedPartition {
    /// Create a new partition where all elements are in a single block.
    pub fn new(num_of_elements: usize) -> IndexedPartition {
        IndexedPartition {
            partition: vec![BlockIndex::new(0); num_of_elements],
            num_of_blocks: usize::from(num_of_elements > 0),
        }
    }

    /// Create a new partition with the given block number for every element.
    pub fn with_partition(partition: Vec<BlockIndex>, num_of_blocks: usize) -> IndexedPartition {
        debug_assert!(
            partition.iter().all(|block| block.value() < num_of_blocks),
            "Block numbers should be smaller than the number of blocks {num_of_blocks}"
        );

        IndexedPartition {
            partition,
            num_of_blocks,
        }
    }

    /// Iterates over the block numbers of all elements.
    pub fn iter(&self) -> impl Iterator<Item = BlockIndex> + '_ {
        self.partition.iter().copied()
    }

    /// Iterates over the elements of the given block, in increasing order.
    pub fn iter_block(&self, block_index: BlockIndex) -> impl Iterator<Item = StateIndex> + '_ {
        self.partition
            .iter()
            .enumerate()
            .filter(move |(_, block)| **block == block_index)
            .map(|(element_index, _)| StateIndex::new(element_index))
    }

    /// Sets the block number of the given element
    pub fn set_block(&mut self, element_index: StateIndex, block_number: BlockIndex) {
        // Assumes that the blocks are dense, otherwise it overestimates the number of blocks.
        self.num_of_blocks = self.num_of_blocks.max(block_number.value() + 1);

        self.partition[element_index.value()] = block_number;
    }
}

impl fmt::Display for IndexedPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks = (0..self.num_of_blocks)
            .map(BlockIndex::new)
            .map(|block_index| format!("{{{}}}", self.iter_block(block_index).format(", ")))
            .format(", ");

        write!(f, "{{ {blocks} }}")
    }
}

impl Partition for IndexedPartition {
    fn block_number(&self, state_index: StateIndex) -> BlockIndex {
        self.partition[state_index.value()]
    }

    fn num_of_blocks(&self) -> usize {
        self.num_of_blocks
    }

    fn len(&self) -> usize {
        self.partition.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_indexed_partition() {
        let mut partition = IndexedPartition::new(4);
        assert_eq!(partition.num_of_blocks(), 1);
        assert_eq!(partition.len(), 4);

        partition.set_block(StateIndex::new(1), BlockIndex::new(1));
        partition.set_block(StateIndex::new(3), BlockIndex::new(1));

        assert_eq!(partition.num_of_blocks(), 2);
        assert_eq!(partition.block_number(StateIndex::new(3)), BlockIndex::new(1));
        assert_eq!(
            partition.iter_block(BlockIndex::new(1)).collect::<Vec<_>>(),
            vec![StateIndex::new(1), StateIndex::new(3)]
        );
        assert_eq!(partition.to_string(), "{ {0, 2}, {1, 3} }");

        let same = IndexedPartition::with_partition(
            [0, 1, 0, 1].into_iter().map(BlockIndex::new).collect(),
            2,
        );
        assert_eq!(partition, same);
    }
}
