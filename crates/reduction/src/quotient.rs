#![forbid(unsafe_code)]

use nerode_dfa::Automaton;
use nerode_dfa::StateDescriptor;
use nerode_dfa::StateIndex;
use nerode_dfa::Symbol;
use nerode_utilities::TagIndex;

/// A zero sized tag for the block.
pub struct BlockTag {}

/// The index for blocks.
pub type BlockIndex = TagIndex<usize, BlockTag>;

/// A trait for partition refinement algorithms that expose the block number for
/// every state. Can be used to compute the quotient automaton.
///
/// The invariants are that the union of all blocks is the original set, and
/// that each block contains distinct elements
pub trait Partition {
    /// Returns the block number for the given state.
    fn block_number(&self, state_index: StateIndex) -> BlockIndex;

    /// Returns the number of blocks in the partition.
    fn num_of_blocks(&self) -> usize;

    /// Returns the number of elements in the partition.
    fn len(&self) -> usize;

    /// Returns whether the partition is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the automaton with one state per block of the given partition.
///
/// The partition must be a congruence: states in the same block agree on
/// finality and, for every symbol, on the block of their successor. Every
/// block is represented by its first state, which has the smallest id since
/// the states are sorted by id, and that id becomes the id of the block.
pub fn quotient_automaton<S: Symbol>(automaton: &Automaton<S>, partition: &impl Partition) -> Automaton<S> {
    debug_assert_eq!(
        partition.len(),
        automaton.num_of_states(),
        "The partition should range over the states of the automaton"
    );

    let mut representatives: Vec<Option<StateIndex>> = vec![None; partition.num_of_blocks()];
    for state_index in automaton.iter_states() {
        let representative = &mut representatives[partition.block_number(state_index)];
        if representative.is_none() {
            *representative = Some(state_index);
        }
    }

    let representatives: Vec<StateIndex> = representatives
        .into_iter()
        .enumerate()
        .map(|(block, representative)| {
            representative.unwrap_or_else(|| panic!("Blocks in the partition should not be empty {block}"))
        })
        .collect();

    debug_assert!(
        automaton.iter_states().all(|state_index| {
            let representative = representatives[partition.block_number(state_index)];
            automaton.is_final(state_index) == automaton.is_final(representative)
                && automaton.alphabet().iter_indices().all(|symbol| {
                    partition.block_number(automaton.successor(state_index, symbol))
                        == partition.block_number(automaton.successor(representative, symbol))
                })
        }),
        "The partition should be a congruence of the automaton"
    );

    let initial_block = partition.block_number(automaton.initial_state_index());
    let states = representatives
        .iter()
        .enumerate()
        .map(|(block, &representative)| {
            let morphs = automaton
                .alphabet()
                .iter_indices()
                .map(|symbol| {
                    let to_block = partition.block_number(automaton.successor(representative, symbol));
                    (
                        automaton.alphabet().symbol(symbol).clone(),
                        automaton.state_id(representatives[to_block]),
                    )
                })
                .collect();

            StateDescriptor::new(
                automaton.state_id(representative),
                automaton.is_final(representative),
                BlockIndex::new(block) == initial_block,
                morphs,
            )
        })
        .collect();

    Automaton::new(automaton.alphabet().iter().cloned(), states)
        .expect("The quotient of a valid automaton modulo a congruence should be valid")
}
