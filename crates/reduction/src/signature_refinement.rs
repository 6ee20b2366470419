#![forbid(unsafe_code)]

use log::debug;
use log::info;
use log::trace;
use rustc_hash::FxHashMap;

use nerode_dfa::Automaton;
use nerode_dfa::StateIndex;
use nerode_dfa::Symbol;
use nerode_utilities::Timing;

use crate::BlockIndex;
use crate::IndexedPartition;
use crate::Partition;

/// The signature of a state, reused between states to avoid reallocations.
pub type SignatureBuilder = Vec<BlockIndex>;

/// Computes the Myhill-Nerode partition of the automaton, in which two states
/// share a block iff they accept the same set of words.
pub fn myhill_nerode_sigref<S: Symbol>(automaton: &Automaton<S>, timing: &mut Timing) -> IndexedPartition {
    let mut time = timing.start("refinement");
    let partition = signature_refinement(automaton, |state_index, partition, builder| {
        myhill_nerode_signature(state_index, automaton, partition, builder);
    });
    time.finish();

    partition
}

/// Fills the builder with the block of the given state followed by the block of
/// its successor for every symbol of the alphabet, in alphabet order.
///
/// Including the block of the state itself means that the next partition only
/// splits blocks of the current one.
pub fn myhill_nerode_signature<S: Symbol>(
    state_index: StateIndex,
    automaton: &Automaton<S>,
    partition: &impl Partition,
    builder: &mut SignatureBuilder,
) {
    builder.clear();
    builder.push(partition.block_number(state_index));

    for symbol in automaton.alphabet().iter_indices() {
        builder.push(partition.block_number(automaton.successor(state_index, symbol)));
    }
}

/// Returns the partition `{ F, Q \ F }` of the final and non-final states,
/// without an empty block.
pub fn final_partition<S: Symbol>(automaton: &Automaton<S>) -> IndexedPartition {
    // The block number of non-final and final states, once they occur.
    let mut numbers: [Option<BlockIndex>; 2] = [None, None];
    let mut num_of_blocks = 0;

    let partition = automaton
        .iter_states()
        .map(|state_index| {
            *numbers[usize::from(automaton.is_final(state_index))].get_or_insert_with(|| {
                num_of_blocks += 1;
                BlockIndex::new(num_of_blocks - 1)
            })
        })
        .collect();

    IndexedPartition::with_partition(partition, num_of_blocks)
}

/// General signature refinement algorithm that accepts an arbitrary signature.
///
/// Starts from the final partition, the signature function is called for
/// every state with the current partition and should fill the builder with
/// the signature of that state. States with equal signatures form the blocks
/// of the next partition. The blocks are numbered in the order of their first
/// state, so the fixpoint is detected by comparing successive partitions.
fn signature_refinement<S, F>(automaton: &Automaton<S>, mut signature: F) -> IndexedPartition
where
    S: Symbol,
    F: FnMut(StateIndex, &IndexedPartition, &mut SignatureBuilder),
{
    let mut builder = SignatureBuilder::default();
    let mut id: FxHashMap<SignatureBuilder, BlockIndex> = FxHashMap::default();

    let mut partition = final_partition(automaton);
    debug!("Initial partition has {} blocks", partition.num_of_blocks());

    // Refine partitions until stable, at most once per state.
    let mut iteration = 0usize;
    loop {
        iteration += 1;
        id.clear();

        let mut next = Vec::with_capacity(automaton.num_of_states());
        for state_index in automaton.iter_states() {
            signature(state_index, &partition, &mut builder);

            let index = if let Some(index) = id.get(builder.as_slice()) {
                *index
            } else {
                let number = BlockIndex::new(id.len());
                id.insert(builder.clone(), number);
                number
            };

            trace!("State {state_index} signature {builder:?} index {index}");
            next.push(index);
        }

        let next = IndexedPartition::with_partition(next, id.len());
        debug!("Iteration {iteration}, found {} blocks", next.num_of_blocks());

        if next == partition {
            break;
        }

        debug_assert!(
            next.num_of_blocks() > partition.num_of_blocks(),
            "Every iteration before the fixpoint should split at least one block"
        );
        partition = next;
    }

    info!(
        "Refinement stabilised after {iteration} iterations with {} blocks",
        partition.num_of_blocks()
    );
    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use nerode_dfa::random_dfa;
    use nerode_utilities::random_test;

    /// Returns for every pair of states whether some word distinguishes them,
    /// using the table-filling algorithm. Runs in O(n^4).
    fn distinguishable_pairs<S: Symbol>(automaton: &Automaton<S>) -> Vec<Vec<bool>> {
        let num_of_states = automaton.num_of_states();
        let mut table: Vec<Vec<bool>> = (0..num_of_states)
            .map(|left| {
                (0..num_of_states)
                    .map(|right| {
                        automaton.is_final(StateIndex::new(left)) != automaton.is_final(StateIndex::new(right))
                    })
                    .collect()
            })
            .collect();

        let mut changed = true;
        while changed {
            changed = false;

            for left in automaton.iter_states() {
                for right in automaton.iter_states() {
                    if table[left][right] {
                        continue;
                    }

                    if automaton.alphabet().iter_indices().any(|symbol| {
                        table[automaton.successor(left, symbol)][automaton.successor(right, symbol)]
                    }) {
                        table[left][right] = true;
                        changed = true;
                    }
                }
            }
        }

        table
    }

    #[test]
    fn test_final_partition() {
        random_test(100, |rng| {
            let automaton = random_dfa::<char>(rng, 10, 2);
            let partition = final_partition(&automaton);

            let num_of_finals = automaton.final_ids().count();
            let expected = usize::from(num_of_finals > 0) + usize::from(num_of_finals < automaton.num_of_states());
            assert_eq!(partition.num_of_blocks(), expected);

            // The first state is always in block zero.
            assert_eq!(partition.block_number(StateIndex::new(0)), BlockIndex::new(0));
        });
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn test_random_myhill_nerode_sigref() {
        random_test(100, |rng| {
            let automaton = random_dfa::<char>(rng, 10, 2);
            let mut timing = Timing::new();

            let partition = myhill_nerode_sigref(&automaton, &mut timing);
            let table = distinguishable_pairs(&automaton);

            for left in automaton.iter_states() {
                for right in automaton.iter_states() {
                    assert_eq!(
                        partition.block_number(left) == partition.block_number(right),
                        !table[left][right],
                        "States {left} and {right} are related differently in {partition}"
                    );
                }
            }
        });
    }

    #[test]
    fn test_myhill_nerode_signature() {
        random_test(10, |rng| {
            let automaton = random_dfa::<char>(rng, 5, 3);
            let partition = IndexedPartition::new(automaton.num_of_states());

            let mut builder = SignatureBuilder::default();
            myhill_nerode_signature(StateIndex::new(0), &automaton, &partition, &mut builder);

            // Everything is in block zero, and there is one entry per symbol plus the own block.
            assert_eq!(builder, vec![BlockIndex::new(0); 4]);
        });
    }
}
