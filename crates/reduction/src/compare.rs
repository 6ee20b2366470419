#![forbid(unsafe_code)]

use log::info;

use nerode_dfa::Automaton;
use nerode_dfa::Symbol;
use nerode_utilities::Timing;

use crate::Partition;
use crate::myhill_nerode_sigref;

/// Returns true iff both automata have the same alphabet and accept the same
/// language.
///
/// The start states of both automata are compared in the Myhill-Nerode
/// partition of their disjoint union.
pub fn equivalent<S: Symbol>(left: &Automaton<S>, right: &Automaton<S>, timing: &mut Timing) -> bool {
    let mut time_merge = timing.start("merge automata");
    let merged = left.merge_disjoint(right);
    time_merge.finish();

    let Some((merged, right_initial)) = merged else {
        info!("The alphabets {} and {} differ", left.alphabet(), right.alphabet());
        return false;
    };

    let partition = myhill_nerode_sigref(&merged, timing);
    partition.block_number(merged.initial_state_index()) == partition.block_number(right_initial)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    use test_log::test;

    use nerode_dfa::StateDescriptor;
    use nerode_dfa::StateId;
    use nerode_dfa::random_dfa;
    use nerode_utilities::random_test;

    use crate::minimize;

    /// Accepts the words over {a, b} with a number of a's divisible by `modulus`.
    fn count_a(modulus: StateId) -> Automaton<char> {
        let states = (0..modulus)
            .map(|count| {
                let morphs = BTreeMap::from([('a', (count + 1) % modulus), ('b', count)]);
                StateDescriptor::new(count, count == 0, count == 0, morphs)
            })
            .collect();

        Automaton::new(['a', 'b'], states).unwrap()
    }

    #[test]
    fn test_equivalent() {
        let mut timing = Timing::new();

        assert!(equivalent(&count_a(2), &count_a(2), &mut timing));
        assert!(!equivalent(&count_a(2), &count_a(3), &mut timing));

        // Counting modulo four and checking for zero is not the same as even.
        assert!(!equivalent(&count_a(2), &count_a(4), &mut timing));
    }

    #[test]
    fn test_equivalent_different_alphabets() {
        let states = vec![StateDescriptor::new(0, true, true, BTreeMap::from([('a', 0)]))];
        let only_a = Automaton::new(['a'], states).unwrap();

        let mut timing = Timing::new();
        assert!(!equivalent(&only_a, &count_a(1), &mut timing));
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn test_random_equivalent_minimize() {
        random_test(100, |rng| {
            let automaton = random_dfa::<char>(rng, 10, 3);
            let mut timing = Timing::new();

            assert!(equivalent(&automaton, &minimize(&automaton), &mut timing));
        });
    }
}
