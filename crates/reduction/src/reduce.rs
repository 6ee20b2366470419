#![forbid(unsafe_code)]

use log::info;

use nerode_dfa::Automaton;
use nerode_dfa::Symbol;
use nerode_utilities::Timing;

use crate::myhill_nerode_sigref;
use crate::quotient_automaton;
use crate::remove_unreachable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Minimization {
    /// Merges language equivalent states, unreachable states are kept.
    Language,
    /// Removes the unreachable states first, which yields the canonical minimal automaton.
    Reachable,
}

/// Returns the minimal automaton accepting the same language, where every
/// state is identified by the smallest id among the states it replaces.
///
/// Unreachable states are merged with the states they are equivalent to, but
/// not removed, see [minimize_reachable] for that.
pub fn minimize<S: Symbol>(automaton: &Automaton<S>) -> Automaton<S> {
    let mut timing = Timing::new();
    minimize_with_timing(automaton, &mut timing)
}

/// Same as [minimize], but records the time of the refinement and quotient phases.
pub fn minimize_with_timing<S: Symbol>(automaton: &Automaton<S>, timing: &mut Timing) -> Automaton<S> {
    reduce_automaton(automaton, Minimization::Language, timing)
}

/// Returns the minimal automaton accepting the same language without
/// unreachable states.
pub fn minimize_reachable<S: Symbol>(automaton: &Automaton<S>) -> Automaton<S> {
    let mut timing = Timing::new();
    reduce_automaton(automaton, Minimization::Reachable, &mut timing)
}

/// Reduces the given automaton according to the given minimization. The input
/// is never changed, the result is a new automaton.
pub fn reduce_automaton<S: Symbol>(
    automaton: &Automaton<S>,
    minimization: Minimization,
    timing: &mut Timing,
) -> Automaton<S> {
    let result = match minimization {
        Minimization::Language => quotient_myhill_nerode(automaton, timing),
        Minimization::Reachable => {
            let mut time = timing.start("reachability");
            let reachable = remove_unreachable(automaton);
            time.finish();

            quotient_myhill_nerode(&reachable, timing)
        }
    };

    info!(
        "Reduced automaton from {} to {} states",
        automaton.num_of_states(),
        result.num_of_states()
    );
    result
}

fn quotient_myhill_nerode<S: Symbol>(automaton: &Automaton<S>, timing: &mut Timing) -> Automaton<S> {
    let partition = myhill_nerode_sigref(automaton, timing);

    let mut time = timing.start("quotient");
    let result = quotient_automaton(automaton, &partition);
    time.finish();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;
    use test_log::test;

    use nerode_dfa::random_dfa;
    use nerode_utilities::random_test;

    use crate::reachable_states;

    fn random_word(rng: &mut impl Rng, alphabet: &[char]) -> Vec<char> {
        let length = rng.random_range(0..12);
        (0..length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect()
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn test_random_minimize_preserves_language() {
        random_test(100, |rng| {
            let automaton = random_dfa::<char>(rng, 10, 2);
            let minimal = minimize(&automaton);

            assert!(minimal.num_of_states() <= automaton.num_of_states());
            assert_eq!(minimal.alphabet(), automaton.alphabet());

            for _ in 0..50 {
                let word = random_word(rng, automaton.alphabet().as_slice());
                assert_eq!(
                    automaton.accepts(&word),
                    minimal.accepts(&word),
                    "Word {word:?} is treated differently by {automaton} and {minimal}"
                );
            }
        });
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn test_random_minimize_idempotent() {
        random_test(100, |rng| {
            let automaton = random_dfa::<char>(rng, 10, 3);

            let minimal = minimize(&automaton);
            let again = minimize(&minimal);

            // The ids are the smallest in every block, so they are preserved as well.
            assert_eq!(minimal, again);
        });
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn test_random_minimize_reachable() {
        random_test(100, |rng| {
            let automaton = random_dfa::<char>(rng, 10, 2);
            let mut timing = Timing::new();

            let minimal = minimize_with_timing(&automaton, &mut timing);
            let reachable = minimize_reachable(&automaton);

            assert!(reachable.num_of_states() <= minimal.num_of_states());
            assert!(reachable_states(&reachable).all());
            assert_eq!(minimize_reachable(&reachable).num_of_states(), reachable.num_of_states());

            for _ in 0..50 {
                let word = random_word(rng, automaton.alphabet().as_slice());
                assert_eq!(automaton.accepts(&word), reachable.accepts(&word));
            }
        });
    }

    #[test]
    fn test_minimize_timing() {
        random_test(1, |rng| {
            let automaton = random_dfa::<char>(rng, 5, 2);
            let mut timing = Timing::new();

            reduce_automaton(&automaton, Minimization::Reachable, &mut timing);

            let phases: Vec<String> = timing.results().into_iter().map(|(name, _)| name).collect();
            assert_eq!(phases, vec!["reachability", "refinement", "quotient"]);
        });
    }
}
