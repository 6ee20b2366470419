#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::index::sample;

use crate::Automaton;
use crate::StateDescriptor;
use crate::StateId;
use crate::Symbol;

/// Generates a random complete automaton with the given number of states and
/// symbols. The symbols are obtained from [Symbol::from_index].
///
/// The state ids are drawn from `0..4 * num_of_states`, so ids and positions
/// generally differ. The start state, the final states and all transitions
/// are chosen uniformly at random.
pub fn random_dfa<S: Symbol>(rng: &mut impl Rng, num_of_states: usize, num_of_symbols: usize) -> Automaton<S> {
    assert!(num_of_states > 0, "An automaton requires at least the start state");

    let alphabet: Vec<S> = (0..num_of_symbols).map(S::from_index).collect();
    let ids: Vec<StateId> = sample(rng, 4 * num_of_states, num_of_states)
        .into_iter()
        .map(|id| id as StateId)
        .collect();
    let start = rng.random_range(0..num_of_states);

    let mut states = Vec::with_capacity(num_of_states);
    for (index, &id) in ids.iter().enumerate() {
        let mut morphs = BTreeMap::new();
        for symbol in &alphabet {
            morphs.insert(symbol.clone(), ids[rng.random_range(0..num_of_states)]);
        }

        states.push(StateDescriptor::new(id, rng.random_bool(0.5), index == start, morphs));
    }

    Automaton::new(alphabet, states).expect("Randomly generated automata should be complete and deterministic")
}
