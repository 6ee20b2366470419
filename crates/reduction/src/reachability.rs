#![forbid(unsafe_code)]

use std::collections::VecDeque;

use bitvec::bitvec;
use bitvec::vec::BitVec;
use log::debug;

use nerode_dfa::Automaton;
use nerode_dfa::StateDescriptor;
use nerode_dfa::Symbol;

/// Returns a bit for every state that is set iff the state can be reached from
/// the start state, found by a breadth-first search.
pub fn reachable_states<S: Symbol>(automaton: &Automaton<S>) -> BitVec {
    let mut reachable = bitvec![0; automaton.num_of_states()];
    let mut queue = VecDeque::new();

    let initial = automaton.initial_state_index();
    reachable.set(initial.value(), true);
    queue.push_back(initial);

    while let Some(state_index) = queue.pop_front() {
        for symbol in automaton.alphabet().iter_indices() {
            let next = automaton.successor(state_index, symbol);
            if !reachable[next.value()] {
                reachable.set(next.value(), true);
                queue.push_back(next);
            }
        }
    }

    reachable
}

/// Returns the automaton restricted to the states that are reachable from the
/// start state. The remaining states keep their ids.
pub fn remove_unreachable<S: Symbol>(automaton: &Automaton<S>) -> Automaton<S> {
    let reachable = reachable_states(automaton);
    if reachable.all() {
        return automaton.clone();
    }

    debug!(
        "Removing {} unreachable states",
        automaton.num_of_states() - reachable.count_ones()
    );

    let states = automaton
        .states()
        .filter(|state| reachable[state.index().value()])
        .map(|state| {
            let morphs = state.morphs().map(|(symbol, target)| (symbol.clone(), target)).collect();
            StateDescriptor::new(state.id(), state.is_final(), state.is_start(), morphs)
        })
        .collect();

    Automaton::new(automaton.alphabet().iter().cloned(), states)
        .expect("Successors of reachable states should be reachable")
}
