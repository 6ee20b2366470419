#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

use bitvec::bitvec;
use bitvec::vec::BitVec;
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashMap;

use crate::Alphabet;
use crate::AutomatonDescriptor;
use crate::ExportedAutomaton;
use crate::MalformedAutomatonError;
use crate::State;
use crate::StateDescriptor;
use crate::StateId;
use crate::StateIndex;
use crate::Symbol;
use crate::SymbolIndex;

/// An immutable, complete deterministic finite automaton.
///
/// # Details
///
/// The states are stored sorted by their id, the position of a state in that
/// order is its [StateIndex]. The transition function is a dense row-major
/// table with one row per state and one column per symbol of the alphabet, so
/// every lookup is a single indexing operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton<S> {
    alphabet: Alphabet<S>,

    /// The caller chosen id of every state, strictly increasing.
    ids: Vec<StateId>,
    id_to_index: FxHashMap<StateId, StateIndex>,

    finals: BitVec,
    initial_state: StateIndex,

    /// Entry `state * |alphabet| + symbol` is the successor of `state` on `symbol`.
    transitions: Vec<StateIndex>,
}

impl<S: Symbol> Automaton<S> {
    /// Creates an automaton over the given alphabet from the given states.
    ///
    /// Fails when the ids are not unique, when there is not exactly one start
    /// state, or when a state does not have exactly one transition to an
    /// existing state for every symbol of the alphabet.
    pub fn new(
        alphabet: impl IntoIterator<Item = S>,
        mut states: Vec<StateDescriptor<S>>,
    ) -> Result<Automaton<S>, MalformedAutomatonError> {
        let alphabet = Alphabet::new(alphabet);

        states.sort_unstable_by_key(|state| state.id);
        if let Some(pair) = states.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(MalformedAutomatonError::DuplicateState(pair[0].id));
        }

        let num_of_starts = states.iter().filter(|state| state.is_start).count();
        if num_of_starts != 1 {
            return Err(MalformedAutomatonError::StartStateCount(num_of_starts));
        }

        let id_to_index: FxHashMap<StateId, StateIndex> = states
            .iter()
            .enumerate()
            .map(|(index, state)| (state.id, StateIndex::new(index)))
            .collect();

        let mut initial_state = StateIndex::new(0);
        let mut finals = bitvec![0; states.len()];
        let mut transitions = Vec::with_capacity(states.len() * alphabet.len());

        for (index, state) in states.iter().enumerate() {
            if state.is_start {
                initial_state = StateIndex::new(index);
            }
            finals.set(index, state.is_final);

            if let Some(symbol) = state.morphs.keys().find(|symbol| !alphabet.contains(symbol)) {
                return Err(MalformedAutomatonError::UnexpectedSymbol {
                    state: state.id,
                    symbol: symbol.to_string(),
                });
            }

            // Together with the check above this gives exactly one transition per symbol.
            for symbol in alphabet.iter() {
                let target = state
                    .morphs
                    .get(symbol)
                    .ok_or_else(|| MalformedAutomatonError::MissingTransition {
                        state: state.id,
                        symbol: symbol.to_string(),
                    })?;

                let target_index = id_to_index
                    .get(target)
                    .ok_or_else(|| MalformedAutomatonError::UnknownTarget {
                        state: state.id,
                        symbol: symbol.to_string(),
                        target: *target,
                    })?;

                transitions.push(*target_index);
            }
        }

        debug!(
            "Constructed automaton with {} states over {} symbols",
            states.len(),
            alphabet.len()
        );

        Ok(Automaton {
            alphabet,
            ids: states.iter().map(|state| state.id).collect(),
            id_to_index,
            finals,
            initial_state,
            transitions,
        })
    }

    /// Creates an automaton from a descriptor, which must be marked as
    /// deterministic. See [Automaton::new] for the other requirements.
    pub fn from_descriptor(descriptor: AutomatonDescriptor<S>) -> Result<Automaton<S>, MalformedAutomatonError> {
        if !descriptor.deterministic {
            return Err(MalformedAutomatonError::NotDeterministic);
        }

        Automaton::new(descriptor.alphabet, descriptor.states)
    }

    /// Returns the descriptor of this automaton, from which it can be constructed again.
    pub fn to_descriptor(&self) -> AutomatonDescriptor<S> {
        AutomatonDescriptor {
            deterministic: true,
            alphabet: self.alphabet.as_slice().to_vec(),
            states: self
                .states()
                .map(|state| {
                    let morphs: BTreeMap<S, StateId> =
                        state.morphs().map(|(symbol, target)| (symbol.clone(), target)).collect();
                    StateDescriptor::new(state.id(), state.is_final(), state.is_start(), morphs)
                })
                .collect(),
        }
    }

    /// Returns the data that a renderer needs to draw this automaton under the given name.
    pub fn export(&self, name: &str) -> ExportedAutomaton<S> {
        ExportedAutomaton {
            name: name.to_string(),
            alphabet: self.alphabet.as_slice().to_vec(),
            states: self.ids.clone(),
            start: self.start_id(),
            finals: self.final_ids().collect(),
            transitions: self
                .states()
                .flat_map(|state| {
                    let from = state.id();
                    state.morphs().map(move |(symbol, to)| (from, symbol.clone(), to))
                })
                .collect(),
        }
    }

    /// Returns the alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn num_of_symbols(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the number of transitions, which is one per state and symbol.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Iterates over all state indices in the order of their ids.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> + use<S> {
        (0..self.num_of_states()).map(StateIndex::new)
    }

    /// Iterates over views of all states, in the order of their ids.
    pub fn states(&self) -> impl Iterator<Item = State<'_, S>> + '_ {
        self.iter_states().map(|index| State::new(self, index))
    }

    /// Returns a view on the state with the given index.
    pub fn state(&self, index: StateIndex) -> State<'_, S> {
        State::new(self, index)
    }

    /// Returns the index of the unique start state.
    pub fn initial_state_index(&self) -> StateIndex {
        self.initial_state
    }

    /// Returns the id of the unique start state.
    pub fn start_id(&self) -> StateId {
        self.ids[self.initial_state]
    }

    /// Returns the id of the state with the given index.
    pub fn state_id(&self, index: StateIndex) -> StateId {
        self.ids[index]
    }

    /// Returns the index of the state with the given id, if it exists.
    pub fn state_index(&self, id: StateId) -> Option<StateIndex> {
        self.id_to_index.get(&id).copied()
    }

    /// Returns true iff the given state is final.
    pub fn is_final(&self, index: StateIndex) -> bool {
        self.finals[index.value()]
    }

    /// Iterates over the ids of the final states in increasing order.
    pub fn final_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.finals.iter_ones().map(|index| self.ids[index])
    }

    /// Returns the successor of the given state on the given symbol.
    pub fn successor(&self, state: StateIndex, symbol: SymbolIndex) -> StateIndex {
        self.transitions[state.value() * self.alphabet.len() + symbol.value()]
    }

    /// Returns the id of the successor of the state with the given id on the
    /// given symbol, or `None` if either does not exist.
    pub fn transition(&self, id: StateId, symbol: &S) -> Option<StateId> {
        let state = self.state_index(id)?;
        let symbol = self.alphabet.index(symbol)?;

        Some(self.state_id(self.successor(state, symbol)))
    }

    /// Returns the disjoint union of this automaton and `other`, together with
    /// the index of the start state of `other` inside the union. Returns
    /// `None` when the alphabets differ.
    ///
    /// The states of the union are renumbered: the states of `self` keep their
    /// index as id, the states of `other` follow after them. Only the start
    /// state of `self` is the start state of the union.
    pub fn merge_disjoint(&self, other: &Automaton<S>) -> Option<(Automaton<S>, StateIndex)> {
        if self.alphabet != other.alphabet {
            return None;
        }

        let offset = self.num_of_states();
        let num_of_states = offset + other.num_of_states();

        let ids: Vec<StateId> = (0..num_of_states as StateId).collect();
        let id_to_index = ids
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, StateIndex::new(index)))
            .collect();

        let mut finals = self.finals.clone();
        finals.extend_from_bitslice(other.finals.as_bitslice());

        let mut transitions = self.transitions.clone();
        transitions.extend(
            other
                .transitions
                .iter()
                .map(|target| StateIndex::new(target.value() + offset)),
        );

        let merged = Automaton {
            alphabet: self.alphabet.clone(),
            ids,
            id_to_index,
            finals,
            initial_state: self.initial_state,
            transitions,
        };

        Some((merged, StateIndex::new(other.initial_state.value() + offset)))
    }
}

impl<S: Symbol> TryFrom<AutomatonDescriptor<S>> for Automaton<S> {
    type Error = MalformedAutomatonError;

    fn try_from(descriptor: AutomatonDescriptor<S>) -> Result<Self, Self::Error> {
        Automaton::from_descriptor(descriptor)
    }
}

/// Renders the transition table, one line per state. The start state is
/// marked by `->` and final states by `*`.
impl<S: Symbol> fmt::Display for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} states over {}, start {}",
            self.num_of_states(),
            self.alphabet,
            self.start_id()
        )?;

        for state in self.states() {
            writeln!(
                f,
                "{}{}{}: {}",
                if state.is_start() { "->" } else { "  " },
                if state.is_final() { "*" } else { " " },
                state.id(),
                state
                    .morphs()
                    .map(|(symbol, target)| format!("{symbol} -> {target}"))
                    .format(", ")
            )?;
        }

        Ok(())
    }
}

impl<S: Symbol> fmt::Debug for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
