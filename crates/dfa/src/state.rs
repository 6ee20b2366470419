use nerode_utilities::TagIndex;

use crate::Automaton;
use crate::Symbol;

/// The identifier of a state, chosen by the caller and unique within one
/// automaton.
pub type StateId = u64;

/// A unique type for the states.
pub struct StateTag;

/// The dense index of a state, its position in the id sorted list of states.
pub type StateIndex = TagIndex<usize, StateTag>;

/// A borrowed view on a single state of an [Automaton].
#[derive(Clone)]
pub struct State<'a, S> {
    automaton: &'a Automaton<S>,
    index: StateIndex,
}

impl<'a, S: Symbol> State<'a, S> {
    pub(crate) fn new(automaton: &'a Automaton<S>, index: StateIndex) -> Self {
        Self { automaton, index }
    }

    pub fn id(&self) -> StateId {
        self.automaton.state_id(self.index)
    }

    pub fn index(&self) -> StateIndex {
        self.index
    }

    pub fn is_final(&self) -> bool {
        self.automaton.is_final(self.index)
    }

    pub fn is_start(&self) -> bool {
        self.automaton.initial_state_index() == self.index
    }

    /// Returns the id of the successor for the given symbol, if the symbol is
    /// in the alphabet.
    pub fn target(&self, symbol: &S) -> Option<StateId> {
        let symbol_index = self.automaton.alphabet().index(symbol)?;
        Some(self.automaton.state_id(self.automaton.successor(self.index, symbol_index)))
    }

    /// Iterates over the transitions of this state as `(symbol, target id)`,
    /// one for every symbol of the alphabet in sorted order.
    pub fn morphs(&self) -> impl Iterator<Item = (&'a S, StateId)> + use<'a, S> {
        let automaton = self.automaton;
        let index = self.index;

        automaton.alphabet().iter_indices().map(move |symbol| {
            let target = automaton.successor(index, symbol);
            (automaton.alphabet().symbol(symbol), automaton.state_id(target))
        })
    }
}
