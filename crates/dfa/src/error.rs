use thiserror::Error;

use crate::StateId;

/// The reasons why caller supplied data does not describe a complete
/// deterministic automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedAutomatonError {
    #[error("The automaton is not marked as deterministic")]
    NotDeterministic,

    #[error("State {state} has no transition for symbol {symbol}")]
    MissingTransition { state: StateId, symbol: String },

    #[error("State {state} has a transition for symbol {symbol}, which is not in the alphabet")]
    UnexpectedSymbol { state: StateId, symbol: String },

    #[error("State {state} has a transition for symbol {symbol} to the non-existent state {target}")]
    UnknownTarget {
        state: StateId,
        symbol: String,
        target: StateId,
    },

    #[error("State {0} is defined more than once")]
    DuplicateState(StateId),

    #[error("Expected exactly one start state, found {0}")]
    StartStateCount(usize),
}

/// A word contained a symbol outside of the alphabet of the automaton that
/// should read it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Symbol {symbol} at position {position} is not in the alphabet")]
pub struct UnknownSymbolError {
    /// The rendering of the offending symbol.
    pub symbol: String,

    /// The position of the symbol in the word.
    pub position: usize,
}
