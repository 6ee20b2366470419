#![forbid(unsafe_code)]

use std::borrow::Borrow;

use nerode_utilities::debug_trace;

use crate::Automaton;
use crate::StateId;
use crate::StateIndex;
use crate::Symbol;
use crate::UnknownSymbolError;

/// Returns true iff the automaton accepts the given word.
///
/// Reading a symbol that is not in the alphabet is an error, which is
/// different from the word being rejected. The empty word is accepted iff the
/// start state is final.
pub fn accepts<S, W>(automaton: &Automaton<S>, word: W) -> Result<bool, UnknownSymbolError>
where
    S: Symbol,
    W: IntoIterator,
    W::Item: Borrow<S>,
{
    let state = read_word(automaton, word)?;
    Ok(automaton.is_final(state))
}

/// Returns the id of the state that is reached after reading the given word
/// from the start state.
pub fn run<S, W>(automaton: &Automaton<S>, word: W) -> Result<StateId, UnknownSymbolError>
where
    S: Symbol,
    W: IntoIterator,
    W::Item: Borrow<S>,
{
    let state = read_word(automaton, word)?;
    Ok(automaton.state_id(state))
}

/// Follows the transitions for every symbol of the word, one at a time.
fn read_word<S, W>(automaton: &Automaton<S>, word: W) -> Result<StateIndex, UnknownSymbolError>
where
    S: Symbol,
    W: IntoIterator,
    W::Item: Borrow<S>,
{
    let mut current = automaton.initial_state_index();

    for (position, symbol) in word.into_iter().enumerate() {
        let symbol: &S = symbol.borrow();
        let symbol_index = automaton.alphabet().index(symbol).ok_or_else(|| UnknownSymbolError {
            symbol: symbol.to_string(),
            position,
        })?;

        let next = automaton.successor(current, symbol_index);
        debug_trace!("State {current} --[{symbol}]-> {next}");
        current = next;
    }

    Ok(current)
}

impl<S: Symbol> Automaton<S> {
    /// See [accepts].
    pub fn accepts<W>(&self, word: W) -> Result<bool, UnknownSymbolError>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        accepts(self, word)
    }

    /// See [run].
    pub fn run<W>(&self, word: W) -> Result<StateId, UnknownSymbolError>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        run(self, word)
    }
}
