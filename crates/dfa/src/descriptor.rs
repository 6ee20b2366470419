//! Plain data shapes to construct automata from, and to hand them over to
//! consumers such as diagram renderers.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::StateId;

/// Describes a single state: its id, whether it is final or the start state,
/// and its successor for every symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub struct StateDescriptor<S> {
    #[serde(rename = "state")]
    pub id: StateId,

    #[serde(rename = "final")]
    pub is_final: bool,

    #[serde(rename = "start")]
    pub is_start: bool,

    pub morphs: BTreeMap<S, StateId>,
}

impl<S> StateDescriptor<S> {
    pub fn new(id: StateId, is_final: bool, is_start: bool, morphs: BTreeMap<S, StateId>) -> Self {
        Self {
            id,
            is_final,
            is_start,
            morphs,
        }
    }
}

/// The construction input of an automaton, see [crate::Automaton::from_descriptor].
/// [crate::Automaton::to_descriptor] produces the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub struct AutomatonDescriptor<S> {
    /// Only deterministic descriptions are accepted.
    pub deterministic: bool,
    pub alphabet: Vec<S>,
    pub states: Vec<StateDescriptor<S>>,
}

/// Everything a diagram renderer needs to draw an automaton, see
/// [crate::Automaton::export].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct ExportedAutomaton<S> {
    pub name: String,
    pub alphabet: Vec<S>,
    pub states: Vec<StateId>,
    pub start: StateId,
    pub finals: Vec<StateId>,
    /// All transitions as `(from, symbol, to)`, ordered by source and symbol.
    pub transitions: Vec<(StateId, S, StateId)>,
}
