#![doc = include_str!("../README.md")]

mod alphabet;
mod automaton;
mod descriptor;
mod error;
mod random_dfa;
mod simulate;
mod state;
mod symbol;

pub use alphabet::*;
pub use automaton::*;
pub use descriptor::*;
pub use error::*;
pub use random_dfa::*;
pub use simulate::*;
pub use state::*;
pub use symbol::*;
