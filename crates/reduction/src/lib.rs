#![doc = include_str!("../README.md")]

mod compare;
mod indexed_partition;
mod quotient;
mod reachability;
mod reduce;
mod signature_refinement;

pub use compare::*;
pub use indexed_partition::*;
pub use quotient::*;
pub use reachability::*;
pub use reduce::*;
pub use signature_refinement::*;
