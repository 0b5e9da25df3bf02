use crate::checkers::{Board, Move};

mod heuristic;
mod random;

pub use heuristic::*;
pub use random::*;

/// Trait for types that know how to pick one of the legal [`Move`]s.
#[cfg_attr(test, mockall::automock)]
pub trait Choose {
    /// Picks one of `moves`, or `None` if there is nothing to choose.
    fn choose(&mut self, board: &Board, moves: &[Move]) -> Option<Move>;
}
