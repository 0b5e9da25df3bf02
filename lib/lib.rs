/// Checkers domain types and rules.
pub mod checkers;
/// Automated move selection.
pub mod bot;
/// Turn arbitration between two players.
pub mod game;
