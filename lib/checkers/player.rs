use super::{Board, Color, Move};
use crate::bot::{Choose, Heuristic, Random};
use derive_more::{Constructor, Display};

/// How a [`Player`] decides on its moves.
#[derive(Debug, Display, Clone)]
pub enum Policy {
    /// Moves are supplied from the outside.
    #[display(fmt = "human")]
    Human,

    #[display(fmt = "random")]
    Random(Random),

    #[display(fmt = "heuristic")]
    Heuristic(Heuristic),
}

impl From<Random> for Policy {
    fn from(b: Random) -> Self {
        Policy::Random(b)
    }
}

impl From<Heuristic> for Policy {
    fn from(b: Heuristic) -> Self {
        Policy::Heuristic(b)
    }
}

/// A participant in a game of checkers.
#[derive(Debug, Display, Clone, Constructor)]
#[display(fmt = "{} ({} {})", name, color, policy)]
pub struct Player {
    name: String,
    color: Color,
    policy: Policy,
}

impl Player {
    /// This player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [`Color`] of the pieces this player controls.
    pub fn color(&self) -> Color {
        self.color
    }

    /// How this player decides on its moves.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Whether this player decides on its own.
    pub fn is_bot(&self) -> bool {
        !matches!(self.policy, Policy::Human)
    }
}

/// Delegates to the [`Policy`], a human player never chooses on its own.
impl Choose for Player {
    fn choose(&mut self, board: &Board, moves: &[Move]) -> Option<Move> {
        match &mut self.policy {
            Policy::Human => None,
            Policy::Random(b) => b.choose(board, moves),
            Policy::Heuristic(b) => b.choose(board, moves),
        }
    }
}
