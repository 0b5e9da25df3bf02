use super::Color;
use derive_more::Display;

/// One of the possible outcomes of a checkers game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "the {_0} player won")]
    Win(Color),

    #[display(fmt = "draw by agreement")]
    DrawByAgreement,

    #[display(fmt = "draw by the ply limit")]
    DrawByPlyLimit,
}

impl Outcome {
    /// Whether the outcome is a draw and neither side has won.
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is decisive and one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Win(c) => Some(c),
            _ => None,
        }
    }
}
