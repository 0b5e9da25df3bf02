use super::{Color, Square};
use derive_more::{Display, From};

/// Identifies a [`Piece`] for its whole lifetime on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "#{}", _0)]
pub struct PieceId(pub u32);

/// A checker.
///
/// The identity and the owner never change, the rank changes at most once on promotion.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} {} {} at {}", owner, "self.rank()", id, position)]
pub struct Piece {
    id: PieceId,
    owner: Color,
    position: Square,
    is_king: bool,
}

impl Piece {
    /// Constructs a man owned by `owner` at `position`.
    pub fn new(id: PieceId, owner: Color, position: Square) -> Self {
        Piece {
            id,
            owner,
            position,
            is_king: false,
        }
    }

    /// This piece's identity.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The [`Color`] of the player this piece belongs to.
    pub fn owner(&self) -> Color {
        self.owner
    }

    /// The [`Square`] this piece sits on.
    pub fn position(&self) -> Square {
        self.position
    }

    /// Whether this piece has been promoted.
    pub fn is_king(&self) -> bool {
        self.is_king
    }

    /// Toggles between man and king.
    pub fn transform(&mut self) {
        self.is_king = !self.is_king;
    }

    pub(super) fn relocate(&mut self, position: Square) {
        self.position = position;
    }

    fn rank(&self) -> &'static str {
        if self.is_king {
            "king"
        } else {
            "man"
        }
    }
}
