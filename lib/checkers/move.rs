use super::{Piece, Square};
use std::fmt;

/// A checkers move.
///
/// The path lists every square the piece lands on, in order. A step has a single
/// landing square, a jump chain has one landing square per captured piece.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    piece: Piece,
    path: Vec<Square>,
}

impl Move {
    /// Constructs a move of `piece` along `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn new(piece: Piece, path: Vec<Square>) -> Self {
        assert!(!path.is_empty(), "a move must land somewhere");
        Move { piece, path }
    }

    /// The piece moved, as it was when this move was generated.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.piece.position()
    }

    /// The final [`Square`].
    pub fn whither(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// The landing squares, in order.
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// Whether this move captures.
    pub fn is_jump(&self) -> bool {
        self.whence().rows_to(self.path[0]) > 1
    }

    /// How many pieces this move captures.
    pub fn captures(&self) -> usize {
        if self.is_jump() {
            self.path.len()
        } else {
            0
        }
    }

    /// Consecutive pairs of squares this move relocates the piece between.
    pub fn hops(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        let origins = std::iter::once(self.whence()).chain(self.path.iter().copied());
        origins.zip(self.path.iter().copied())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.whence())?;

        for s in &self.path {
            write!(f, " -> {}", s)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{Color, PieceId};
    use test_strategy::proptest;

    fn man(row: i32, col: i32) -> Piece {
        Piece::new(PieceId(0), Color::White, Square::new(row, col))
    }

    #[proptest]
    fn step_is_not_a_jump() {
        let m = Move::new(man(2, 3), vec![Square::new(3, 4)]);
        assert!(!m.is_jump());
        assert_eq!(m.captures(), 0);
    }

    #[proptest]
    fn chain_captures_once_per_landing_square() {
        let m = Move::new(man(2, 3), vec![Square::new(4, 5), Square::new(6, 3)]);
        assert!(m.is_jump());
        assert_eq!(m.captures(), 2);
        assert_eq!(m.whither(), Square::new(6, 3));
    }

    #[proptest]
    fn hops_start_from_the_piece_position() {
        let m = Move::new(man(2, 3), vec![Square::new(4, 5), Square::new(6, 3)]);
        let hops: Vec<_> = m.hops().collect();

        assert_eq!(
            hops,
            vec![
                (Square::new(2, 3), Square::new(4, 5)),
                (Square::new(4, 5), Square::new(6, 3))
            ]
        );
    }

    #[proptest]
    fn move_displays_the_whole_path() {
        let m = Move::new(man(6, 6), vec![Square::new(8, 4), Square::new(10, 2)]);
        assert_eq!(m.to_string(), "(6, 6) -> (8, 4) -> (10, 2)");
    }

    #[test]
    #[should_panic]
    fn move_must_land_somewhere() {
        Move::new(man(0, 0), vec![]);
    }
}
