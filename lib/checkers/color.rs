use super::Diagonal;
use derive_more::Display;
use std::ops::Not;

/// The color of a checkers [`Piece`][`super::Piece`].
///
/// White starts on the top rows and advances towards increasing row indices,
/// Black starts on the bottom rows and advances the opposite way.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The side that makes the first move.
    pub const FIRST: Self = Color::Black;

    /// The row increment of a step towards this side's far edge.
    pub fn advance(&self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The two [`Diagonal`]s a man of this color may move along.
    pub fn forward(&self) -> [Diagonal; 2] {
        match self {
            Color::White => [Diagonal::SouthWest, Diagonal::SouthEast],
            Color::Black => [Diagonal::NorthWest, Diagonal::NorthEast],
        }
    }

    /// The two [`Diagonal`]s only a king of this color may move along.
    pub fn backward(&self) -> [Diagonal; 2] {
        (!*self).forward()
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
    }

    #[proptest]
    fn opposite_colors_advance_in_opposite_directions(c: Color) {
        assert_eq!(c.advance(), -(!c).advance());
    }

    #[proptest]
    fn forward_diagonals_advance_towards_the_far_edge(c: Color) {
        for d in c.forward() {
            assert_eq!(d.delta().0, c.advance());
        }
    }

    #[proptest]
    fn backward_diagonals_retreat_from_the_far_edge(c: Color) {
        for d in c.backward() {
            assert_eq!(d.delta().0, -c.advance());
        }
    }

    #[proptest]
    fn black_moves_first() {
        assert_eq!(Color::FIRST, Color::Black);
    }
}
