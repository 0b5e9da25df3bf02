use derive_more::{Constructor, Display};

/// A cell coordinate on the board.
///
/// Rows grow downward and columns grow to the right, both 0-indexed.
/// Coordinates are signed so that squares off the board can still be named.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", row, col)]
pub struct Square {
    #[cfg_attr(test, strategy(-2i32..14))]
    pub row: i32,
    #[cfg_attr(test, strategy(-2i32..14))]
    pub col: i32,
}

impl Square {
    /// The adjacent square along a [`Diagonal`].
    pub fn step(self, d: Diagonal) -> Self {
        let (dr, dc) = d.delta();
        Square::new(self.row + dr, self.col + dc)
    }

    /// The [`Diagonal`] that leads from this square towards `other`, if they share one.
    pub fn diagonal_to(self, other: Square) -> Option<Diagonal> {
        let (dr, dc) = (other.row - self.row, other.col - self.col);

        if dr == 0 || dr.abs() != dc.abs() {
            return None;
        }

        Diagonal::ALL
            .into_iter()
            .find(|d| d.delta() == (dr.signum(), dc.signum()))
    }

    /// The number of rows between this square and `other`.
    pub fn rows_to(self, other: Square) -> i32 {
        (self.row - other.row).abs()
    }

    /// The squared euclidean distance between this square and `other`.
    pub fn distance_squared(self, other: Square) -> i32 {
        (self.row - other.row).pow(2) + (self.col - other.col).pow(2)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Square::new(row, col)
    }
}

/// One of the four diagonal directions on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Diagonal {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Diagonal {
    /// All diagonals.
    pub const ALL: [Self; 4] = [
        Diagonal::NorthWest,
        Diagonal::NorthEast,
        Diagonal::SouthWest,
        Diagonal::SouthEast,
    ];

    /// The `(row, col)` increment of a single step along this diagonal.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Diagonal::NorthWest => (-1, -1),
            Diagonal::NorthEast => (-1, 1),
            Diagonal::SouthWest => (1, -1),
            Diagonal::SouthEast => (1, 1),
        }
    }

    /// The diagonal pointing the opposite way.
    pub fn reverse(&self) -> Self {
        match self {
            Diagonal::NorthWest => Diagonal::SouthEast,
            Diagonal::NorthEast => Diagonal::SouthWest,
            Diagonal::SouthWest => Diagonal::NorthEast,
            Diagonal::SouthEast => Diagonal::NorthWest,
        }
    }
}
