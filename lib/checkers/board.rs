use super::{Color, Piece, PieceId, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::{Index, Range};
use tracing::instrument;

/// The reason why a [`Board`] primitive failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum BoardError {
    #[display(fmt = "square `{}` is off the board", _0)]
    OutOfBounds(#[error(not(source))] Square),
    #[display(fmt = "square `{}` is already occupied", _0)]
    OccupiedCell(#[error(not(source))] Square),
    #[display(fmt = "square `{}` is already empty", _0)]
    EmptyCell(#[error(not(source))] Square),
    #[display(fmt = "there is no piece to move on square `{}`", _0)]
    NoPiece(#[error(not(source))] Square),
}

/// The checkers board.
///
/// This type only guards the occupancy of its cells, it knows nothing about
/// which moves are legal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// An empty board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// The starting position, with `rows_per_side` rows of men for each player.
    ///
    /// Two empty rows separate the armies, so the board has `2 * rows_per_side + 2` rows.
    /// Men are only placed on cells where `row + col` is odd, so the armies can meet.
    ///
    /// On boards with an odd number of columns the home rows of each side may hold a
    /// different number of such cells. The larger army then leaves out its men nearest
    /// the centre, so both sides always start with the same number of men.
    pub fn populate(rows_per_side: usize, cols: usize) -> Self {
        let rows = 2 * rows_per_side + 2;
        let mut board = Board::new(rows, cols);

        let squares = |band: Range<usize>| -> Vec<(usize, usize)> {
            band.flat_map(|row| (0..cols).map(move |col| (row, col)))
                .filter(|(row, col)| (row + col) % 2 == 1)
                .collect()
        };

        let white = squares(0..rows_per_side);
        let black = squares(rows - rows_per_side..rows);
        let men = white.len().min(black.len());

        let army = white[..men]
            .iter()
            .map(|&s| (Color::White, s))
            .chain(black[black.len() - men..].iter().map(|&s| (Color::Black, s)));

        for (id, (owner, (row, col))) in (0..).zip(army) {
            let square = Square::new(row as i32, col as i32);
            board.cells[row * cols + col] = Some(Piece::new(PieceId(id), owner, square));
        }

        board
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cells of the board, row by row.
    pub fn grid(&self) -> impl ExactSizeIterator<Item = &[Option<Piece>]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// An iterator over all pieces on the board, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }

    /// An iterator over the pieces of a [`Color`], in row-major order.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = &Piece> {
        self.iter().filter(move |p| p.owner() == c)
    }

    /// The [`Piece`] on a [`Square`], if any.
    pub fn get(&self, s: Square) -> Option<&Piece> {
        self.index_of(s).and_then(|i| self.cells[i].as_ref())
    }

    /// Whether a [`Square`] lies within the board.
    pub fn is_on_grid(&self, s: Square) -> bool {
        (0..self.rows as i32).contains(&s.row) && (0..self.cols as i32).contains(&s.col)
    }

    /// Whether a [`Square`] lies within the board and holds no piece.
    pub fn is_empty_cell(&self, s: Square) -> bool {
        self.is_on_grid(s) && self.get(s).is_none()
    }

    /// The row a man of this [`Color`] promotes on.
    pub fn far_edge(&self, c: Color) -> i32 {
        match c {
            Color::White => self.rows as i32 - 1,
            Color::Black => 0,
        }
    }

    /// The row this [`Color`] defends.
    pub fn home_row(&self, c: Color) -> i32 {
        self.far_edge(!c)
    }

    /// Whether a [`Square`] lies on any of the four edges of the board.
    pub fn is_edge(&self, s: Square) -> bool {
        let (last_row, last_col) = (self.rows as i32 - 1, self.cols as i32 - 1);
        s.row == 0 || s.col == 0 || s.row == last_row || s.col == last_col
    }

    /// The outermost playable cells on both ends of both home rows.
    pub fn defensive_squares(&self) -> impl Iterator<Item = Square> + '_ {
        [Color::White, Color::Black]
            .into_iter()
            .map(move |c| self.home_row(c))
            .flat_map(move |row| {
                let mut cols = (0..self.cols as i32).filter(move |col| (row + col) % 2 == 1);
                let first = cols.next();
                let last = cols.last();
                first
                    .into_iter()
                    .chain(last)
                    .map(move |col| Square::new(row, col))
            })
    }

    /// Places a [`Piece`] on the board at its recorded position.
    #[instrument(level = "trace", skip(self), err)]
    pub fn place_piece(&mut self, piece: Piece) -> Result<(), BoardError> {
        let s = piece.position();
        let i = self.index_of(s).ok_or(BoardError::OutOfBounds(s))?;

        match &mut self.cells[i] {
            Some(_) => Err(BoardError::OccupiedCell(s)),
            cell @ None => {
                *cell = Some(piece);
                Ok(())
            }
        }
    }

    /// Clears the cell at the [`Piece`]'s recorded position and returns its occupant.
    #[instrument(level = "trace", skip(self), err)]
    pub fn remove_piece(&mut self, piece: &Piece) -> Result<Piece, BoardError> {
        let s = piece.position();
        let i = self.index_of(s).ok_or(BoardError::OutOfBounds(s))?;
        self.cells[i].take().ok_or(BoardError::EmptyCell(s))
    }

    /// Relocates the piece on `from` to `to`.
    ///
    /// A relocation that spans more than one diagonal step captures the piece
    /// immediately before `to`, which is returned. A man that lands on its far
    /// edge is promoted.
    #[instrument(level = "trace", skip(self), err)]
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        let i = self.index_of(from).ok_or(BoardError::OutOfBounds(from))?;
        let j = self.index_of(to).ok_or(BoardError::OutOfBounds(to))?;

        if self.cells[i].is_none() {
            return Err(BoardError::NoPiece(from));
        } else if self.cells[j].is_some() {
            return Err(BoardError::OccupiedCell(to));
        }

        let captured = match from.diagonal_to(to) {
            Some(d) if from.rows_to(to) >= 2 => {
                let victim = to.step(d.reverse());
                self.index_of(victim).and_then(|k| self.cells[k].take())
            }
            _ => None,
        };

        if let Some(mut piece) = self.cells[i].take() {
            piece.relocate(to);

            if !piece.is_king() && to.row == self.far_edge(piece.owner()) {
                piece.transform();
            }

            self.cells[j] = Some(piece);
        }

        Ok(captured)
    }

    fn index_of(&self, s: Square) -> Option<usize> {
        if self.is_on_grid(s) {
            Some(s.row as usize * self.cols + s.col as usize)
        } else {
            None
        }
    }
}

/// Retrieves the cell at a given [`Square`].
///
/// # Panics
///
/// Panics if the square is off the board.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, s: Square) -> &Self::Output {
        match self.index_of(s) {
            Some(i) => &self.cells[i],
            None => panic!("square `{}` is off the board", s),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "+---".repeat(self.cols) + "+";

        writeln!(f, "{}", separator)?;
        for row in self.grid() {
            f.write_char('|')?;

            for cell in row {
                let glyph = match cell {
                    None => ' ',
                    Some(p) => match (p.owner(), p.is_king()) {
                        (Color::White, false) => 'w',
                        (Color::White, true) => 'W',
                        (Color::Black, false) => 'b',
                        (Color::Black, true) => 'B',
                    },
                };

                write!(f, " {} |", glyph)?;
            }

            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn piece(id: u16, owner: Color, row: i32, col: i32) -> Piece {
        Piece::new(PieceId(id.into()), owner, Square::new(row, col))
    }

    #[proptest]
    fn is_on_grid_matches_the_board_dimensions(
        #[strategy(1usize..12)] rows: usize,
        #[strategy(1usize..12)] cols: usize,
        s: Square,
    ) {
        let board = Board::new(rows, cols);
        let inside = s.row >= 0 && s.col >= 0 && (s.row as usize) < rows && (s.col as usize) < cols;
        assert_eq!(board.is_on_grid(s), inside);
    }

    #[proptest]
    fn squares_off_the_board_are_never_empty_cells(s: Square) {
        let board = Board::new(4, 4);
        if !board.is_on_grid(s) {
            assert!(!board.is_empty_cell(s));
        }
    }

    #[proptest]
    fn placed_piece_occupies_its_cell(
        #[strategy(0i32..8)] row: i32,
        #[strategy(0i32..8)] col: i32,
        c: Color,
    ) {
        let mut board = Board::new(8, 8);
        let p = piece(0, c, row, col);

        assert_eq!(board.place_piece(p), Ok(()));
        assert!(!board.is_empty_cell(p.position()));
        assert_eq!(board[p.position()], Some(p));
    }

    #[proptest]
    fn placing_on_an_occupied_cell_fails(
        #[strategy(0i32..8)] row: i32,
        #[strategy(0i32..8)] col: i32,
        a: Color,
        b: Color,
    ) {
        let mut board = Board::new(8, 8);
        board.place_piece(piece(0, a, row, col))?;

        let s = Square::new(row, col);
        assert_eq!(board.place_piece(piece(1, b, row, col)), Err(BoardError::OccupiedCell(s)));
        assert_eq!(board[s].map(|p| p.id()), Some(PieceId(0)));
    }

    #[proptest]
    fn placing_off_the_board_fails(
        #[filter(!Board::new(8, 8).is_on_grid(#s))] s: Square,
        c: Color,
    ) {
        let mut board = Board::new(8, 8);
        let p = Piece::new(PieceId(0), c, s);
        assert_eq!(board.place_piece(p), Err(BoardError::OutOfBounds(s)));
    }

    #[proptest]
    fn removing_a_piece_clears_its_cell(
        #[strategy(0i32..8)] row: i32,
        #[strategy(0i32..8)] col: i32,
        c: Color,
    ) {
        let mut board = Board::new(8, 8);
        let p = piece(0, c, row, col);
        board.place_piece(p)?;

        assert_eq!(board.remove_piece(&p), Ok(p));
        assert!(board.is_empty_cell(p.position()));
        assert_eq!(board.remove_piece(&p), Err(BoardError::EmptyCell(p.position())));
    }

    #[proptest]
    fn moving_from_an_empty_cell_fails() {
        let mut board = Board::new(8, 8);
        let (from, to) = (Square::new(2, 1), Square::new(3, 2));
        assert_eq!(board.move_piece(from, to), Err(BoardError::NoPiece(from)));
    }

    #[proptest]
    fn moving_onto_an_occupied_cell_fails() {
        let mut board = Board::new(8, 8);
        board.place_piece(piece(0, Color::White, 2, 1))?;
        board.place_piece(piece(1, Color::Black, 3, 2))?;

        let (from, to) = (Square::new(2, 1), Square::new(3, 2));
        assert_eq!(board.move_piece(from, to), Err(BoardError::OccupiedCell(to)));
        assert_eq!(board.iter().count(), 2);
    }

    #[proptest]
    fn moving_a_single_step_relocates_without_capturing() {
        let mut board = Board::new(8, 8);
        board.place_piece(piece(0, Color::White, 2, 1))?;
        board.place_piece(piece(1, Color::Black, 5, 4))?;

        assert_eq!(board.move_piece(Square::new(2, 1), Square::new(3, 2)), Ok(None));
        assert!(board.is_empty_cell(Square::new(2, 1)));
        assert_eq!(board.get(Square::new(3, 2)).map(|p| p.position()), Some(Square::new(3, 2)));
        assert_eq!(board.iter().count(), 2);
    }

    #[proptest]
    fn jumping_captures_the_piece_in_between() {
        let mut board = Board::new(8, 8);
        board.place_piece(piece(0, Color::White, 2, 1))?;
        board.place_piece(piece(1, Color::Black, 3, 2))?;

        let captured = board.move_piece(Square::new(2, 1), Square::new(4, 3))?;
        assert_eq!(captured.map(|p| p.id()), Some(PieceId(1)));
        assert!(board.is_empty_cell(Square::new(3, 2)));
        assert_eq!(board.pieces(Color::Black).count(), 0);
    }

    #[proptest]
    fn long_jump_captures_the_piece_before_the_landing_square() {
        let mut board = Board::new(8, 8);
        let mut king = piece(0, Color::White, 0, 1);
        king.transform();
        board.place_piece(king)?;
        board.place_piece(piece(1, Color::Black, 4, 5))?;

        let captured = board.move_piece(Square::new(0, 1), Square::new(5, 6))?;
        assert_eq!(captured.map(|p| p.id()), Some(PieceId(1)));
        assert_eq!(board.iter().count(), 1);
    }

    #[proptest]
    fn man_promotes_on_its_far_edge(c: Color) {
        let mut board = Board::new(6, 9);
        let edge = board.far_edge(c);
        let from = Square::new(edge - c.advance(), 4);
        let to = Square::new(edge, 5);

        board.place_piece(Piece::new(PieceId(0), c, from))?;
        board.move_piece(from, to)?;

        assert_eq!(board.get(to).map(|p| p.is_king()), Some(true));
    }

    #[proptest]
    fn promotion_is_never_reversed(c: Color) {
        let mut board = Board::new(8, 8);
        let edge = board.far_edge(c);
        let from = Square::new(edge - c.advance(), 3);
        let to = Square::new(edge, 4);

        board.place_piece(Piece::new(PieceId(0), c, from))?;
        board.move_piece(from, to)?;
        board.move_piece(to, from)?;
        board.move_piece(from, to)?;

        assert_eq!(board.get(to).map(|p| p.is_king()), Some(true));
    }

    #[proptest]
    fn far_edge_depends_on_rows_not_columns() {
        let board = Board::new(6, 10);
        assert_eq!(board.far_edge(Color::White), 5);
        assert_eq!(board.far_edge(Color::Black), 0);
        assert_eq!(board.home_row(Color::White), 0);
        assert_eq!(board.home_row(Color::Black), 5);
    }

    #[proptest]
    fn populate_fills_the_home_rows(
        #[strategy(1usize..5)] n: usize,
        #[strategy(2usize..12)] cols: usize,
    ) {
        let board = Board::populate(n, cols);

        assert_eq!(board.rows(), 2 * n + 2);
        assert_eq!(board.cols(), cols);
        assert_eq!(board.pieces(Color::White).count(), board.pieces(Color::Black).count());

        for p in board.iter() {
            let s = p.position();
            assert_eq!(board[s], Some(*p));
            assert_eq!((s.row + s.col) % 2, 1);
            assert!(!p.is_king());

            match p.owner() {
                Color::White => assert!((s.row as usize) < n),
                Color::Black => assert!((s.row as usize) >= n + 2),
            }
        }
    }

    #[proptest]
    fn populate_matches_the_armies_on_odd_widths(
        #[strategy(1usize..5)] n: usize,
        #[strategy(1usize..6)] k: usize,
    ) {
        let cols = 2 * k + 1;
        let board = Board::populate(n, cols);
        let white = board.pieces(Color::White).count();
        let black = board.pieces(Color::Black).count();

        assert_eq!(white, black);
        assert_eq!(white, n * cols / 2);
        let home = board.home_row(Color::Black);
        assert!(board.pieces(Color::Black).any(|p| p.position().row == home));
    }

    #[proptest]
    fn populate_fills_every_playable_cell_on_even_widths(
        #[strategy(1usize..5)] n: usize,
        #[strategy(1usize..6)] k: usize,
    ) {
        let cols = 2 * k;
        let board = Board::populate(n, cols);
        assert_eq!(board.pieces(Color::White).count(), n * cols / 2);
        assert_eq!(board.pieces(Color::Black).count(), n * cols / 2);
    }

    #[proptest]
    fn populate_assigns_distinct_ids(
        #[strategy(1usize..5)] n: usize,
        #[strategy(2usize..12)] cols: usize,
    ) {
        let board = Board::populate(n, cols);
        let mut ids: Vec<_> = board.iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), board.iter().count());
    }

    #[proptest]
    fn grid_is_row_major() {
        let board = Board::populate(3, 8);
        for (r, row) in board.grid().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(cell, &board[Square::new(r as i32, c as i32)]);
            }
        }
    }

    #[proptest]
    fn defensive_squares_are_the_outer_playable_cells_of_the_home_rows() {
        let board = Board::new(8, 8);
        let mut squares: Vec<_> = board.defensive_squares().collect();
        squares.sort();

        assert_eq!(
            squares,
            vec![
                Square::new(0, 1),
                Square::new(0, 7),
                Square::new(7, 0),
                Square::new(7, 6)
            ]
        );
    }

    #[proptest]
    fn board_displays_one_glyph_per_piece() {
        let board = Board::populate(1, 4);
        let text = board.to_string();
        assert_eq!(text.matches('w').count(), 2);
        assert_eq!(text.matches('b').count(), 2);
        assert_eq!(text.lines().count(), 2 * board.rows() + 1);
    }
}
