use super::{Board, BoardError, Color, Diagonal, Move, Piece, Square};
use derive_more::Constructor;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// The rules of checkers, applied to a borrowed [`Board`].
///
/// Capturing is mandatory: whenever a player can jump, only jumps are legal.
/// Men move and capture forward only, kings move one square in any diagonal
/// direction and capture at any distance along a clear diagonal.
#[derive(Debug, Clone, Constructor)]
pub struct Rules<B> {
    board: B,
}

impl<B: Deref<Target = Board>> Rules<B> {
    /// The [`Board`] these rules apply to.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The legal [`Move`]s of a player.
    ///
    /// An empty list means the player has lost.
    #[instrument(level = "trace", skip(self))]
    pub fn moves(&self, c: Color) -> Vec<Move> {
        let jumps = self.all_jumps(c);

        if !jumps.is_empty() {
            debug!(player = %c, jumps = jumps.len(), "capture is mandatory");
            return jumps;
        }

        self.board.pieces(c).flat_map(|p| self.steps(p)).collect()
    }

    /// Every jump chain available to the pieces of a player.
    pub fn all_jumps(&self, c: Color) -> Vec<Move> {
        self.board.pieces(c).flat_map(|p| self.jumps(p)).collect()
    }

    /// The non-capturing single steps available to a [`Piece`].
    pub fn steps(&self, piece: &Piece) -> Vec<Move> {
        diagonals(piece)
            .map(|d| piece.position().step(d))
            .filter(|&s| self.board.is_empty_cell(s))
            .map(|s| Move::new(*piece, vec![s]))
            .collect()
    }

    /// The jump chains available to a [`Piece`], one per maximal sequence of captures.
    pub fn jumps(&self, piece: &Piece) -> Vec<Move> {
        self.chains(piece, piece.position(), &[])
            .into_iter()
            .map(|path| Move::new(*piece, path))
            .collect()
    }

    fn chains(&self, piece: &Piece, from: Square, blocked: &[Square]) -> Vec<Vec<Square>> {
        let mut chains = Vec::new();

        for d in diagonals(piece) {
            let Some((victim, landing)) = self.capture(piece, from, d, blocked) else {
                continue;
            };

            let mut blocked = blocked.to_vec();
            blocked.push(victim);

            let tails = self.chains(piece, landing, &blocked);

            if tails.is_empty() {
                chains.push(vec![landing]);
            }

            for tail in tails {
                let mut chain = Vec::with_capacity(tail.len() + 1);
                chain.push(landing);
                chain.extend(tail);
                chains.push(chain);
            }
        }

        chains
    }

    /// The square captured and the square landed on by jumping from `from` along `d`.
    fn capture(
        &self,
        piece: &Piece,
        from: Square,
        d: Diagonal,
        blocked: &[Square],
    ) -> Option<(Square, Square)> {
        // The piece has left its origin once the chain is under way.
        let is_vacant = |s: Square| s == piece.position() || self.board.is_empty_cell(s);

        let mut candidate = from.step(d);
        if piece.is_king() {
            while is_vacant(candidate) {
                candidate = candidate.step(d);
            }
        }

        let target = self.board.get(candidate)?;
        let landing = candidate.step(d);

        let capturable = target.owner() != piece.owner() && !blocked.contains(&candidate);
        (capturable && is_vacant(landing)).then_some((candidate, landing))
    }
}

impl<B: DerefMut<Target = Board>> Rules<B> {
    /// Plays a [`Move`], returning the pieces it captured.
    ///
    /// The move is executed hop by hop, each hop possibly capturing and promoting.
    /// Fails if the move no longer matches the board.
    #[instrument(level = "trace", skip(self, m), fields(%m), err)]
    pub fn make_move(&mut self, m: &Move) -> Result<Vec<Piece>, BoardError> {
        match self.board.get(m.whence()) {
            Some(p) if p.id() == m.piece().id() => {}
            _ => return Err(BoardError::NoPiece(m.whence())),
        }

        let mut captured = Vec::with_capacity(m.path().len());
        for (from, to) in m.hops() {
            captured.extend(self.board.move_piece(from, to)?);
        }

        Ok(captured)
    }
}

/// The diagonals a [`Piece`] may travel along.
fn diagonals(piece: &Piece) -> impl Iterator<Item = Diagonal> {
    let c = piece.owner();
    let n = if piece.is_king() { 4 } else { 2 };
    c.forward().into_iter().chain(c.backward()).take(n)
}
