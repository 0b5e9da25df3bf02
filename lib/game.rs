use crate::bot::Choose;
use crate::checkers::{Board, BoardError, Color, Move, Outcome, Piece, Rules};
use derive_more::{Display, Error};
use tracing::{field::display, info, instrument, Span};

/// The reason why a [`Move`] could not be played.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum GameError {
    #[display(fmt = "the game is over, {}", _0)]
    GameOver(#[error(not(source))] Outcome),

    #[display(fmt = "move `{}` is illegal in this position", _0)]
    IllegalMove(#[error(not(source))] Move),

    #[display(fmt = "the {} player did not choose a move", _0)]
    NoMoveChosen(#[error(not(source))] Color),

    #[display(fmt = "{}", _0)]
    Board(BoardError),
}

/// Holds the state of a game of checkers.
///
/// Black moves first. The side to move loses once it runs out of legal moves.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Color,
    plies: usize,
    max_plies: Option<usize>,
    draw: bool,
}

impl Game {
    /// Starts a game from the given [`Board`].
    pub fn new(board: Board) -> Self {
        Game {
            board,
            turn: Color::FIRST,
            plies: 0,
            max_plies: None,
            draw: false,
        }
    }

    /// Declares the game drawn once `max_plies` moves have been played.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// How many moves have been played.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// The legal moves of the side to move.
    pub fn moves(&self) -> Vec<Move> {
        Rules::new(&self.board).moves(self.turn)
    }

    /// The [`Outcome`] of the game, if it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.conclude(&self.moves())
    }

    fn conclude(&self, moves: &[Move]) -> Option<Outcome> {
        if self.draw {
            Some(Outcome::DrawByAgreement)
        } else if moves.is_empty() {
            Some(Outcome::Win(!self.turn))
        } else if self.max_plies.map_or(false, |n| self.plies >= n) {
            Some(Outcome::DrawByPlyLimit)
        } else {
            None
        }
    }

    /// Both players agree to end the game in a draw.
    pub fn agree_draw(&mut self) {
        self.draw = true;
    }

    /// Plays a [`Move`] for the side to move, returning the pieces it captured.
    #[instrument(level = "debug", skip(self, m), fields(turn = %self.turn, %m), err)]
    pub fn play(&mut self, m: &Move) -> Result<Vec<Piece>, GameError> {
        let moves = self.moves();

        if let Some(o) = self.conclude(&moves) {
            return Err(GameError::GameOver(o));
        } else if !moves.contains(m) {
            return Err(GameError::IllegalMove(m.clone()));
        }

        let captured = Rules::new(&mut self.board)
            .make_move(m)
            .map_err(GameError::Board)?;

        self.turn = !self.turn;
        self.plies += 1;

        Ok(captured)
    }

    /// Lets `white` and `black` take turns until the game is over.
    #[instrument(level = "debug", skip(self, white, black), fields(outcome), err)]
    pub fn run<W: Choose, B: Choose>(
        &mut self,
        white: &mut W,
        black: &mut B,
    ) -> Result<Outcome, GameError> {
        loop {
            let moves = self.moves();

            if let Some(o) = self.conclude(&moves) {
                Span::current().record("outcome", display(o));
                info!(plies = self.plies, "{}", o);
                break Ok(o);
            }

            let choice = match self.turn {
                Color::White => white.choose(&self.board, &moves),
                Color::Black => black.choose(&self.board, &moves),
            };

            let m = choice.ok_or(GameError::NoMoveChosen(self.turn))?;
            self.play(&m)?;
        }
    }
}
