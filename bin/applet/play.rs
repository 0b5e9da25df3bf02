use crate::player::PlayerConfig;
use anyhow::{ensure, Context, Error as Anyhow};
use clap::Parser;
use lib::checkers::{Board, Color, Player};
use lib::game::Game;
use tracing::{info, instrument};

/// The most cells the home rows of one side may span.
const MAX_HOME_CELLS: usize = 1 << 16;

/// A match of checkers between two bots.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// How many games to play.
    #[clap(short = 'n', long, default_value_t = 1)]
    games: usize,

    /// How many rows of men each side starts with.
    #[clap(long, default_value_t = 3)]
    rows_per_side: usize,

    /// How many columns the board has.
    #[clap(long, default_value_t = 8)]
    cols: usize,

    /// Games still going after this many moves are drawn.
    #[clap(long, default_value_t = 200)]
    max_plies: usize,

    /// The player with the white pieces.
    #[clap(default_value_t)]
    white: PlayerConfig,

    /// The player with the black pieces.
    #[clap(default_value_t)]
    black: PlayerConfig,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            games: 1,
            rows_per_side: 3,
            cols: 8,
            max_plies: 200,
            white: PlayerConfig::default(),
            black: PlayerConfig::default(),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        ensure!(self.rows_per_side > 0, "each side needs at least one row of men");
        ensure!(self.cols > 1, "the board needs at least two columns");
        ensure!(
            matches!(self.rows_per_side.checked_mul(self.cols), Some(n) if n <= MAX_HOME_CELLS),
            "the board may not have more than {} cells per side",
            MAX_HOME_CELLS
        );

        let mut white = Player::new(self.white.to_string(), Color::White, self.white.into());
        let mut black = Player::new(self.black.to_string(), Color::Black, self.black.into());

        let (mut white_wins, mut black_wins, mut draws) = (0, 0, 0);

        for n in 1..=self.games {
            let board = Board::populate(self.rows_per_side, self.cols);
            let mut game = Game::new(board).with_max_plies(self.max_plies);

            let outcome = game
                .run(&mut white, &mut black)
                .with_context(|| format!("game {} was interrupted", n))?;

            match outcome.winner() {
                Some(Color::White) => white_wins += 1,
                Some(Color::Black) => black_wins += 1,
                None => draws += 1,
            }

            info!(
                game = n,
                plies = game.plies(),
                %outcome,
                white = %white,
                black = %black,
                white_wins,
                black_wins,
                draws,
            );

            println!("{}\n{}", outcome, game.board());
        }

        Ok(())
    }
}
