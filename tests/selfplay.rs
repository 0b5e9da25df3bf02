use lib::bot::{Heuristic, Random};
use lib::checkers::{Board, Color, Outcome, Rules};
use lib::game::Game;
use rayon::prelude::*;
use test_strategy::proptest;

#[proptest(cases = 8)]
fn bots_play_many_games_in_parallel(seed: u64) {
    let outcomes: Vec<_> = (0..16u64)
        .into_par_iter()
        .map(|n| {
            let mut game = Game::new(Board::populate(3, 8)).with_max_plies(150);
            let mut white = Heuristic::seeded(seed ^ n);
            let mut black = Random::seeded(seed.wrapping_add(n));
            let outcome = game.run(&mut white, &mut black);
            (game, outcome)
        })
        .collect();

    for (game, outcome) in outcomes {
        let outcome = outcome?;
        let board = game.board();

        assert!(board.pieces(Color::White).count() <= 12);
        assert!(board.pieces(Color::Black).count() <= 12);

        for p in board.iter() {
            assert_eq!(board[p.position()], Some(*p));
        }

        match outcome {
            Outcome::Win(c) => assert!(Rules::new(board).moves(!c).is_empty()),
            Outcome::DrawByPlyLimit => assert_eq!(game.plies(), 150),
            Outcome::DrawByAgreement => panic!("no draw was agreed"),
        }
    }
}

#[proptest(cases = 4)]
fn heuristic_bots_are_reproducible(seed: u64) {
    let play = || {
        let mut game = Game::new(Board::populate(3, 8)).with_max_plies(100);
        let outcome = game.run(&mut Heuristic::seeded(seed), &mut Heuristic::seeded(!seed));
        (outcome, game)
    };

    let (a, b) = rayon::join(play, play);
    assert_eq!(a, b);
}
