use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{
    has_won, random_empty_cell, GameEngine, GameStatus, Mark, BOARD_DIMENSION,
};

fn play_random_game(seed: u64) -> (GameEngine, usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    let mut rounds = 0;
    while engine.status() == GameStatus::InProgress {
        let (row, col) = random_empty_cell(engine.board(), &mut rng)
            .expect("in-progress game must have an empty cell");
        engine.play(row, col).unwrap();
        rounds += 1;
    }
    (engine, rounds)
}

fn count_marks(engine: &GameEngine, mark: Mark) -> usize {
    let mut n = 0;
    for row in 0..BOARD_DIMENSION {
        for col in 0..BOARD_DIMENSION {
            if engine.board().get(row, col).unwrap() == Some(mark) {
                n += 1;
            }
        }
    }
    n
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_games_end_within_nine_rounds(seed in any::<u64>()) {
        let (engine, rounds) = play_random_game(seed);
        prop_assert!(rounds <= 9);
        prop_assert!(matches!(
            engine.status(),
            GameStatus::Won(_) | GameStatus::Draw
        ));
    }

    #[test]
    fn alternation_keeps_mark_counts_balanced(seed in any::<u64>()) {
        let (engine, rounds) = play_random_game(seed);
        let x = count_marks(&engine, Mark::X);
        let o = count_marks(&engine, Mark::O);
        prop_assert_eq!(x + o, rounds);
        // X moves first, so it holds either the same number of cells or one more
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn reported_winner_owns_a_line_and_loser_does_not(seed in any::<u64>()) {
        let (engine, _) = play_random_game(seed);
        match engine.status() {
            GameStatus::Won(winner) => {
                prop_assert!(has_won(engine.board(), winner));
                prop_assert!(!has_won(engine.board(), winner.other()));
            }
            GameStatus::Draw => {
                prop_assert!(!has_won(engine.board(), Mark::X));
                prop_assert!(!has_won(engine.board(), Mark::O));
                prop_assert_eq!(engine.board().empty_count(), 0);
            }
            GameStatus::InProgress => prop_assert!(false, "game did not finish"),
        }
    }
}
