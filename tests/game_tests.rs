use tictactoe::{GameEngine, GameStatus, Mark, MoveError};

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Mark::X);
    assert_eq!(engine.board().empty_count(), 9);
}

#[test]
fn test_players_alternate() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.current_player(), Mark::X);
    engine.play(0, 0).unwrap();
    assert_eq!(engine.current_player(), Mark::O);
    engine.play(1, 1).unwrap();
    assert_eq!(engine.current_player(), Mark::X);
}

#[test]
fn test_top_row_win_halts_match() {
    // X:(0,0) O:(1,1) X:(0,1) O:(2,2) X:(0,2) -> X wins the top row
    let mut engine = GameEngine::new();
    assert_eq!(engine.play(0, 0).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.play(1, 1).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.play(0, 1).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.play(2, 2).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.play(0, 2).unwrap(), GameStatus::Won(Mark::X));
    assert_eq!(engine.status(), GameStatus::Won(Mark::X));

    // terminal state accepts no further moves
    assert_eq!(engine.play(2, 0).unwrap_err(), MoveError::MatchOver);
}

#[test]
fn test_illegal_move_keeps_turn_and_board() {
    let mut engine = GameEngine::new();
    engine.play(1, 1).unwrap(); // X
    let board_before = *engine.board();

    // O targets the occupied centre
    assert_eq!(
        engine.play(1, 1).unwrap_err(),
        MoveError::IllegalMove { row: 1, col: 1 }
    );
    assert_eq!(engine.current_player(), Mark::O);
    assert_eq!(*engine.board(), board_before);

    // same player may then play a legal move
    assert_eq!(engine.play(0, 0).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Mark::X);
}

#[test]
fn test_out_of_range_move_is_illegal_not_fatal() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.play(7, 0).unwrap_err(),
        MoveError::IllegalMove { row: 7, col: 0 }
    );
    assert_eq!(engine.current_player(), Mark::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_nine_moves_without_a_line_is_a_draw() {
    // Fills to  X X O
    //           O O X
    //           X X O   with no three-in-a-line for either mark.
    let moves = [
        (0, 0), // X
        (0, 2), // O
        (0, 1), // X
        (1, 0), // O
        (1, 2), // X
        (1, 1), // O
        (2, 0), // X
        (2, 2), // O
        (2, 1), // X
    ];
    let mut engine = GameEngine::new();
    for (i, &(row, col)) in moves.iter().enumerate() {
        let status = engine.play(row, col).unwrap();
        if i < moves.len() - 1 {
            assert_eq!(status, GameStatus::InProgress, "move {}", i);
        } else {
            assert_eq!(status, GameStatus::Draw);
        }
    }
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.play(0, 0).unwrap_err(), MoveError::MatchOver);
}

#[test]
fn test_winning_move_that_fills_the_board_reports_win_not_draw() {
    // Same fill as the draw test but with the last two moves swapped so the
    // ninth move completes column 1 for X.
    let moves = [
        (0, 0), // X
        (0, 2), // O
        (0, 1), // X
        (1, 0), // O
        (1, 2), // X
        (2, 0), // O
        (1, 1), // X
        (2, 2), // O
        (2, 1), // X completes column 1 and fills the board
    ];
    let mut engine = GameEngine::new();
    for &(row, col) in &moves[..8] {
        assert_eq!(engine.play(row, col).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(engine.play(2, 1).unwrap(), GameStatus::Won(Mark::X));
}

#[test]
fn test_no_moves_available_is_a_draw() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.no_moves_available(), GameStatus::Draw);
    assert_eq!(engine.status(), GameStatus::Draw);
}

#[test]
fn test_no_moves_available_does_not_overwrite_a_win() {
    let mut engine = GameEngine::new();
    engine.play(0, 0).unwrap();
    engine.play(1, 0).unwrap();
    engine.play(0, 1).unwrap();
    engine.play(1, 1).unwrap();
    assert_eq!(engine.play(0, 2).unwrap(), GameStatus::Won(Mark::X));
    assert_eq!(engine.no_moves_available(), GameStatus::Won(Mark::X));
}
