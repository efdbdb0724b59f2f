//! End-to-end games driven through the public engine API.

use connect_four::error::GameError;
use connect_four::game::{
    BoardSize, Cell, Color, GameEngine, GameStatus, Outcome, Player, PlayerId, MAX_DIMENSION,
};

fn new_game() -> GameEngine {
    let mut engine = GameEngine::default();
    engine
        .start_game(
            Player::new(PlayerId::One, Color::RED),
            Player::new(PlayerId::Two, Color::YELLOW),
        )
        .unwrap();
    engine
}

fn play_all(engine: &mut GameEngine, columns: &[isize]) -> Vec<Outcome> {
    columns
        .iter()
        .map(|&col| engine.drop_piece(col).unwrap().outcome)
        .collect()
}

/// A full 6x7 game in which nobody ever connects four.
const TIE_GAME: [isize; 42] = [
    0, 3, 0, 6, 1, 3, 0, 5, 4, 1, 1, 1, 1, 2, 4, 3, 5, 2, 3, 3, 1, 0, 0, 5, 3, 0, 2, 6, 6, 2,
    2, 6, 6, 4, 6, 2, 4, 4, 5, 5, 4, 5,
];

/// A full 6x7 game whose final move, filling the last cell, wins for player 2.
const LAST_CELL_WIN: [isize; 42] = [
    4, 1, 6, 2, 1, 0, 1, 4, 4, 2, 4, 1, 3, 6, 3, 3, 1, 0, 4, 6, 6, 1, 2, 3, 6, 0, 6, 4, 2, 5,
    5, 3, 3, 2, 0, 5, 2, 5, 0, 5, 0, 5,
];

#[test]
fn test_alternating_drops_win_along_bottom_row() {
    let mut engine = new_game();
    let outcomes = play_all(&mut engine, &[0, 0, 1, 0, 2, 0, 3]);

    assert_eq!(outcomes[..6], [Outcome::Continue; 6]);
    assert_eq!(outcomes[6], Outcome::Win(PlayerId::One));

    let board = engine.board().unwrap();
    for col in 0..4 {
        assert_eq!(board.get(5, col), Some(Cell::Occupied(PlayerId::One)));
    }
    for row in 2..5 {
        assert_eq!(board.get(row, 0), Some(Cell::Occupied(PlayerId::Two)));
    }
}

#[test]
fn test_vertical_win_in_first_column() {
    let mut engine = new_game();
    let outcomes = play_all(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(outcomes[6], Outcome::Win(PlayerId::One));
    assert_eq!(
        engine.board().unwrap().winning_line(PlayerId::One),
        Some([(2, 0), (3, 0), (4, 0), (5, 0)])
    );
}

#[test]
fn test_overfilled_column_reports_full() {
    let mut engine = new_game();
    let height = engine.size().height;
    for _ in 0..height {
        engine.drop_piece(4).unwrap();
    }
    let before = engine.board().cloned();

    assert_eq!(
        engine.drop_piece(4),
        Err(GameError::ColumnFull { column: 4 })
    );
    assert_eq!(engine.board().cloned(), before);
    assert_eq!(engine.move_count(), height);
}

#[test]
fn test_full_board_without_line_is_a_tie_once() {
    let mut engine = new_game();
    let outcomes = play_all(&mut engine, &TIE_GAME);

    let ties = outcomes.iter().filter(|&&o| o == Outcome::Tie).count();
    assert_eq!(ties, 1);
    assert_eq!(outcomes[41], Outcome::Tie);
    assert!(outcomes[..41].iter().all(|&o| o == Outcome::Continue));

    assert_eq!(engine.status(), GameStatus::Over);
    assert_eq!(engine.outcome(), Some(Outcome::Tie));
    assert!(engine.board().unwrap().is_full());
    // Player 2 made the last move and stays active
    assert_eq!(engine.active_player(), Some(PlayerId::Two));

    // Every column is full, but the game being over takes precedence
    for col in 0..7 {
        assert_eq!(
            engine.drop_piece(col),
            Err(GameError::InvalidState {
                status: GameStatus::Over,
                operation: "drop a piece",
            })
        );
    }
    assert_eq!(engine.active_player(), Some(PlayerId::Two));
}

#[test]
fn test_win_on_last_cell_beats_tie() {
    let mut engine = new_game();
    let outcomes = play_all(&mut engine, &LAST_CELL_WIN);

    assert_eq!(outcomes[41], Outcome::Win(PlayerId::Two));
    assert!(engine.board().unwrap().is_full());
    assert_eq!(engine.outcome(), Some(Outcome::Win(PlayerId::Two)));
}

#[test]
fn test_out_of_range_columns_rejected_in_every_status() {
    let mut engine = GameEngine::default();
    let width = engine.size().width as isize;

    let check = |engine: &mut GameEngine| {
        for col in [-1, width] {
            assert_eq!(
                engine.drop_piece(col),
                Err(GameError::InvalidColumn {
                    column: col,
                    width: width as usize,
                })
            );
        }
    };

    check(&mut engine);
    let mut engine = new_game();
    check(&mut engine);
    play_all(&mut engine, &[0, 0, 1, 0, 2, 0, 3]);
    assert_eq!(engine.status(), GameStatus::Over);
    check(&mut engine);
}

#[test]
fn test_drop_before_start_is_invalid_state() {
    let mut engine = GameEngine::default();
    assert!(matches!(
        engine.drop_piece(0),
        Err(GameError::InvalidState {
            status: GameStatus::Idle,
            ..
        })
    ));
    assert!(engine.board().is_none());
}

#[test]
fn test_drop_after_reset_is_invalid_state() {
    let mut engine = new_game();
    engine.drop_piece(0).unwrap();
    engine.reset();
    assert!(matches!(
        engine.drop_piece(0),
        Err(GameError::InvalidState { .. })
    ));
}

#[test]
fn test_engine_rejects_unplayable_sizes() {
    for size in [
        BoardSize::new(0, 7),
        BoardSize::new(6, 0),
        BoardSize::new(MAX_DIMENSION + 1, 7),
        BoardSize::new(usize::MAX, 2),
    ] {
        assert_eq!(
            GameEngine::new(size).err(),
            Some(GameError::InvalidBoardSize {
                height: size.height,
                width: size.width,
                max: MAX_DIMENSION,
            })
        );
    }
}

#[test]
fn test_independent_engines_do_not_share_state() {
    let mut a = new_game();
    let mut b = GameEngine::new(BoardSize::new(5, 5)).unwrap();
    a.drop_piece(0).unwrap();
    assert_eq!(b.status(), GameStatus::Idle);
    assert!(b.drop_piece(0).is_err());
    assert_eq!(a.move_count(), 1);
}
