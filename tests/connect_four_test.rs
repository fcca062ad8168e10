//! Integration test: Connect Four gravity, win detection and tactical play
//!
//! Tests that pieces stack from the bottom, that full columns are refused
//! without touching the board, and that the Hard AI blocks immediate threats
//! and never sets up the opponent's winning cell.

use arcade::ai::{Difficulty, Horizon, SearchEngine};
use arcade::board::{check_winner, outcome_after_move};
use arcade::{
    Board, ConnectFour, GameConfig, GameController, GameEvent, GameResult, MoveError, Player, Pos,
    Rules,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows, 4).unwrap()
}

fn hard_move(rows: &[&str]) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let config = GameConfig::for_game::<ConnectFour>(Difficulty::Hard);
    let mut game = GameController::<ConnectFour>::resume(config, rows, Player::Ai).unwrap();
    match game.play_ai_turn(&mut rng).first() {
        Some(GameEvent::MoveApplied { pos, .. }) => pos.col,
        other => panic!("expected a move, got {:?}", other),
    }
}

// =============================================================================
// Gravity
// =============================================================================

#[test]
fn test_pieces_stack_from_the_bottom() {
    let mut b = ConnectFour::new_board();
    for (expected_row, player) in [(5, Player::Human), (4, Player::Ai), (3, Player::Human)] {
        assert_eq!(b.drop_piece(4, player), Ok(Pos::new(expected_row, 4)));
    }
    assert_eq!(b.landing_row(4), Some(2));
    assert_eq!(b.landing_row(0), Some(5));
}

#[test]
fn test_full_column_refused_without_change() {
    let mut b = ConnectFour::new_board();
    let mut player = Player::Human;
    for _ in 0..ConnectFour::ROWS {
        b.drop_piece(6, player).unwrap();
        player = player.opponent();
    }
    let before = b.clone();

    assert_eq!(b.drop_piece(6, player), Err(MoveError::ColumnFull));
    assert_eq!(b, before);
    assert!(!ConnectFour::legal_moves(&b).contains(&6));
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_wins_in_every_direction() {
    let horizontal = board(&[
        ".......", ".......", ".......", ".......", "XXX....", "OOOO...",
    ]);
    let vertical = board(&[
        ".......", ".......", "...X...", "...X..O", "...X..O", "...X..O",
    ]);
    let rising = board(&[
        ".......", ".......", "...O...", "..OX...", ".OXX...", "OXXO...",
    ]);
    let falling = board(&[
        ".......", ".......", "X......", "OX.....", "OOX....", "XOOX...",
    ]);

    assert_eq!(check_winner(&horizontal).winner(), Some(Player::Human));
    assert_eq!(check_winner(&vertical).winner(), Some(Player::Ai));
    assert_eq!(check_winner(&rising).winner(), Some(Player::Human));
    assert_eq!(check_winner(&falling).winner(), Some(Player::Ai));
}

#[test]
fn test_mirrored_board_has_same_winner() {
    let rows = [
        ".......", ".......", "...O...", "..OX...", ".OXX...", "OXXO...",
    ];
    let mirrored: Vec<String> = rows.iter().map(|r| r.chars().rev().collect()).collect();
    let refs: Vec<&str> = mirrored.iter().map(String::as_str).collect();
    assert_eq!(check_winner(&board(&refs)).winner(), Some(Player::Human));
}

#[test]
fn test_winning_line_covers_whole_run() {
    let mut b = board(&[
        ".......", ".......", ".......", ".......", ".......", "OO.OO..",
    ]);
    let pos = b.drop_piece(2, Player::Human).unwrap();
    match outcome_after_move(&b, pos) {
        GameResult::Win { player, line } => {
            assert_eq!(player, Player::Human);
            assert_eq!(line, (0..5).map(|c| Pos::new(5, c)).collect::<Vec<_>>());
        }
        other => panic!("expected a win, got {:?}", other),
    }
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_hard_blocks_horizontal_threat() {
    let col = hard_move(&[
        ".......", ".......", ".......", ".......", "XX.....", "OOO....",
    ]);
    assert_eq!(col, 3);
}

#[test]
fn test_hard_takes_immediate_win() {
    let col = hard_move(&[
        ".......", ".......", ".......", "X......", "X.O....", "X.OO...",
    ]);
    assert_eq!(col, 0);
}

#[test]
fn test_hard_does_not_open_diagonal() {
    // Human holds (5,0), (4,1), (3,2); playing column 3 would let the human
    // finish the diagonal on (2,3).
    let rows = [
        ".......", ".......", ".......", "..O....", ".OXX...", "OXXO..O",
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let config = GameConfig::for_game::<ConnectFour>(Difficulty::Hard);
    let mut game = GameController::<ConnectFour>::resume(config, &rows, Player::Ai).unwrap();
    game.play_ai_turn(&mut rng);

    let last = game.last_move().unwrap();
    assert_ne!(last.col, 3);

    // No human reply wins on the spot
    for col in ConnectFour::legal_moves(game.board()) {
        let mut b = game.board().clone();
        let pos = b.drop_piece(col, Player::Human).unwrap();
        assert_ne!(
            outcome_after_move(&b, pos).winner(),
            Some(Player::Human),
            "column {}",
            col
        );
    }
}

#[test]
fn test_pruning_matches_plain_minimax_mid_game() {
    let b = board(&[
        ".......", ".......", "...X...", "..OO...", "..XXO..", ".OXOX..",
    ]);
    for depth in 1..=4 {
        let mut pruned = SearchEngine::<ConnectFour>::new(Horizon::Plies(depth));
        let mut plain = SearchEngine::<ConnectFour>::new(Horizon::Plies(depth)).without_pruning();
        assert_eq!(
            pruned.best_move(&b, Player::Human),
            plain.best_move(&b, Player::Human),
            "depth {}",
            depth
        );
    }
}
