//! Integration tests for the turn layer: seat validation, turn order,
//! history, resignation, and bot play.

use weiqi_rust::board::{Board, MoveError};
use weiqi_rust::bot::RandomBot;
use weiqi_rust::game::{GameError, GameStatus, WeiqiGame, Winner};
use weiqi_rust::player::{Player, Seat};
use weiqi_rust::position::Position;
use weiqi_rust::stone::Stone;

// =============================================================================
// Helpers
// =============================================================================

fn pos(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

/// Human black against a seeded bot on a 9x9 board.
fn human_vs_bot() -> WeiqiGame<&'static str> {
    let board = Board::empty(9).unwrap();
    WeiqiGame::new(
        board,
        Seat::Human(Player::new("human", Stone::Black)),
        Seat::Bot(RandomBot::with_seed(Stone::White, 11)),
    )
    .unwrap()
}

fn human_vs_human() -> WeiqiGame<&'static str> {
    let board = Board::empty(9).unwrap();
    WeiqiGame::new(
        board,
        Seat::Human(Player::new("alpha", Stone::Black)),
        Seat::Human(Player::new("beta", Stone::White)),
    )
    .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_game_starts_with_black_to_move() {
    let game = human_vs_bot();
    assert_eq!(game.turn(), Stone::Black);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_seat().stone(), Stone::Black);
    assert!(game.history().is_empty());
}

#[test]
fn test_seats_must_match_their_colors() {
    let board = Board::empty(9).unwrap();
    let result = WeiqiGame::new(
        board,
        Seat::Human(Player::new("human", Stone::White)),
        Seat::Bot(RandomBot::new(Stone::White)),
    );
    assert_eq!(result.unwrap_err(), GameError::SeatColorMismatch);
}

#[test]
fn test_at_least_one_seat_must_be_human() {
    let board = Board::empty(9).unwrap();
    let result = WeiqiGame::<()>::new(
        board,
        Seat::Bot(RandomBot::new(Stone::Black)),
        Seat::Bot(RandomBot::new(Stone::White)),
    );
    assert_eq!(result.unwrap_err(), GameError::NoHumanSeat);
}

// =============================================================================
// Turn order & move routing
// =============================================================================

#[test]
fn test_moving_out_of_turn_is_rejected() {
    let mut game = human_vs_human();
    assert_eq!(
        game.make_move(Stone::White, Some(pos(0, 0))),
        Err(GameError::NotYourTurn(Stone::White))
    );

    game.make_move(Stone::Black, Some(pos(0, 0))).unwrap();
    assert_eq!(
        game.make_move(Stone::Black, Some(pos(0, 1))),
        Err(GameError::NotYourTurn(Stone::Black))
    );
}

#[test]
fn test_human_move_requires_a_position() {
    let mut game = human_vs_bot();
    assert_eq!(
        game.make_move(Stone::Black, None),
        Err(GameError::PositionRequired)
    );
}

#[test]
fn test_bot_move_must_not_carry_a_position() {
    let mut game = human_vs_bot();
    game.make_move(Stone::Black, Some(pos(4, 4))).unwrap();
    assert_eq!(
        game.make_move(Stone::White, Some(pos(0, 0))),
        Err(GameError::UnexpectedPosition)
    );
}

#[test]
fn test_bot_plays_a_legal_move_on_its_turn() {
    let mut game = human_vs_bot();
    game.make_move(Stone::Black, Some(pos(4, 4))).unwrap();

    let mv = game.make_move(Stone::White, None).unwrap();
    assert_eq!(mv.stone(), Stone::White);
    assert_eq!(game.board().stone_at(mv.position()), Some(Stone::White));
    assert_eq!(game.turn(), Stone::Black);
}

#[test]
fn test_illegal_board_move_leaves_game_state_alone() {
    let mut game = human_vs_human();
    game.make_move(Stone::Black, Some(pos(0, 0))).unwrap();
    game.make_move(Stone::White, Some(pos(5, 5))).unwrap();

    assert_eq!(
        game.make_move(Stone::Black, Some(pos(0, 0))),
        Err(GameError::Move(MoveError::Occupied(pos(0, 0))))
    );
    assert_eq!(game.turn(), Stone::Black);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_history_records_moves_in_order() {
    let mut game = human_vs_human();
    game.make_move(Stone::Black, Some(pos(1, 0))).unwrap();
    game.make_move(Stone::White, Some(pos(0, 1))).unwrap();

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[0].position(), pos(1, 0));
    assert_eq!(game.history()[0].stone(), Stone::Black);
    assert_eq!(game.history()[1].position(), pos(0, 1));
    assert_eq!(game.history()[1].stone(), Stone::White);
}

// =============================================================================
// Resignation & game over
// =============================================================================

#[test]
fn test_resign_awards_the_opponent() {
    let mut game = human_vs_bot();
    game.resign(Stone::Black).unwrap();
    assert_eq!(
        game.status(),
        GameStatus::Over {
            winner: Winner::White
        }
    );
}

#[test]
fn test_finished_game_accepts_no_further_actions() {
    let mut game = human_vs_bot();
    game.resign(Stone::Black).unwrap();

    assert_eq!(
        game.make_move(Stone::Black, Some(pos(0, 0))),
        Err(GameError::GameOver)
    );
    assert_eq!(game.resign(Stone::White), Err(GameError::GameOver));
}

#[test]
fn test_game_score_reads_the_underlying_board() {
    let mut game = human_vs_human();
    game.make_move(Stone::Black, Some(pos(4, 4))).unwrap();
    let score = game.score();
    assert_eq!(score.get(Stone::Black), 81);
    assert_eq!(score.get(Stone::White), 0);
}
