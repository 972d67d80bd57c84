//! Weiqi-Rust: a rules engine for the board game Go (Weiqi/Baduk).
//!
//! The crate maintains board state, enforces placement legality, resolves
//! captures, and computes territory-based area scores. A thin turn layer
//! (human players, a random bot) sits on top; presentation is left to the
//! caller.
//!
//! ## Modules
//!
//! - [`constants`] - Legal board sizes, adjacency offsets, cell encodings
//! - [`stone`], [`position`], [`moves`] - Value types
//! - [`group`] - Connected components and their liberties
//! - [`board`] - Board state, placement/capture, territory, scoring
//! - [`player`], [`bot`], [`game`] - Turn layer: seats, random bot, game loop
//!
//! ## Example
//!
//! ```
//! use weiqi_rust::board::Board;
//! use weiqi_rust::moves::Move;
//! use weiqi_rust::position::Position;
//! use weiqi_rust::stone::Stone;
//!
//! let mut board = Board::empty(9).unwrap();
//! board
//!     .place(Move::new(Position::new(2, 2), Stone::Black))
//!     .unwrap();
//!
//! // One stone plus the 80 empty points it solely borders.
//! assert_eq!(board.score().get(Stone::Black), 81);
//! ```

pub mod board;
pub mod bot;
pub mod constants;
pub mod game;
pub mod group;
pub mod moves;
pub mod player;
pub mod position;
pub mod stone;
