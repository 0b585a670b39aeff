#![doc(html_root_url = "https://docs.rs/chess_rules/0.1.0")]

//! The rules of chess for an interactive board: where each piece may go, what it may capture,
//! whether a king stands in check, and what a move does to the board.
//!
//! Every rule is a pure function of a `Board`.  A `Game` owns the board along with whose turn it
//! is, the move history, the current selection and any pawn waiting to be promoted.
//!
//! ```
//! use chess_rules::{Game, Square, BoardStatus};
//!
//! let mut game = Game::new();
//! for (src, dest) in [(Square::F2, Square::F3), (Square::E7, Square::E5),
//!                     (Square::G2, Square::G4), (Square::D8, Square::H4)].iter() {
//!     game.apply_move(*src, *dest).expect("legal move");
//! }
//! assert_eq!(game.status(), BoardStatus::Checkmate);
//! ```

pub mod attack;
pub mod bitboard;
pub mod board;
pub mod board_builder;
pub mod chess_move;
pub mod color;
pub mod config;
pub mod error;
pub mod file;
pub mod game;
pub mod movegen;
pub mod piece;
pub mod rank;
pub mod square;

pub use crate::attack::*;
pub use crate::bitboard::*;
pub use crate::board::*;
pub use crate::board_builder::*;
pub use crate::chess_move::*;
pub use crate::color::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::file::*;
pub use crate::game::*;
pub use crate::movegen::*;
pub use crate::piece::*;
pub use crate::rank::*;
pub use crate::square::*;
