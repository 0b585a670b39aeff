mod piece_type;

pub use self::piece_type::*;

use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::piece::Piece;
use crate::square::Square;

/// Everywhere one piece may go, split by whether the move captures.
///
/// The two sets never overlap: every quiet destination is empty, every attack destination
/// holds (or, en passant, sits behind) an enemy piece.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct Moves {
    pub quiet: BitBoard,
    pub attack: BitBoard,
}

impl Moves {
    /// Quiet moves and attacks together.
    #[inline]
    pub fn all(&self) -> BitBoard {
        self.quiet | self.attack
    }

    /// Can the piece go to `dest`?
    #[inline]
    pub fn contains(&self, dest: Square) -> bool {
        self.all().contains(dest)
    }

    /// Does the piece have nowhere to go?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all() == EMPTY
    }

    /// How many destinations in total?
    #[inline]
    pub fn len(&self) -> usize {
        self.all().popcnt() as usize
    }

    /// Keep only the destinations `keep` agrees with.
    pub fn retain<F: FnMut(Square) -> bool>(&mut self, mut keep: F) {
        self.quiet = self.quiet.filter(|dest| keep(*dest)).collect();
        self.attack = self.attack.filter(|dest| keep(*dest)).collect();
    }
}

/// Generate the moves of `piece` of `color` standing on `src`, without checking whether the
/// board agrees that it stands there.
///
/// Do this as a macro so every rule set is dispatched through one `match`.
macro_rules! dispatch {
    ($piece:expr, $method:ident, $board:expr, $src:expr, $color:expr) => {
        match $piece {
            Piece::Pawn => PawnType::$method($board, $src, $color),
            Piece::Knight => KnightType::$method($board, $src, $color),
            Piece::Bishop => BishopType::$method($board, $src, $color),
            Piece::Rook => RookType::$method($board, $src, $color),
            Piece::Queen => QueenType::$method($board, $src, $color),
            Piece::King => KingType::$method($board, $src, $color),
        }
    };
}

/// Non-capturing destinations for `piece` of `color` on `src`.
#[inline]
pub fn quiet_moves(board: &Board, piece: Piece, color: Color, src: Square) -> BitBoard {
    dispatch!(piece, quiet_moves, board, src, color)
}

/// Capturing destinations for `piece` of `color` on `src`.
#[inline]
pub fn attack_moves(board: &Board, piece: Piece, color: Color, src: Square) -> BitBoard {
    dispatch!(piece, attack_moves, board, src, color)
}

/// Squares struck by `piece` of `color` on `src`.
#[inline]
pub fn threats(board: &Board, piece: Piece, color: Color, src: Square) -> BitBoard {
    dispatch!(piece, threats, board, src, color)
}

/// The raw rule output for whatever stands on `square`.
///
/// This knows nothing about whose turn it is or whether the move would leave a king in check;
/// `Game::compute_moves` layers that on top.
///
/// ```
/// use chess_rules::{moves_for, Board, Square, BitBoard, Error};
///
/// let board = Board::default();
/// let moves = moves_for(&board, Square::E2).expect("a pawn stands on e2");
///
/// assert_eq!(moves.quiet, BitBoard::from_square(Square::E3) | BitBoard::from_square(Square::E4));
/// assert!(moves.attack.is_empty());
///
/// assert_eq!(moves_for(&board, Square::E4), Err(Error::NoPieceOnSquare { square: Square::E4 }));
/// ```
pub fn moves_for(board: &Board, square: Square) -> Result<Moves, Error> {
    let (piece, color) = board
        .cell(square)
        .occupant()
        .ok_or(Error::NoPieceOnSquare { square })?;
    Ok(Moves {
        quiet: quiet_moves(board, piece, color, square),
        attack: attack_moves(board, piece, color, square),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_builder::BoardBuilder;
    use std::convert::TryInto;

    fn squares(list: &[Square]) -> BitBoard {
        list.iter().copied().collect()
    }

    fn kings() -> BoardBuilder {
        let mut bb = BoardBuilder::new();
        bb.piece(Square::H1, Piece::King, Color::White)
            .piece(Square::H8, Piece::King, Color::Black);
        bb
    }

    #[test]
    fn dispatch_reaches_the_right_rules() {
        assert_eq!(PawnType::into_piece(), Piece::Pawn);
        assert_eq!(KnightType::into_piece(), Piece::Knight);
        assert_eq!(BishopType::into_piece(), Piece::Bishop);
        assert_eq!(RookType::into_piece(), Piece::Rook);
        assert_eq!(QueenType::into_piece(), Piece::Queen);
        assert_eq!(KingType::into_piece(), Piece::King);
    }

    #[test]
    fn starting_position_knight() {
        let board = Board::default();
        let moves = moves_for(&board, Square::G1).unwrap();
        assert_eq!(moves.quiet, squares(&[Square::F3, Square::H3]));
        assert_eq!(moves.attack, EMPTY);
    }

    #[test]
    fn starting_position_sliders_are_stuck() {
        let board = Board::default();
        for sq in [Square::A1, Square::C1, Square::D1, Square::E1].iter() {
            assert!(moves_for(&board, *sq).unwrap().is_empty());
        }
    }

    #[test]
    fn rook_stops_at_blocker() {
        let board: Board = kings()
            .piece(Square::D4, Piece::Rook, Color::White)
            .piece(Square::D6, Piece::Knight, Color::Black)
            .piece(Square::B4, Piece::Pawn, Color::White)
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::D4).unwrap();

        assert!(moves.quiet.contains(Square::D5));
        assert!(!moves.quiet.contains(Square::D6));
        assert!(!moves.all().contains(Square::D7));
        assert!(!moves.all().contains(Square::D8));
        assert_eq!(moves.attack, squares(&[Square::D6]));

        assert!(moves.quiet.contains(Square::C4));
        assert!(!moves.all().contains(Square::B4));
        assert!(!moves.all().contains(Square::A4));
        assert!(moves.quiet.contains(Square::D1));
        assert!(moves.quiet.contains(Square::H4));
        assert_eq!(moves.quiet.popcnt(), 1 + 1 + 3 + 4);
    }

    #[test]
    fn rook_never_attacks_king() {
        let board: Board = kings()
            .piece(Square::H4, Piece::Rook, Color::White)
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::H4).unwrap();
        assert!(!moves.attack.contains(Square::H8));
        assert!(moves.quiet.contains(Square::H7));
        assert!(!moves.quiet.contains(Square::H8));
        assert!(threats(&board, Piece::Rook, Color::White, Square::H4).contains(Square::H8));
    }

    #[test]
    fn bishop_rays() {
        let board: Board = kings()
            .piece(Square::C1, Piece::Bishop, Color::White)
            .piece(Square::E3, Piece::Pawn, Color::Black)
            .piece(Square::A3, Piece::Pawn, Color::White)
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::C1).unwrap();
        assert_eq!(moves.quiet, squares(&[Square::B2, Square::D2]));
        assert_eq!(moves.attack, squares(&[Square::E3]));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board: Board = kings()
            .piece(Square::D4, Piece::Queen, Color::White)
            .piece(Square::F6, Piece::Rook, Color::Black)
            .piece(Square::D2, Piece::Knight, Color::White)
            .try_into()
            .unwrap();
        let queen = moves_for(&board, Square::D4).unwrap();
        let rook = RookType::quiet_moves(&board, Square::D4, Color::White);
        let bishop = BishopType::quiet_moves(&board, Square::D4, Color::White);
        assert_eq!(queen.quiet, rook | bishop);
        assert_eq!(queen.attack, squares(&[Square::F6]));
        assert_eq!(queen.quiet.popcnt(), 22);
    }

    #[test]
    fn knight_in_the_corner() {
        let board: Board = kings()
            .piece(Square::A1, Piece::Knight, Color::Black)
            .piece(Square::B3, Piece::Bishop, Color::White)
            .piece(Square::C2, Piece::Pawn, Color::Black)
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::A1).unwrap();
        assert_eq!(moves.quiet, EMPTY);
        assert_eq!(moves.attack, squares(&[Square::B3]));
    }

    #[test]
    fn pawn_double_step_is_blocked_without_jumping() {
        let board: Board = kings()
            .piece(Square::E2, Piece::Pawn, Color::White)
            .piece(Square::E3, Piece::Knight, Color::Black)
            .piece(Square::C7, Piece::Pawn, Color::Black)
            .piece(Square::C5, Piece::Knight, Color::White)
            .try_into()
            .unwrap();
        assert_eq!(moves_for(&board, Square::E2).unwrap().quiet, EMPTY);
        assert_eq!(
            moves_for(&board, Square::C7).unwrap().quiet,
            squares(&[Square::C6])
        );
    }

    #[test]
    fn moved_pawn_takes_single_steps() {
        let board: Board = kings()
            .piece(Square::E2, Piece::Pawn, Color::White)
            .first_move(Square::E2, false)
            .try_into()
            .unwrap();
        assert_eq!(
            moves_for(&board, Square::E2).unwrap().quiet,
            squares(&[Square::E3])
        );
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let board: Board = kings()
            .piece(Square::E4, Piece::Pawn, Color::White)
            .piece(Square::D5, Piece::Pawn, Color::Black)
            .piece(Square::F5, Piece::Pawn, Color::White)
            .piece(Square::D3, Piece::Pawn, Color::Black)
            .piece(Square::E5, Piece::Rook, Color::Black)
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::E4).unwrap();
        assert_eq!(moves.quiet, EMPTY);
        assert_eq!(moves.attack, squares(&[Square::D5]));
    }

    #[test]
    fn pawn_en_passant_lands_behind_the_pawn() {
        let board: Board = kings()
            .piece(Square::E5, Piece::Pawn, Color::White)
            .piece(Square::D5, Piece::Pawn, Color::Black)
            .piece(Square::F5, Piece::Pawn, Color::Black)
            .en_passant(Some(Square::D5))
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::E5).unwrap();
        assert_eq!(moves.attack, squares(&[Square::D6]));
        assert_eq!(moves.quiet, squares(&[Square::E6]));
    }

    #[test]
    fn king_moves_and_captures() {
        let board: Board = kings()
            .piece(Square::G2, Piece::Rook, Color::Black)
            .piece(Square::G1, Piece::Knight, Color::White)
            .try_into()
            .unwrap();
        let moves = moves_for(&board, Square::H1).unwrap();
        assert_eq!(moves.quiet, squares(&[Square::H2]));
        assert_eq!(moves.attack, squares(&[Square::G2]));
    }

    #[test]
    fn empty_square_is_an_error() {
        assert_eq!(
            moves_for(&Board::default(), Square::E5),
            Err(Error::NoPieceOnSquare { square: Square::E5 })
        );
    }
}
