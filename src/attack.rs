use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Board;
use crate::color::Color;
use crate::movegen::{attack_moves, threats};
use crate::square::Square;

/// Every capture available to `color`, across all of its pieces.
///
/// Like the per-piece attack sets this never contains a king, so it answers "which enemy pieces
/// can be taken", not "is the king in check".
///
/// ```
/// use chess_rules::{attacks_by, Board, Color, EMPTY};
///
/// assert_eq!(attacks_by(&Board::default(), Color::White), EMPTY);
/// ```
pub fn attacks_by(board: &Board, color: Color) -> BitBoard {
    board
        .pieces(color)
        .iter()
        .fold(EMPTY, |bb, (sq, piece)| bb | attack_moves(board, *piece, color, *sq))
}

/// Every square struck by a piece of `color`, whatever stands there.
pub fn threats_by(board: &Board, color: Color) -> BitBoard {
    board
        .pieces(color)
        .iter()
        .fold(EMPTY, |bb, (sq, piece)| bb | threats(board, *piece, color, *sq))
}

/// Is `square` struck by any piece of color `by`?
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    threats_by(board, by).contains(square)
}

/// The pieces of the opposite color that strike the king of `color`.
pub fn checkers(board: &Board, color: Color) -> BitBoard {
    let ksq = match board.king_square(color) {
        Some(ksq) => ksq,
        None => return EMPTY,
    };
    board
        .pieces(!color)
        .iter()
        .filter(|(sq, piece)| threats(board, *piece, !color, *sq).contains(ksq))
        .map(|(sq, _)| *sq)
        .collect()
}

/// Is the king of `color` in check?  A side without a king is never in check.
///
/// ```
/// use chess_rules::{is_in_check, Board, Color};
///
/// assert!(!is_in_check(&Board::default(), Color::White));
/// ```
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .map_or(false, |ksq| is_square_attacked(board, ksq, !color))
}
